//! Transport layer for the MCP server.
//!
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//!
//! The transport handles the connection lifecycle and hands messages to
//! the rmcp service built around [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
