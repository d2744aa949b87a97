//! UNHCR statistics MCP server library.
//!
//! Exposes the UNHCR refugee statistics API as a fixed catalog of MCP tools.
//! Each tool call is mapped onto one parameterized GET request (one per year
//! for the time series tool) and the JSON response is returned as text.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Operation catalog, API profiles, request mapping and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use unhcr_mcp_server::{core::Config, core::McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
