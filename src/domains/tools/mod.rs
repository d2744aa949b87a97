//! Tools domain module.
//!
//! Every tool is a remote statistics query: arguments are mapped onto query
//! parameters, one GET (or one per year) is issued, and the JSON body is
//! returned as pretty-printed text.
//!
//! ## Architecture
//!
//! - `catalog.rs` - Operation and field schema types
//! - `definitions/` - Operation definitions (one file per tool family)
//! - `profile.rs` - API profiles selecting base URL and tool set
//! - `request.rs` - Argument to request mapping
//! - `client.rs` - Shared HTTP client
//! - `dispatcher.rs` - Tool listing and execution
//! - `error.rs` - Tool and upstream error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare an `Operation` constant in `definitions/`
//! 2. Add it to the catalog of each profile that offers it in `profile.rs`
//!
//! The field table drives both the advertised input schema and the request
//! mapping, so nothing else needs to change.

pub mod catalog;
pub mod client;
mod common;
pub mod definitions;
pub mod dispatcher;
mod error;
pub mod profile;
pub mod request;

pub use catalog::{ExecutionMode, FieldKind, FieldSpec, Operation};
pub use client::ApiClient;
pub use dispatcher::Dispatcher;
pub use error::{FetchError, FetchErrorKind, ToolError};
pub use profile::ApiProfile;
pub use request::RemoteRequest;
