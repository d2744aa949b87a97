//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for startup and lifecycle
//! failures. Failures of individual tool calls never surface here: they are
//! reported to the client through the MCP response.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_error_conversions() {
        let err: Error = ToolError::not_found("get_weather").into();
        assert_eq!(err.to_string(), "Tool error: Unknown tool: get_weather");

        let err = Error::config("API base URL must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: API base URL must not be empty"
        );
    }
}
