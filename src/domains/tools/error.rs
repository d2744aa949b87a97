//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use serde_json::Value;
use thiserror::Error;

/// Errors that abort a tool call at the protocol level.
///
/// Upstream failures are not represented here: they are reported to the
/// client as an error-flagged tool result (see [`FetchError`]).
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into an MCP protocol error.
    pub fn to_mcp(&self) -> McpError {
        match self {
            Self::NotFound(_) => McpError::new(ErrorCode::METHOD_NOT_FOUND, self.to_string(), None),
            Self::InvalidArguments(_) => McpError::invalid_params(self.to_string(), None),
            Self::Internal(_) => McpError::internal_error(self.to_string(), None),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        err.to_mcp()
    }
}

/// Where an upstream request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never produced a response (connect, timeout, ...).
    Transport,
    /// The API answered with a non-2xx status.
    Status,
    /// The response body could not be read as JSON.
    Decode,
}

/// A failed call to the statistics API.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    /// Human-readable message, preferring the one supplied by the API.
    pub message: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
}

impl FetchError {
    pub fn transport(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("Request timed out: {err}")
        } else {
            err.to_string()
        };
        Self {
            kind: FetchErrorKind::Transport,
            message,
            status: err.status().map(|s| s.as_u16()),
        }
    }

    /// Build from a non-2xx response. The body's `message` field wins over
    /// the generic status text when the API supplies one.
    pub fn status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        Self {
            kind: FetchErrorKind::Status,
            message,
            status: Some(status),
        }
    }

    pub fn decode(status: u16, err: impl std::fmt::Display) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            message: format!("Invalid JSON in response: {err}"),
            status: Some(status),
        }
    }

    /// Prefix the message with the year a per-year request was for.
    pub fn for_year(mut self, year: i64) -> Self {
        self.message = format!("year {year}: {}", self.message);
        self
    }

    /// Text shown to the client for a failed call.
    pub fn render(&self, label: &str, base_url: Option<&str>) -> String {
        let mut text = format!("Error fetching {label}: {}", self.message);
        if let Some(base_url) = base_url {
            if let Some(status) = self.status {
                text.push_str(&format!("\nStatus: {status}"));
            }
            text.push_str(&format!("\nAPI URL: {base_url}"));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_method_not_found() {
        let err = ToolError::not_found("get_weather").to_mcp();
        assert_eq!(err.code.0, -32601);
        assert!(err.message.contains("get_weather"));
    }

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let err: McpError = ToolError::invalid_arguments("bad").into();
        assert_eq!(err.code.0, -32602);
    }

    #[test]
    fn test_status_prefers_upstream_message() {
        let err = FetchError::status(400, r#"{"message": "Invalid year"}"#);
        assert_eq!(err.kind, FetchErrorKind::Status);
        assert_eq!(err.message, "Invalid year");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn test_status_falls_back_to_status_text() {
        let err = FetchError::status(503, "<html>Service Unavailable</html>");
        assert_eq!(err.message, "Request failed with status code 503");

        let err = FetchError::status(404, r#"{"error": "missing"}"#);
        assert_eq!(err.message, "Request failed with status code 404");
    }

    #[test]
    fn test_render_plain() {
        let err = FetchError::status(500, "");
        assert_eq!(
            err.render("demographics", None),
            "Error fetching demographics: Request failed with status code 500"
        );
    }

    #[test]
    fn test_render_with_diagnostics() {
        let err = FetchError::status(404, r#"{"message": "Not found"}"#);
        assert_eq!(
            err.render("population statistics", Some("https://api.example.org/v1")),
            "Error fetching population statistics: Not found\nStatus: 404\nAPI URL: https://api.example.org/v1"
        );
    }

    #[test]
    fn test_render_without_status() {
        let err = FetchError {
            kind: FetchErrorKind::Transport,
            message: "connection refused".into(),
            status: None,
        };
        let text = err.render("population statistics", Some("http://localhost"));
        assert!(!text.contains("Status:"));
        assert!(text.ends_with("API URL: http://localhost"));
    }

    #[test]
    fn test_for_year() {
        let err = FetchError::status(500, "").for_year(2021);
        assert!(err.message.starts_with("year 2021: "));
    }
}
