//! Helpers for building tool results.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use super::error::ToolError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Serialize a payload the way it is returned to clients: indented by two spaces.
pub fn pretty_json(value: &Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ToolError::internal(format!("Failed to serialize response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[test]
    fn test_pretty_json_indents_two_spaces() {
        let text = pretty_json(&json!({ "items": [1] })).unwrap();
        assert_eq!(text, "{\n  \"items\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_error_result_sets_flag() {
        let result = error_result("Error fetching countries: boom");
        assert!(result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "Error fetching countries: boom");
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_success_result() {
        let result = success_result("{}".into());
        assert!(!result.is_error.unwrap_or(false));
    }
}
