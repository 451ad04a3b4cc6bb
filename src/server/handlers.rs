//! Helpers shared by the MCP server and tool implementations

use serde::Serialize;
use serde_json::{json, Value};

use crate::types::McpResult;

/// Extract tool arguments from `tools/call` params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

/// Extract tool name from `tools/call` params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Required string argument
pub fn required_str<'a>(params: &'a Value, key: &str) -> McpResult<&'a str> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("Missing required string argument '{}'", key).into())
}

/// Build a text content response
pub fn text_response(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Text content response carrying pretty-printed JSON
pub fn json_response<T: Serialize>(value: &T) -> McpResult<Value> {
    Ok(text_response(serde_json::to_string_pretty(value)?))
}

/// Build an error content response
pub fn error_response(message: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": format!("Error: {}", message)
        }],
        "isError": true
    })
}
