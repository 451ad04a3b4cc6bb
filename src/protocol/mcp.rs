//! MCP (Model Context Protocol) types

use serde::Serialize;
use serde_json::Value;

use crate::types::McpResult;

/// Protocol revision announced during `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Tool entry advertised by `tools/list`
#[derive(Serialize, Debug, Clone)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    /// JSON Schema for the `arguments` object of `tools/call`
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl McpTool {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Name and version reported in the `initialize` result.
///
/// Defaults to the crate's own package name and version.
#[derive(Clone, Debug)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self::new(crate::NAME, crate::VERSION)
    }
}

/// A callable tool over the loaded corpus.
///
/// Implementors read from a shared `CorpusStore` snapshot; `execute` receives
/// the raw `arguments` object and returns an MCP content payload.
pub trait Tool: Send + Sync {
    fn definition(&self) -> McpTool;

    /// Errors become JSON-RPC tool failures; they never end the session
    fn execute(&self, params: Value) -> McpResult<Value>;

    /// Registry key; the advertised name unless overridden
    fn name(&self) -> String {
        self.definition().name
    }
}
