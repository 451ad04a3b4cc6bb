//! MCP Server implementation
//!
//! Line-delimited JSON-RPC over any `BufRead`/`Write` pair; stdin/stdout by
//! default.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::*;

/// MCP Server that handles JSON-RPC communication
pub struct McpServer<R = BufReader<io::Stdin>, W = BufWriter<io::Stdout>> {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer {
    /// Create a stdio server with default server info
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a stdio server with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    /// Create a server over arbitrary streams
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
            reader,
            writer,
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Run until the input stream closes (blocking)
    pub fn run(&mut self) -> McpResult<()> {
        tracing::info!(
            name = %self.server_info.name,
            tools = self.tools.len(),
            "MCP server listening on stdio"
        );

        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }

        tracing::info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Consume the server, returning the output stream
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Handle a single JSON-RPC request line
    fn handle_request(&mut self, request_str: &str) -> McpResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);

        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'"));
        }

        tracing::debug!(method = %request.method, "Request");

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            // Notifications never get a response
            _ if request.is_notification() => Ok(()),
            method => self.send(&JsonRpcError::method_not_found(id, method)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> McpResult<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> McpResult<()> {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> McpResult<()> {
        let params = params.unwrap_or(Value::Null);
        let Some(tool_name) = extract_tool_name(&params) else {
            return self.send(&JsonRpcError::invalid_params(id, "Missing tool name"));
        };

        let Some(tool) = self.tools.get(tool_name) else {
            let response = JsonRpcError::unknown_tool(id, tool_name);
            return self.send(&response);
        };

        let response = match tool.execute(extract_arguments(&params)) {
            Ok(result) => serde_json::to_value(JsonRpcResponse::new(id, result))?,
            Err(e) => {
                tracing::warn!(tool = %tool_name, error = %e, "Tool failed");
                serde_json::to_value(JsonRpcError::tool_failed(id, e.to_string()))?
            }
        };
        self.send(&response)
    }

    /// Write one response line and flush
    fn send<T: Serialize>(&mut self, response: &T) -> McpResult<()> {
        let json = serde_json::to_string(response)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
