use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
        Tool,
    },
    object,
    service::RequestContext,
};
use tracing::{info, warn};

use crate::error::ExecError;
use crate::executor;

pub const TOOL_NAME: &str = "execute_command";

const TOOL_DESCRIPTION: &str = "Executes a command based on the prompt content according to \
     the operating system being used. `command` must include a string that is a valid command \
     with arguments for the operating system.";

/// The one long-lived MCP handler. Owned by `main` for the lifetime of the
/// process; stateless across calls.
#[derive(Clone, Default)]
pub struct CommandServer;

impl CommandServer {
    pub fn new() -> Self {
        Self
    }
}

/// Extract `arguments["command"]` as a non-empty string.
///
/// Non-string values are rejected rather than coerced to text.
fn extract_command(arguments: Option<&JsonObject>) -> Option<&str> {
    arguments?
        .get("command")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}

impl ServerHandler for CommandServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "local-command-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Exposes a single tool, `execute_command`, that runs a shell command on the \
                 host and returns its captured stdout (or a textual failure description)."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(vec![Tool::new(
            TOOL_NAME,
            TOOL_DESCRIPTION,
            Arc::new(object!({
                "type": "object",
                "properties": {
                    "command": {
                        "type": "string",
                        "description": "Command to execute with arguments",
                    },
                },
                "required": ["command"],
            })),
        )]))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if request.name != TOOL_NAME {
            return Err(McpError::invalid_params("Unknown tool", None));
        }

        let command = extract_command(request.arguments.as_ref())
            .ok_or_else(|| McpError::invalid_params("Command is required", None))?;

        info!(command, "executing command");

        // Execution failures become ordinary tool output, not protocol
        // errors. Only the missing-command precondition escapes as one.
        let text = match executor::execute(command).await {
            Ok(stdout) => stdout,
            Err(ExecError::MissingCommand) => {
                return Err(McpError::invalid_params("Command is required", None));
            }
            Err(err) => {
                warn!(command, %err, "command failed");
                err.to_string()
            }
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
