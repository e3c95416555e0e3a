//! Error types for the tool registry.

use thiserror::Error;

/// Errors that can occur at the registry boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid arguments provided to a tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Convert the error into the failure JSON shape tools return.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "success": false,
            "message": self.to_string()
        })
    }
}
