//! Tool registry implementation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use quill_core::Tool;
use quill_editor::TextEditorTool;

use crate::definitions::FunctionDeclaration;
use crate::error::ToolError;

/// Tool registry that manages and executes tools by name.
///
/// ## Thread Safety
///
/// The registry is designed to be wrapped in `Arc<RwLock<ToolRegistry>>` for
/// concurrent access. All registered tools implement Send + Sync.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    workspace: PathBuf,
}

impl ToolRegistry {
    /// Create a registry for the given workspace with the built-in tools.
    pub fn new(workspace: PathBuf) -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
            workspace,
        };
        registry.register(Arc::new(TextEditorTool::new()));
        registry
    }

    /// Register a tool, replacing any previous tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Execute a tool by name with the given arguments.
    ///
    /// ## Returns
    /// - `Ok(Value)`: tool result (a failure-shaped JSON for expected errors)
    /// - `Err(e)`: unknown tool or an unexpected execution fault
    pub async fn execute_tool(&mut self, name: &str, args: Value) -> Result<Value> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        debug!(tool = name, "executing tool");

        // Clone the Arc to avoid holding the borrow across the await.
        let tool = Arc::clone(tool);
        tool.execute(args, &self.workspace).await
    }

    /// List all available tool names.
    pub fn available_tools(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Declarations for every registered tool, for LLM exposure.
    pub fn get_tool_definitions(&self) -> Vec<FunctionDeclaration> {
        self.tools
            .values()
            .map(|tool| FunctionDeclaration::from_tool(tool.as_ref()))
            .collect()
    }

    /// Get the workspace path.
    pub fn workspace(&self) -> &PathBuf {
        &self.workspace
    }

    /// Update the workspace path.
    pub fn set_workspace(&mut self, workspace: PathBuf) {
        self.workspace = workspace;
    }
}
