//! Function declarations exposed to the LLM.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quill_core::Tool;
use quill_editor::TextEditorTool;

/// A tool's declaration in the shape LLM APIs expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl FunctionDeclaration {
    pub fn from_tool(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool.parameters(),
        }
    }
}

/// Build declarations for every tool this workspace ships.
pub fn build_function_declarations() -> Vec<FunctionDeclaration> {
    vec![FunctionDeclaration::from_tool(&TextEditorTool::new())]
}
