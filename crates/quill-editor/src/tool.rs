//! `Tool` implementation exposing the editor engine to the tool registry.

use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};

use quill_core::Tool;

use crate::command::{EditorCommand, EditorResult};
use crate::editor::TextEditor;

/// Text editor tool: view, create, str_replace, insert, undo_edit.
///
/// Wraps a [`TextEditor`] instance; the undo history lives for as long as the
/// tool does. Paths must be absolute, so the registry workspace is not
/// consulted.
#[derive(Default)]
pub struct TextEditorTool {
    editor: TextEditor,
}

impl TextEditorTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_editor(editor: TextEditor) -> Self {
        Self { editor }
    }
}

#[async_trait::async_trait]
impl Tool for TextEditorTool {
    fn name(&self) -> &'static str {
        "text_editor"
    }

    fn description(&self) -> &'static str {
        "View, create and edit text files. `view` shows a file with line numbers or lists a directory. `create` writes a file, overwriting any existing content. `str_replace` replaces text that matches `old_str` exactly once. `insert` adds a line at a 0-indexed position. `undo_edit` reverts the most recent edit to a file."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "The operation to perform.",
                    "enum": ["view", "create", "str_replace", "insert", "undo_edit"]
                },
                "path": {
                    "type": "string",
                    "description": "Absolute path to the target file or directory, e.g. `/repo/file.py`."
                },
                "view_range": {
                    "type": "array",
                    "description": "Optional parameter of `view` for files. 1-indexed inclusive [start, end]; a null start means 1 and an end of -1 means the last line.",
                    "items": { "type": ["integer", "null"] }
                },
                "file_text": {
                    "type": "string",
                    "description": "Required parameter of `create`: the full content of the file."
                },
                "old_str": {
                    "type": "string",
                    "description": "Required parameter of `str_replace`: the exact text to replace. Must match exactly one location, including whitespace."
                },
                "new_str": {
                    "type": "string",
                    "description": "Optional parameter of `str_replace` with the replacement text (defaults to removing the match). Required parameter of `insert` with the line to insert."
                },
                "insert_line": {
                    "type": "integer",
                    "description": "Required parameter of `insert`: 0-indexed insertion point. 0 inserts before the first line; the current line count appends after the last line."
                },
                "description": {
                    "type": "string",
                    "description": "Optional human-readable note about the edit."
                }
            },
            "required": ["command", "path"]
        })
    }

    async fn execute(&self, args: Value, _workspace: &Path) -> Result<Value> {
        let command: EditorCommand = match serde_json::from_value(args) {
            Ok(command) => command,
            Err(err) => {
                let message = err.to_string();
                let message = if message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    format!("Invalid arguments: {}", message)
                };
                return Ok(serde_json::to_value(EditorResult::failure(message))?);
            }
        };

        let result = self.editor.execute(&command).await;
        Ok(serde_json::to_value(result)?)
    }
}
