//! Command and result shapes for the editor engine.
//!
//! Incoming commands arrive as JSON objects produced by the protocol layer.
//! Every command-specific field is optional at the serde level so that a
//! missing field surfaces as a `MissingParameter` result from the dispatcher
//! instead of a deserialization fault.

use serde::{Deserialize, Serialize};

/// A single editor command as received from the protocol layer.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorCommand {
    /// One of `view`, `create`, `str_replace`, `insert`, `undo_edit`.
    pub command: String,

    /// Absolute path to the target file or directory.
    #[serde(default)]
    pub path: Option<String>,

    /// Optional 1-indexed inclusive line range for `view`.
    /// A `null` start defaults to 1; an end of `-1` means end of file.
    #[serde(default)]
    pub view_range: Option<(Option<i64>, i64)>,

    /// Full file content for `create`.
    #[serde(default)]
    pub file_text: Option<String>,

    /// Exact text to replace for `str_replace`; must match exactly once.
    #[serde(default)]
    pub old_str: Option<String>,

    /// Replacement text for `str_replace` (defaults to empty) or the line to
    /// insert for `insert` (required there).
    #[serde(default)]
    pub new_str: Option<String>,

    /// 0-indexed insertion point for `insert`; 0 means before the first line.
    #[serde(default)]
    pub insert_line: Option<i64>,

    /// Free-form caller annotation; not interpreted by the engine.
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of an editor command.
///
/// `content` is present only for successful `view` commands and carries the
/// rendered, line-numbered text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl EditorResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            content: None,
        }
    }

    pub fn ok_with_content(message: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            content: Some(content.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            content: None,
        }
    }
}
