//! Text editor tool engine for AI agents.
//!
//! This crate implements the command dispatcher and file-mutation engine behind
//! the `text_editor` tool: viewing files and directories, creating files,
//! exact-match string replacement, line-indexed insertion, and per-file undo.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Infrastructure)** crate:
//! - Depends on: quill-core (for the Tool trait)
//! - Used by: quill-tools (registry)
//!
//! # Usage
//!
//! ```rust,ignore
//! use quill_editor::{EditorCommand, TextEditor};
//!
//! let editor = TextEditor::new();
//! let command: EditorCommand = serde_json::from_value(args)?;
//! let result = editor.execute(&command).await;
//! assert!(result.success);
//! ```
//!
//! All outcomes, including I/O errors, are normalized into [`EditorResult`];
//! nothing escapes the dispatcher as a panic or unhandled error.

mod command;
mod edit;
mod editor;
mod error;
mod history;
mod listing;
mod tool;
mod view;

pub use command::{EditorCommand, EditorResult};
pub use editor::TextEditor;
pub use error::{EditorError, Result};
pub use history::EditHistory;
pub use listing::{DirectoryLister, FsDirectoryLister, ListingError};
pub use tool::TextEditorTool;
