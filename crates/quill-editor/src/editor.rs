//! Command dispatcher and undo engine.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::command::{EditorCommand, EditorResult};
use crate::edit;
use crate::error::{EditorError, Result};
use crate::history::EditHistory;
use crate::listing::{DirectoryLister, FsDirectoryLister};
use crate::view;

/// The text editor engine.
///
/// Owns its undo history and directory-listing collaborator; callers that need
/// isolated histories (tests, per-session editors) simply construct separate
/// instances. The engine itself is stateless beyond the history store and
/// processes one command to completion at a time.
pub struct TextEditor {
    history: EditHistory,
    lister: Box<dyn DirectoryLister>,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    /// Create an editor with a fresh history and the filesystem-backed lister.
    pub fn new() -> Self {
        Self::with_lister(Box::new(FsDirectoryLister))
    }

    /// Create an editor with a custom directory-listing collaborator.
    pub fn with_lister(lister: Box<dyn DirectoryLister>) -> Self {
        Self {
            history: EditHistory::new(),
            lister,
        }
    }

    /// The undo history backing this editor.
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Execute a command, normalizing every outcome into an [`EditorResult`].
    ///
    /// Validation order is fixed: path presence and absoluteness first, then
    /// command-specific field presence, then the handler. Failures before the
    /// handler perform no filesystem access and no history push.
    pub async fn execute(&self, command: &EditorCommand) -> EditorResult {
        debug!(command = %command.command, path = ?command.path, "dispatching editor command");
        match self.dispatch(command) {
            Ok(result) => result,
            Err(err) => {
                warn!(command = %command.command, error = %err, "editor command failed");
                EditorResult::failure(err.to_string())
            }
        }
    }

    fn dispatch(&self, command: &EditorCommand) -> Result<EditorResult> {
        let path_str = command
            .path
            .as_deref()
            .ok_or(EditorError::MissingParameter("path"))?;
        let path = Path::new(path_str);
        if !path.is_absolute() {
            return Err(EditorError::InvalidPath(path_str.to_string()));
        }

        match command.command.as_str() {
            "view" => view::view(path, command.view_range, self.lister.as_ref()),
            "create" => {
                let file_text = command
                    .file_text
                    .as_deref()
                    .ok_or(EditorError::MissingParameter("file_text"))?;
                edit::create(path, file_text, &self.history)
            }
            "str_replace" => {
                let old_str = command
                    .old_str
                    .as_deref()
                    .ok_or(EditorError::MissingParameter("old_str"))?;
                let new_str = command.new_str.as_deref().unwrap_or("");
                edit::str_replace(path, old_str, new_str, &self.history)
            }
            "insert" => {
                let insert_line = command
                    .insert_line
                    .ok_or(EditorError::MissingParameter("insert_line"))?;
                let new_str = command
                    .new_str
                    .as_deref()
                    .ok_or(EditorError::MissingParameter("new_str"))?;
                edit::insert(path, insert_line, new_str, &self.history)
            }
            "undo_edit" => self.undo_edit(path),
            other => Err(EditorError::UnknownCommand(other.to_string())),
        }
    }

    /// Rewrite `path` with its most recent snapshot.
    ///
    /// Each undo consumes exactly one snapshot; repeated calls walk further
    /// back until the stack is exhausted. If the restoring write fails the
    /// snapshot is pushed back so the stack stays consistent with the file.
    fn undo_edit(&self, path: &Path) -> Result<EditorResult> {
        let snapshot = self
            .history
            .pop(path)
            .ok_or_else(|| EditorError::NoHistory(path.display().to_string()))?;

        if let Err(err) = std::fs::write(path, &snapshot) {
            self.history.push(path, snapshot);
            return Err(err.into());
        }
        info!(path = %path.display(), "reverted last edit");

        Ok(EditorResult::ok(format!(
            "Successfully reverted last edit at {}",
            path.display()
        )))
    }
}
