//! File mutator: create/overwrite, exact-match replacement, line insertion.
//!
//! Each successful mutation pushes the pre-mutation content onto the history
//! store before writing. Validation failures must leave both the file and the
//! history untouched, so every check happens before the push.

use std::path::Path;

use tracing::info;

use crate::command::EditorResult;
use crate::error::{EditorError, Result};
use crate::history::EditHistory;

/// Write `file_text` to `path`, replacing any existing content.
///
/// Overwriting an existing file is undoable; creating a brand-new file pushes
/// nothing because there is no prior state to restore.
pub(crate) fn create(path: &Path, file_text: &str, history: &EditHistory) -> Result<EditorResult> {
    let existed = path.exists();
    if existed {
        let previous = std::fs::read_to_string(path)?;
        history.push(path, previous);
    }

    std::fs::write(path, file_text)?;
    info!(path = %path.display(), overwrite = existed, "created file");

    let message = if existed {
        format!("File overwritten at {}", path.display())
    } else {
        format!("File created at {}", path.display())
    };
    Ok(EditorResult::ok(message))
}

/// Replace the single occurrence of `old_str` in `path` with `new_str`.
pub(crate) fn str_replace(
    path: &Path,
    old_str: &str,
    new_str: &str,
    history: &EditHistory,
) -> Result<EditorResult> {
    if !path.exists() {
        return Err(EditorError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;

    let occurrences = content.matches(old_str).count();
    match occurrences {
        0 => return Err(EditorError::NoMatch),
        1 => {}
        n => return Err(EditorError::AmbiguousMatch(n)),
    }

    let replaced = content.replacen(old_str, new_str, 1);
    history.push(path, content);
    std::fs::write(path, replaced)?;
    info!(path = %path.display(), "replaced text");

    Ok(EditorResult::ok(
        "Successfully replaced text at exactly one location.",
    ))
}

/// Insert `new_str` as a new line at 0-indexed position `insert_line`.
///
/// Position 0 places the line before the former first line; a position equal
/// to the current line count appends after the last line.
pub(crate) fn insert(
    path: &Path,
    insert_line: i64,
    new_str: &str,
    history: &EditHistory,
) -> Result<EditorResult> {
    if !path.exists() {
        return Err(EditorError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut lines: Vec<&str> = content.split('\n').collect();

    let line_count = lines.len();
    if insert_line < 0 || insert_line as usize > line_count {
        return Err(EditorError::InvalidLineNumber {
            line: insert_line,
            line_count,
        });
    }

    lines.insert(insert_line as usize, new_str);
    let updated = lines.join("\n");
    history.push(path, content);
    std::fs::write(path, updated)?;
    info!(path = %path.display(), line = insert_line, "inserted text");

    Ok(EditorResult::ok(format!(
        "Successfully inserted text at line {}.",
        insert_line
    )))
}
