//! Error types for editor command execution.

use thiserror::Error;

use crate::listing::ListingError;

/// Errors that can occur while executing an editor command.
///
/// Every variant is normalized into a `success:false` result at the dispatcher
/// boundary; none of them escapes to the caller as a hard fault.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Path is not absolute
    #[error("Path must be absolute, got: {0}")]
    InvalidPath(String),

    /// Target file or directory does not exist
    #[error("File or directory not found: {0}")]
    NotFound(String),

    /// A command-required field is absent
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    /// str_replace target substring absent
    #[error("old_str was not found in file")]
    NoMatch,

    /// str_replace target substring appears more than once
    #[error("Found {0} occurrences of old_str; add surrounding context to make the match unique")]
    AmbiguousMatch(usize),

    /// insert position outside the valid line range
    #[error("Invalid insert_line {line}: must be between 0 and {line_count}")]
    InvalidLineNumber { line: i64, line_count: usize },

    /// undo_edit with no prior snapshot for the path
    #[error("No edit history found for {0}")]
    NoHistory(String),

    /// Directory listing collaborator failure
    #[error("Error listing directory: {0}")]
    Listing(#[from] ListingError),

    /// Unrecognized command name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Fallback for unexpected filesystem faults
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;
