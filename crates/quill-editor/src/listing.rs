//! Directory listing seam.
//!
//! The original tool shelled out to `ls`; here listing is an injected
//! capability so the engine stays free of process-spawning concerns and tests
//! can substitute failing or canned listers.

use std::path::Path;

use thiserror::Error;

/// Failure reported by a directory-listing collaborator.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ListingError(pub String);

/// Lists the immediate children of a directory path.
pub trait DirectoryLister: Send + Sync {
    fn list(&self, path: &Path) -> Result<Vec<String>, ListingError>;
}

/// Default lister backed by `std::fs::read_dir`, entries sorted by name.
#[derive(Debug, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<String>, ListingError> {
        let entries = std::fs::read_dir(path).map_err(|e| ListingError(e.to_string()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ListingError(e.to_string()))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}
