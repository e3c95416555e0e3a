//! In-memory undo history, one snapshot stack per file path.
//!
//! The store is an explicitly owned component injected into the editor rather
//! than a process-wide global, so tests and future per-session editors get
//! isolated histories. Snapshots live only in memory; they are a short-lived
//! safety net, not a persistent journal.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Maps each edited path to the stack of its prior contents, most-recent-last.
///
/// Invariant: a path's stack grows by exactly one entry per successful
/// mutation (create-overwrite, str_replace, insert) and shrinks by exactly one
/// per successful undo. Snapshots are immutable once pushed.
#[derive(Debug, Default)]
pub struct EditHistory {
    snapshots: Mutex<HashMap<PathBuf, Vec<String>>>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation content of `path`.
    pub fn push(&self, path: &Path, content: String) {
        self.snapshots
            .lock()
            .entry(path.to_path_buf())
            .or_default()
            .push(content);
    }

    /// Take the most recent snapshot for `path`, if any.
    ///
    /// Empty stacks are pruned so a path with fully consumed history behaves
    /// the same as one that was never edited.
    pub fn pop(&self, path: &Path) -> Option<String> {
        let mut snapshots = self.snapshots.lock();
        let stack = snapshots.get_mut(path)?;
        let content = stack.pop();
        if stack.is_empty() {
            snapshots.remove(path);
        }
        content
    }

    /// Number of snapshots currently held for `path`.
    pub fn depth(&self, path: &Path) -> usize {
        self.snapshots
            .lock()
            .get(path)
            .map(|stack| stack.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_most_recent_first() {
        let history = EditHistory::new();
        let path = Path::new("/tmp/file.txt");

        history.push(path, "first".to_string());
        history.push(path, "second".to_string());

        assert_eq!(history.depth(path), 2);
        assert_eq!(history.pop(path).as_deref(), Some("second"));
        assert_eq!(history.pop(path).as_deref(), Some("first"));
        assert_eq!(history.pop(path), None);
    }

    #[test]
    fn paths_do_not_interfere() {
        let history = EditHistory::new();
        let a = Path::new("/tmp/a.txt");
        let b = Path::new("/tmp/b.txt");

        history.push(a, "a0".to_string());
        history.push(b, "b0".to_string());

        assert_eq!(history.pop(b).as_deref(), Some("b0"));
        assert_eq!(history.depth(a), 1);
        assert_eq!(history.depth(b), 0);
    }

    #[test]
    fn pop_on_unknown_path_is_none() {
        let history = EditHistory::new();
        assert_eq!(history.pop(Path::new("/nope")), None);
    }
}
