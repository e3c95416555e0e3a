//! Content viewer: line-numbered file rendering and directory listings.

use std::path::Path;

use tracing::debug;

use crate::command::EditorResult;
use crate::error::{EditorError, Result};
use crate::listing::DirectoryLister;

/// Upper bound on rendered view output, in bytes of line-numbered text.
const MAX_VIEW_BYTES: usize = 10 * 1024;

/// Marker appended when rendered output exceeds [`MAX_VIEW_BYTES`].
const CLIP_MARKER: &str = "<response clipped>";

/// Render a file with line numbers, or list a directory through `lister`.
///
/// `range` is 1-indexed inclusive; a `None` start defaults to 1 and an end of
/// `-1` means the last line. Out-of-bounds ends are clamped to the file length
/// and starts below 1 are raised to 1; no error is reported for either.
pub(crate) fn view(
    path: &Path,
    range: Option<(Option<i64>, i64)>,
    lister: &dyn DirectoryLister,
) -> Result<EditorResult> {
    if !path.exists() {
        return Err(EditorError::NotFound(path.display().to_string()));
    }

    if path.is_dir() {
        let names = lister.list(path)?;
        debug!(path = %path.display(), entries = names.len(), "listed directory");
        return Ok(EditorResult::ok_with_content(
            format!("Directory listing for {}:", path.display()),
            names.join("\n"),
        ));
    }

    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content.split('\n').collect();

    let (start, end) = match range {
        Some((start, end)) => {
            let start = start.unwrap_or(1).max(1) as usize;
            let end = if end == -1 {
                lines.len()
            } else {
                (end.max(0) as usize).min(lines.len())
            };
            (start, end)
        }
        None => (1, lines.len()),
    };

    // Line numbers are absolute positions in the file, not slice-relative.
    let mut rendered = String::new();
    if start <= end {
        for number in start..=end {
            if !rendered.is_empty() {
                rendered.push('\n');
            }
            rendered.push_str(&format!("{}: {}", number, lines[number - 1]));
        }
    }

    if rendered.len() > MAX_VIEW_BYTES {
        let mut cut = MAX_VIEW_BYTES;
        while !rendered.is_char_boundary(cut) {
            cut -= 1;
        }
        rendered.truncate(cut);
        rendered.push_str(CLIP_MARKER);
        return Ok(EditorResult::ok_with_content(
            "File content (truncated):",
            rendered,
        ));
    }

    Ok(EditorResult::ok_with_content("File content:", rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{FsDirectoryLister, ListingError};
    use tempfile::tempdir;

    struct FailingLister;

    impl DirectoryLister for FailingLister {
        fn list(&self, _path: &Path) -> std::result::Result<Vec<String>, ListingError> {
            Err(ListingError("permission denied".to_string()))
        }
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn numbers_every_line_without_range() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "f.txt", "alpha\nbeta\ngamma");

        let result = view(&path, None, &FsDirectoryLister).unwrap();
        assert!(result.success);
        assert_eq!(result.message, "File content:");
        assert_eq!(result.content.unwrap(), "1: alpha\n2: beta\n3: gamma");
    }

    #[test]
    fn range_selects_single_line_with_absolute_number() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "f.txt", "l1\nl2\nl3\nl4\nl5");

        let result = view(&path, Some((Some(2), 2)), &FsDirectoryLister).unwrap();
        assert_eq!(result.content.unwrap(), "2: l2");
    }

    #[test]
    fn negative_one_end_means_end_of_file() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "f.txt", "l1\nl2\nl3");

        let result = view(&path, Some((Some(2), -1)), &FsDirectoryLister).unwrap();
        assert_eq!(result.content.unwrap(), "2: l2\n3: l3");
    }

    #[test]
    fn null_start_defaults_to_one_and_end_is_clamped() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "f.txt", "l1\nl2");

        let result = view(&path, Some((None, 99)), &FsDirectoryLister).unwrap();
        assert_eq!(result.content.unwrap(), "1: l1\n2: l2");
    }

    #[test]
    fn start_below_one_is_raised_to_one() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "f.txt", "l1\nl2");

        let result = view(&path, Some((Some(0), 1)), &FsDirectoryLister).unwrap();
        assert_eq!(result.content.unwrap(), "1: l1");
    }

    #[test]
    fn start_past_end_of_file_yields_empty_content() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "f.txt", "l1\nl2");

        let result = view(&path, Some((Some(10), 20)), &FsDirectoryLister).unwrap();
        assert_eq!(result.content.unwrap(), "");
    }

    #[test]
    fn oversized_output_is_clipped() {
        let dir = tempdir().unwrap();
        let line = "x".repeat(200);
        let content = (0..100).map(|_| line.as_str()).collect::<Vec<_>>().join("\n");
        let path = write_file(&dir, "big.txt", &content);

        let result = view(&path, None, &FsDirectoryLister).unwrap();
        assert_eq!(result.message, "File content (truncated):");
        let rendered = result.content.unwrap();
        assert!(rendered.ends_with(CLIP_MARKER));
        assert_eq!(rendered.len(), MAX_VIEW_BYTES + CLIP_MARKER.len());
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let result = view(&dir.path().join("absent"), None, &FsDirectoryLister);
        assert!(matches!(result, Err(EditorError::NotFound(_))));
    }

    #[test]
    fn directory_is_listed_through_collaborator() {
        let dir = tempdir().unwrap();
        write_file(&dir, "b.txt", "");
        write_file(&dir, "a.txt", "");

        let result = view(dir.path(), None, &FsDirectoryLister).unwrap();
        assert!(result.success);
        assert!(result.message.starts_with("Directory listing for "));
        assert_eq!(result.content.unwrap(), "a.txt\nb.txt");
    }

    #[test]
    fn lister_failure_surfaces_as_listing_error() {
        let dir = tempdir().unwrap();
        let result = view(dir.path(), None, &FailingLister);
        assert!(matches!(result, Err(EditorError::Listing(_))));
    }
}
