//! Writing and checking the generated file

use std::path::Path;

use serde::Serialize;

use crate::diagnostics::{GenError, Result};

/// What happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStatus {
    /// Written, and the content differs from what was there before
    Written,
    /// Written, with the same bytes it already held
    Unchanged,
    /// Check mode: the file matches
    UpToDate,
}

/// Write `contents` to `path`, truncating any existing file.
///
/// Not atomic: an interrupted write can leave a truncated file.
pub fn write(path: &Path, contents: &str) -> Result<OutputStatus> {
    let unchanged = std::fs::read_to_string(path).is_ok_and(|existing| existing == contents);

    std::fs::write(path, contents).map_err(|source| GenError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), unchanged, "wrote output");
    Ok(if unchanged {
        OutputStatus::Unchanged
    } else {
        OutputStatus::Written
    })
}

/// Compare `contents` with the file at `path` without writing
pub fn check(path: &Path, contents: &str) -> Result<OutputStatus> {
    match std::fs::read_to_string(path) {
        Ok(existing) if existing == contents => Ok(OutputStatus::UpToDate),
        Ok(_) => {
            tracing::debug!(path = %path.display(), "output differs");
            Err(GenError::OutputStale {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "output unreadable");
            Err(GenError::OutputStale {
                path: path.to_path_buf(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.rs");
        std::fs::write(&path, "a much longer previous content\n").unwrap();

        assert_eq!(write(&path, "short\n").unwrap(), OutputStatus::Written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
        assert_eq!(write(&path, "short\n").unwrap(), OutputStatus::Unchanged);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("errors.rs");
        let err = write(&path, "x").unwrap_err();
        assert!(matches!(err, GenError::OutputWrite { .. }));
        assert_eq!(err.code(), "E0401");
    }

    #[test]
    fn test_check_compares_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.rs");

        assert!(matches!(
            check(&path, "x").unwrap_err(),
            GenError::OutputStale { .. }
        ));
        assert!(!path.exists());

        std::fs::write(&path, "old\n").unwrap();
        assert!(check(&path, "new\n").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\n");

        assert_eq!(check(&path, "old\n").unwrap(), OutputStatus::UpToDate);
    }
}
