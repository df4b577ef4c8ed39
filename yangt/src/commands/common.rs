//! Common types and utilities for yangt commands.

use std::path::Path;

use crate::error::{Result, YangtError};

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when the worker count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";
}

/// Reads a YANG source file after checking it is a regular file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(YangtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(YangtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Rejects an empty input list.
pub fn require_inputs<T>(files: &[T]) -> Result<()> {
    if files.is_empty() {
        return Err(YangtError::Validation(error_messages::NO_INPUT_FILES.to_string()));
    }
    Ok(())
}

/// Label used for `path` in tokens and diagnostics.
pub fn path_label(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("m.yang");
        std::fs::write(&path, "module m;").unwrap();
        assert_eq!(read_source(&path).unwrap(), "module m;");
    }

    #[test]
    fn test_read_source_missing() {
        let err = read_source(Path::new("/nonexistent/m.yang")).unwrap_err();
        assert!(err.to_string().contains(error_messages::INPUT_PATH_NOT_EXIST));
    }

    #[test]
    fn test_read_source_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_source(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains(error_messages::INPUT_PATH_NOT_FILE));
    }

    #[test]
    fn test_require_inputs() {
        assert!(require_inputs::<&str>(&[]).is_err());
        assert!(require_inputs(&["a.yang"]).is_ok());
    }

    #[test]
    fn test_path_label() {
        assert_eq!(path_label(Path::new("dir/m.yang")), "dir/m.yang");
    }
}
