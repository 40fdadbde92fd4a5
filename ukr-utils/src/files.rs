//! Small filesystem helpers with path-carrying errors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors from filesystem helpers.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// An I/O operation on `path` failed
    #[error("{operation} failed for {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    fn io(operation: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| FileError::Io {
            operation,
            path,
            source,
        }
    }
}

/// Read a whole UTF-8 file.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(FileError::io("read", path))
}

/// Create or truncate `path` and write `contents`.
pub fn write_string(path: impl AsRef<Path>, contents: &str) -> Result<(), FileError> {
    let path = path.as_ref();
    debug!(path = %path.display(), bytes = contents.len(), "writing file");
    fs::write(path, contents).map_err(FileError::io("write", path))
}

/// Delete a file if it exists. Returns whether anything was deleted.
pub fn delete_if_exists(path: impl AsRef<Path>) -> Result<bool, FileError> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "deleted file");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FileError::io("delete", path)(e)),
    }
}

/// Delete a directory and everything under it, if it exists. Returns whether
/// anything was deleted.
pub fn remove_dir_all(path: impl AsRef<Path>) -> Result<bool, FileError> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Ok(()) => {
            debug!(path = %path.display(), "deleted directory");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FileError::io("delete directory", path)(e)),
    }
}

/// Create a directory and any missing parents.
pub fn create_dir_all(path: impl AsRef<Path>) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(FileError::io("create directory", path))
}

/// Copy `from` to `to`, replacing `to` if it exists. Returns bytes copied.
pub fn copy_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<u64, FileError> {
    let (from, to) = (from.as_ref(), to.as_ref());
    debug!(from = %from.display(), to = %to.display(), "copying file");
    fs::copy(from, to).map_err(FileError::io("copy", from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        write_string(&path, "Привіт").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "Привіт");

        write_string(&path, "again").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "again");
    }

    #[test]
    fn read_missing_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_to_string(&path).unwrap_err();
        let FileError::Io {
            operation,
            path: err_path,
            source,
        } = err;
        assert_eq!(operation, "read");
        assert_eq!(err_path, path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        write_string(&path, "x").unwrap();

        assert!(delete_if_exists(&path).unwrap());
        assert!(!delete_if_exists(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("reports");
        create_dir_all(root.join("2022").join("06")).unwrap();
        write_string(root.join("2022").join("06").join("22.txt"), "x").unwrap();

        assert!(remove_dir_all(&root).unwrap());
        assert!(!root.exists());
        assert!(!remove_dir_all(&root).unwrap());
    }

    #[test]
    fn remove_dir_all_on_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        write_string(&path, "x").unwrap();

        let FileError::Io {
            operation,
            path: err_path,
            ..
        } = remove_dir_all(&path).unwrap_err();
        assert_eq!(operation, "delete directory");
        assert_eq!(err_path, path);
        assert!(path.exists());
    }

    #[test]
    fn create_nested_dirs_and_copy() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());

        let src = dir.path().join("src.txt");
        let dst = nested.join("dst.txt");
        write_string(&src, "content").unwrap();
        write_string(&dst, "old").unwrap();

        assert_eq!(copy_file(&src, &dst).unwrap(), 7);
        assert_eq!(read_to_string(&dst).unwrap(), "content");
    }
}
