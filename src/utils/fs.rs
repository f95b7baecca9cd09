use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{map_io_err, PruneError, PruneResult};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> PruneResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(map_io_err(path))
}

/// Write string content to a file, replacing it atomically.
///
/// The content goes to a temporary file in the same directory, which then
/// takes the original's place by rename. An interrupted run leaves either
/// the old file or the new one on disk, never a partial write.
pub fn write_file_atomic(path: impl AsRef<Path>, content: &str) -> PruneResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp_file =
        NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new("."))).map_err(map_io_err(path))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(map_io_err(path))?;
    temp_file.flush().map_err(map_io_err(path))?;

    temp_file
        .persist(path)
        .map_err(|e| PruneError::io_error(e.error, Some(path)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_file_atomic(&file_path, "Hello, world!\n").unwrap();
        let content = read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, world!\n");
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_file_atomic(&file_path, "first\nversion\n").unwrap();
        write_file_atomic(&file_path, "second\n").unwrap();

        let content = read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "second\n");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("absent.txt");

        let err = read_file_to_string(&file_path).unwrap_err();
        match err {
            PruneError::Io { path, .. } => assert_eq!(path, Some(file_path)),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
