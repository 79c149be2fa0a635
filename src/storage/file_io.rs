//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// A file that exists but does not parse into `T` is reported as
/// [`BudgetError::CorruptData`].
pub fn read_json<T, P>(path: P) -> Result<Option<T>, BudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(BudgetError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| BudgetError::CorruptData(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Path of the temporary file used while writing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| BudgetError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Write a file atomically with a caller-supplied writer
///
/// `write` fills a buffered temp file next to `path`. Only if it succeeds is
/// the temp file flushed, synced and renamed over `path`; otherwise `path`
/// is left untouched and the temp file removed.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), BudgetError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), BudgetError>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let result = write_temp(&temp_path, write).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| BudgetError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_temp<F>(temp_path: &Path, write: F) -> Result<(), BudgetError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), BudgetError>,
{
    let file = File::create(temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;

    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Option<TestData> = read_json(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        write_json_atomic(&path, &sample()).unwrap();

        // A directory squatting on the temp path makes the write fail
        fs::create_dir(temp_path_for(&path)).unwrap();
        let result = write_json_atomic(
            &path,
            &TestData {
                name: "other".into(),
                value: 1,
            },
        );
        assert!(result.is_err());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_read_invalid_json_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_read_wrong_shape_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shape.json");
        fs::write(&path, r#"{"name": 5, "value": "x"}"#).unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_temp_path_for() {
        assert_eq!(
            temp_path_for(Path::new("/data/budget_data.json")),
            PathBuf::from("/data/budget_data.json.tmp")
        );
        assert_eq!(temp_path_for(Path::new("plain")), PathBuf::from("plain.tmp"));
    }

    #[test]
    fn test_write_atomic_failure_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        fs::write(&path, "previous").unwrap();

        let result = write_atomic(&path, |writer| {
            writer.write_all(b"partial").unwrap();
            Err(BudgetError::Export("writer gave up".into()))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_atomic_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        write_atomic(&path, |writer| {
            writer
                .write_all(b"hello")
                .map_err(|e| BudgetError::Export(e.to_string()))
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(!temp_path_for(&path).exists());
    }
}
