// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::converter::report::BatchReport;
use crate::utils::error::StorageError;
use std::io::Write;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // No-op for an existing directory, fails if the path is a regular file
        fs::create_dir_all(&base_path)
            .map_err(StorageError::IoError)?;
        tracing::debug!("Using output directory {}", base_path.display());

        Ok(Self { base_dir: base_path })
    }

    /// Full path an artifact with this file name is written to
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Writes a text artifact verbatim, replacing any previous file of the same name
    pub fn save_artifact(&self, file_name: &str, content: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.path_for(file_name);

        let mut file = fs::File::create(&file_path)
            .map_err(StorageError::IoError)?;
        file.write_all(content.as_bytes())
            .map_err(StorageError::IoError)?;

        tracing::debug!("Saved artifact to {} ({} bytes)", file_path.display(), content.len());

        Ok(file_path)
    }
}

/// Saves a summary of a batch run in JSON format
pub fn save_report(path: &Path, report: &BatchReport) -> Result<PathBuf, StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(StorageError::IoError)?;
        }
    }

    let entries = serde_json::to_value(report)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;

    let document = serde_json::json!({
        "converted_count": report.success_count(),
        "failed_count": report.failure_count(),
        "files": entries,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    });

    let document_str = serde_json::to_string_pretty(&document)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;

    fs::write(path, document_str)
        .map_err(StorageError::IoError)?;

    tracing::info!("Saved batch report to {}", path.display());

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("output");

        let storage = StorageManager::new(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.path_for("x.txt"), nested.join("x.txt"));
    }

    #[test]
    fn test_base_path_that_is_a_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("output");
        fs::write(&file_path, "not a directory").unwrap();

        let result = StorageManager::new(&file_path);
        assert!(matches!(result, Err(StorageError::IoError(_))));
    }

    #[test]
    fn test_save_artifact_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageManager::new(temp_dir.path()).unwrap();

        storage.save_artifact("note.txt", "first version, longer").unwrap();
        let path = storage.save_artifact("note.txt", "second").unwrap();

        assert_eq!(path, temp_dir.path().join("note.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_save_artifact_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageManager::new(temp_dir.path()).unwrap();
        fs::remove_dir(temp_dir.path()).unwrap();

        let result = storage.save_artifact("note.txt", "text");
        assert!(matches!(result, Err(StorageError::IoError(_))));
    }

    #[test]
    fn test_save_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut report = BatchReport::default();
        report.record_success(PathBuf::from("input/a.vnt"), PathBuf::from("output/a.txt"));
        report.record_failure(PathBuf::from("input/b.vnt"), "File not found - input/b.vnt");

        let path = temp_dir.path().join("reports").join("batch.json");
        save_report(&path, &report).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["converted_count"], 1);
        assert_eq!(json["failed_count"], 1);
        assert_eq!(json["files"]["converted"][0]["destination"], "output/a.txt");
        assert_eq!(json["files"]["failed"][0]["source"], "input/b.vnt");
        assert!(json["generated_at"].is_string());
    }
}
