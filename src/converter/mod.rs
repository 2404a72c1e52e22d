// src/converter/mod.rs
pub mod config;
pub mod report;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::extractors::{extract_body, extract_created};
use crate::storage::StorageManager;
use crate::utils::error::{AppError, ConvertError, ExtractError};

pub use config::ConvertConfig;
pub use report::BatchReport;

/// Converts a directory of `.vnt` notes into `.txt` files, one file at a time.
pub struct BatchConverter {
    config: ConvertConfig,
}

impl BatchConverter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Runs the whole batch.
    ///
    /// Only setup problems (output directory, input listing) are returned as
    /// errors. Per-file failures are logged and recorded in the report.
    pub fn run(&self) -> Result<BatchReport, AppError> {
        // Created once, before any file is touched
        let storage = StorageManager::new(&self.config.output_dir)?;

        let inputs = self.list_inputs()?;
        tracing::info!(
            "Found {} .{} files in {}",
            inputs.len(),
            self.config.input_extension,
            self.config.input_dir.display()
        );

        let mut report = BatchReport::default();
        for input in inputs {
            match self.convert_file(&storage, &input) {
                Ok(output) => {
                    tracing::info!("Decoded: {} -> {}", input.display(), output.display());
                    report.record_success(input, output);
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    report.record_failure(input, e);
                }
            }
        }

        Ok(report)
    }

    /// Reads one note, extracts its fields and writes the text artifact.
    /// Returns the path written.
    pub fn convert_file(&self, storage: &StorageManager, input: &Path) -> Result<PathBuf, ConvertError> {
        let content = fs::read_to_string(input).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::NotFound(input.to_path_buf()),
            _ => ConvertError::Read { path: input.to_path_buf(), source: e },
        })?;

        let artifact = self.render(&content).map_err(|source| ConvertError::Extract {
            path: input.to_path_buf(),
            source,
        })?;

        let file_name = self.output_name(input);
        storage
            .save_artifact(&file_name, &artifact)
            .map_err(|source| ConvertError::Write {
                path: storage.path_for(&file_name),
                source,
            })
    }

    /// Builds the output text: the creation date line followed by the decoded body.
    pub fn render(&self, content: &str) -> Result<String, ExtractError> {
        let body = extract_body(content, &self.config.markers)?;
        let created = extract_created(content, &self.config.markers);
        Ok(format!("Creation date: {}\n{}", created, body))
    }

    /// `note.vnt` becomes `note.txt`.
    pub fn output_name(&self, input: &Path) -> String {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix = format!(".{}", self.config.input_extension);
        let base = name.strip_suffix(&suffix).unwrap_or(&name);
        format!("{}.{}", base, self.config.output_extension)
    }

    /// Matching input files, sorted by name so runs are repeatable.
    fn list_inputs(&self) -> Result<Vec<PathBuf>, AppError> {
        let dir = &self.config.input_dir;
        let entries = fs::read_dir(dir).map_err(|e| {
            AppError::Config(format!("Cannot read input directory {}: {}", dir.display(), e))
        })?;

        let suffix = format!(".{}", self.config.input_extension);
        let mut inputs = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            match file_name.to_str() {
                Some(name) if name.ends_with(&suffix) => inputs.push(entry.path()),
                Some(name) => tracing::trace!("Skipping {}", name),
                None => tracing::warn!("Skipping non UTF-8 file name {:?}", file_name),
            }
        }
        inputs.sort();

        Ok(inputs)
    }
}
