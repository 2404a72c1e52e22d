// src/converter/config.rs
use std::path::PathBuf;

use crate::extractors::FieldMarkers;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_INPUT_EXTENSION: &str = "vnt";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";

/// Everything a batch run needs; passed into the converter explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Extension (without the dot) selecting input files
    pub input_extension: String,
    /// Extension (without the dot) given to written artifacts
    pub output_extension: String,
    pub markers: FieldMarkers,
}

impl ConvertConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_dir: I, output_dir: O) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            markers: FieldMarkers::default(),
        }
    }
}
