// src/converter/report.rs
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of one batch run, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn record_success(&mut self, source: PathBuf, destination: PathBuf) {
        self.converted.push(ConvertedFile { source, destination });
    }

    pub fn record_failure<E: ToString>(&mut self, source: PathBuf, error: E) {
        self.failed.push(FailedFile { source, error: error.to_string() });
    }

    pub fn success_count(&self) -> usize {
        self.converted.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converted.is_empty() && self.failed.is_empty()
    }
}
