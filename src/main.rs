// src/main.rs
mod converter;
mod decoder;
mod extractors;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use converter::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use converter::{BatchConverter, ConvertConfig};
use utils::AppError;

/// Command Line Interface for converting VNOTE (.vnt) files to plain text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the .vnt files
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory the .txt files are written to (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Also write a JSON summary of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> ConvertConfig {
        ConvertConfig::new(&self.input_dir, &self.output_dir)
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting processing for args: {:?}", args);

    // 3. Convert every note in the input directory
    let converter = BatchConverter::new(args.to_config());
    let report = converter.run()?;

    if report.is_empty() {
        tracing::warn!("No .vnt files found in {}", converter.config().input_dir.display());
    }

    // 4. Optional run summary
    if let Some(path) = &args.report {
        storage::save_report(path, &report)?;
    }

    tracing::info!(
        "Processing finished. Converted: {}, Failures: {}",
        report.success_count(),
        report.failure_count()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_folders() {
        let args = Args::parse_from(["vnt_decoder"]);
        assert_eq!(args.to_config(), ConvertConfig::default());
        assert!(args.report.is_none());
    }

    #[test]
    fn test_custom_folders() {
        let args = Args::parse_from([
            "vnt_decoder",
            "-i",
            "notes",
            "--output-dir",
            "out/text",
            "--report",
            "run.json",
        ]);
        let config = args.to_config();
        assert_eq!(config.input_dir, PathBuf::from("notes"));
        assert_eq!(config.output_dir, PathBuf::from("out/text"));
        assert_eq!(config.input_extension, "vnt");
        assert_eq!(args.report, Some(PathBuf::from("run.json")));
    }
}
