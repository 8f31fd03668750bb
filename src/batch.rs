//! Folder conversion
//!
//! Converts every recognized document in the input folder into one
//! declaration file in the output folder. Each document is handled on its own:
//! a document that fails is reported and its siblings are still converted.
//! Output is written only once a document has translated completely.

use crate::config::ConvertConfig;
use crate::error::{Error, Result};
use crate::loaders::Loader;
use crate::typegen::{convert_str_with_limits, Diagnostics, Translation};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A document that was converted and written
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedFile {
    /// Input document
    pub input: PathBuf,
    /// Written declaration file
    pub output: PathBuf,
    /// Number of declarations emitted
    pub declarations: usize,
    /// Faults and fallbacks met while translating
    pub diagnostics: Diagnostics,
}

/// A document that could not be converted
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    /// Input document
    pub input: PathBuf,
    /// Error message
    pub error: String,
}

/// Outcome of a folder conversion
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Documents converted, in processing order
    pub converted: Vec<ConvertedFile>,
    /// Documents that failed
    pub failed: Vec<FailedFile>,
    /// Folder entries that were not recognized as input
    pub skipped: Vec<PathBuf>,
}

impl BatchReport {
    /// Whether every recognized document was converted
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of field faults across converted documents
    pub fn fault_count(&self) -> usize {
        self.converted.iter().map(|c| c.diagnostics.fault_count()).sum()
    }

    /// Total number of fallbacks to `any` across converted documents
    pub fn fallback_count(&self) -> usize {
        self.converted.iter().map(|c| c.diagnostics.fallback_count()).sum()
    }
}

/// Whether `path` carries the configured input extension
pub fn is_recognized(path: &Path, config: &ConvertConfig) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(config.input_extension.as_str())
}

/// Path of the declaration file generated for `input`
pub fn output_path(input: &Path, config: &ConvertConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    config
        .output_dir
        .join(format!("{}.{}", stem, config.output_extension))
}

/// Translate one file without writing anything
pub fn convert_file(path: &Path, config: &ConvertConfig) -> Result<Translation> {
    let loader = Loader::new().with_limits(config.limits.clone());
    let text = loader.load(path)?;
    convert_str_with_limits(&text, &config.emit, loader.limits())
}

/// Convert every recognized document in `config.input_dir`
///
/// Only failing to list the input folder or to create the output folder
/// aborts the run; per-document failures end up in the report.
pub fn convert_directory(config: &ConvertConfig) -> Result<BatchReport> {
    let mut entries = fs::read_dir(&config.input_dir)
        .map_err(|e| {
            Error::Resource(format!(
                "Failed to read input folder '{}': {}",
                config.input_dir.display(),
                e
            ))
        })?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    // Sorted for reproducible logs and reports
    entries.sort();

    fs::create_dir_all(&config.output_dir)?;

    let mut report = BatchReport::default();

    for path in entries {
        if !path.is_file() || !is_recognized(&path, config) {
            debug!(path = %path.display(), "skipping");
            report.skipped.push(path);
            continue;
        }

        match convert_and_write(&path, config) {
            Ok(converted) => report.converted.push(converted),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "conversion failed");
                report.failed.push(FailedFile {
                    input: path,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

fn convert_and_write(path: &Path, config: &ConvertConfig) -> Result<ConvertedFile> {
    let translation = convert_file(path, config)?;
    let output = output_path(path, config);

    fs::write(&output, &translation.output).map_err(|e| {
        Error::Resource(format!("Failed to write '{}': {}", output.display(), e))
    })?;

    info!(
        input = %path.display(),
        output = %output.display(),
        declarations = translation.declarations,
        faults = translation.diagnostics.fault_count(),
        fallbacks = translation.diagnostics.fallback_count(),
        "converted"
    );

    Ok(ConvertedFile {
        input: path.to_path_buf(),
        output,
        declarations: translation.declarations,
        diagnostics: translation.diagnostics,
    })
}
