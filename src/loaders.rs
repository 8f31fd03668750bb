//! Resource loading
//!
//! Reads schema documents from disk, enforcing the configured size limit
//! before the content is handed to the parser.

use crate::error::{Error, Result};
use crate::limits::Limits;
use std::fs;
use std::path::Path;

/// File loader for schema documents
#[derive(Debug, Clone, Default)]
pub struct Loader {
    /// Resource limits
    limits: Limits,
}

impl Loader {
    /// Create a new loader with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Get the limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load a file as a UTF-8 string
    pub fn load(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|e| {
            Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
        })?;
        self.limits.check_xml_size(metadata.len() as usize)?;

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        // The file may have grown since the metadata call
        self.limits.check_xml_size(content.len())?;

        Ok(content)
    }
}
