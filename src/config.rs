//! Run configuration
//!
//! Everything a batch run needs: where to read, where to write, which files
//! count as input, how to emit, and the resource limits. Values come from
//! defaults, optionally overridden by a TOML file, optionally overridden by
//! command-line flags.
//!
//! ## Example config file (wsdl2dts.toml):
//! ```toml
//! input_dir = "wsdl/resources"
//! output_dir = "output"
//! input_extension = "wsdl"
//! output_extension = "d.ts"
//!
//! [emit]
//! naming = "reserved-suffix"
//! indent = "\t"
//! header = true
//!
//! [limits]
//! max_xml_size = 104857600
//! ```

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::names::NamingPolicy;
use crate::typegen::EmitOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for converting a folder of schema documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Folder scanned for input documents
    pub input_dir: PathBuf,
    /// Folder receiving the declaration files
    pub output_dir: PathBuf,
    /// Extension of the files to convert, without the dot
    pub input_extension: String,
    /// Extension of the generated files, without the leading dot
    pub output_extension: String,
    /// Emission options
    pub emit: EmitOptions,
    /// Resource limits per document
    pub limits: Limits,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("output"),
            input_extension: "wsdl".to_string(),
            output_extension: "d.ts".to_string(),
            emit: EmitOptions::default(),
            limits: Limits::default(),
        }
    }
}

impl ConvertConfig {
    /// Create a configuration for the given folders
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the input folder
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the output folder
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the input extension
    pub fn with_input_extension(mut self, extension: impl Into<String>) -> Self {
        self.input_extension = extension.into();
        self
    }

    /// Set the output extension
    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = extension.into();
        self
    }

    /// Set the emission options
    pub fn with_emit(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }

    /// Set the naming policy
    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.emit.naming = naming;
        self
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}
