//! Error types for wsdl2dts
//!
//! This module defines all error types used throughout the library.
//! Field-level problems are not errors: they are collected as
//! diagnostics (see [`crate::typegen::Diagnostics`]) and translation continues.

use std::fmt;
use thiserror::Error;

/// Result type alias using wsdl2dts Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wsdl2dts operations
#[derive(Error, Debug)]
pub enum Error {
    /// The document lacks the schema wrapper the translator walks
    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),
}

/// A document that parsed as XML but is not a schema container
#[derive(Debug, Clone)]
pub struct StructureError {
    /// Error message
    pub message: String,
    /// Path of wrapper elements that was expected
    pub expected: Option<String>,
    /// Tag of the element actually found
    pub found: Option<String>,
}

impl StructureError {
    /// Create a new structure error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
            found: None,
        }
    }

    /// Set the expected wrapper path
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Set the tag that was found instead
    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected {}", expected)?;
            if let Some(ref found) = self.found {
                write!(f, ", found <{}>", found)?;
            }
            write!(f, ")")?;
        } else if let Some(ref found) = self.found {
            write!(f, " (found <{}>)", found)?;
        }

        Ok(())
    }
}

impl std::error::Error for StructureError {}
