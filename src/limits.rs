//! Limits for schema document processing
//!
//! Bounds on how much a single conversion accepts. A document over any limit
//! fails on its own; the rest of the folder is still converted.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Limits applied while loading, parsing and translating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum element nesting depth
    pub max_xml_depth: usize,

    /// Maximum input file size in bytes
    pub max_xml_size: usize,

    /// Maximum number of attributes on one element
    pub max_attributes: usize,

    /// Maximum number of declarations emitted for one document
    pub max_declarations: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_xml_depth: 256,
            max_xml_size: 100 * 1024 * 1024, // 100 MB
            max_attributes: 256,
            max_declarations: 100_000,
        }
    }
}

fn within(what: &str, value: usize, max: usize) -> Result<()> {
    if value > max {
        return Err(Error::LimitExceeded(format!("{} {} exceeds maximum {}", what, value, max)));
    }
    Ok(())
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits for untrusted input folders
    pub fn strict() -> Self {
        Self {
            max_xml_depth: 64,
            max_xml_size: 10 * 1024 * 1024, // 10 MB
            max_attributes: 64,
            max_declarations: 10_000,
        }
    }

    /// Check the nesting depth of an element being opened
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        within("XML depth", depth, self.max_xml_depth)
    }

    /// Check the byte size of an input document
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        within("document size in bytes", size, self.max_xml_size)
    }

    /// Check the attribute count of one element
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        within("attribute count", count, self.max_attributes)
    }

    /// Check the number of declarations a document would produce
    pub fn check_declarations(&self, count: usize) -> Result<()> {
        within("declaration count", count, self.max_declarations)
    }
}
