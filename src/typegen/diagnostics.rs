//! Diagnostics collected while translating one document
//!
//! Neither kind of entry stops a translation. They exist so that a run can
//! report how much of a schema was emitted with a placeholder.

use serde::Serialize;
use std::fmt;

/// Attribute a field descriptor must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingAttribute {
    /// The `name` attribute
    Name,
    /// The `type` attribute
    Type,
}

impl fmt::Display for MissingAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingAttribute::Name => write!(f, "name"),
            MissingAttribute::Type => write!(f, "type"),
        }
    }
}

/// A field descriptor lacking a required attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFault {
    /// Declaration the field belongs to
    pub owner: String,
    /// Field name, when it is known
    pub field: Option<String>,
    /// Which attribute is missing
    pub missing: MissingAttribute,
}

impl fmt::Display for FieldFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "field '{}' of '{}' has no {}", field, self.owner, self.missing),
            None => write!(f, "a field of '{}' has no {}", self.owner, self.missing),
        }
    }
}

/// Faults and fallbacks recorded for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Field descriptors emitted with a placeholder name or type
    pub field_faults: Vec<FieldFault>,
    /// Type tokens that resolved to `any`, one entry per occurrence
    pub unresolved_types: Vec<String>,
}

impl Diagnostics {
    /// Create an empty diagnostics record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field-integrity fault
    pub fn record_field_fault(&mut self, fault: FieldFault) {
        self.field_faults.push(fault);
    }

    /// Record a type token that fell back to `any`
    pub fn record_fallback(&mut self, token: impl Into<String>) {
        self.unresolved_types.push(token.into());
    }

    /// Number of field-integrity faults
    pub fn fault_count(&self) -> usize {
        self.field_faults.len()
    }

    /// Number of fallbacks to `any`
    pub fn fallback_count(&self) -> usize {
        self.unresolved_types.len()
    }

    /// Whether nothing was recorded
    pub fn is_clean(&self) -> bool {
        self.field_faults.is_empty() && self.unresolved_types.is_empty()
    }
}
