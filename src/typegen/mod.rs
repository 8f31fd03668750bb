//! TypeScript declaration generation
//!
//! This module turns the typed schema model into the text of a `.d.ts` file.
//!
//! Translation rules:
//! - Simple types: type aliases, string enumerations as literal unions
//! - Complex types: interfaces, complex-content derivations with `extends`
//! - Elements: interfaces built from the inline complex type
//! - Fields: `?` for `minOccurs="0"` or `nillable="true"`,
//!   `T | T[]` for `maxOccurs="unbounded"`

mod complex_types;
mod diagnostics;
mod elements;
mod emitter;
mod fields;
mod resolver;
mod simple_types;

pub use complex_types::emit_complex_type;
pub use diagnostics::{Diagnostics, FieldFault, MissingAttribute};
pub use elements::emit_element;
pub use emitter::{emit_document, EmitContext, LINT_HEADER};
pub use fields::emit_field;
pub use resolver::{TsType, TypeResolver};
pub use simple_types::emit_simple_type;

use crate::documents::Document;
use crate::error::{Result, StructureError};
use crate::limits::Limits;
use crate::names::NamingPolicy;
use crate::namespaces::normalize_prefixes;
use crate::schema::SchemaDocument;
use serde::{Deserialize, Serialize};

/// Output options for generated declaration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// How schema names become TypeScript type names
    pub naming: NamingPolicy,
    /// Indentation of interface members
    pub indent: String,
    /// Whether to start the file with the lint directives
    pub header: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            naming: NamingPolicy::default(),
            indent: "\t".to_string(),
            header: true,
        }
    }
}

impl EmitOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the naming policy
    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    /// Set the member indentation
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set whether the lint header is emitted
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Result of translating one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Declaration file text
    pub output: String,
    /// Number of declarations emitted
    pub declarations: usize,
    /// Faults and fallbacks met along the way
    pub diagnostics: Diagnostics,
}

/// Translate WSDL or XSD text with default limits
pub fn convert_str(text: &str, options: &EmitOptions) -> Result<Translation> {
    convert_str_with_limits(text, options, &Limits::default())
}

/// Translate WSDL or XSD text
///
/// Nothing is produced unless the whole document translates: a missing
/// schema wrapper or malformed XML is an error.
pub fn convert_str_with_limits(text: &str, options: &EmitOptions, limits: &Limits) -> Result<Translation> {
    let normalized = normalize_prefixes(text);
    let document = Document::parse(&normalized, limits)?;
    let root = document
        .root()
        .ok_or_else(|| StructureError::new("document has no root element"))?;
    let schema = SchemaDocument::from_root(root)?;
    limits.check_declarations(schema.declaration_count())?;

    Ok(emit_document(&schema, options))
}
