//! Emission driver
//!
//! Walks the schema sections in document order. Within a section all simple
//! types are emitted first, then complex types, then elements. Declarations
//! are neither deduplicated nor sorted: TypeScript resolves forward references
//! within a declaration file.

use super::complex_types::emit_complex_type;
use super::diagnostics::Diagnostics;
use super::elements::emit_element;
use super::resolver::TypeResolver;
use super::simple_types::emit_simple_type;
use super::{EmitOptions, Translation};
use crate::schema::SchemaDocument;

/// Lint directives placed at the top of every generated file
pub const LINT_HEADER: &str = "/* eslint-disable @typescript-eslint/no-explicit-any */\n\
/* eslint-disable @typescript-eslint/no-empty-interface */\n\n";

/// State shared by the translators while one document is emitted
#[derive(Debug)]
pub struct EmitContext<'a> {
    /// Output options
    pub options: &'a EmitOptions,
    /// Resolver bound to the configured naming policy
    pub resolver: TypeResolver,
    /// Faults and fallbacks recorded so far
    pub diagnostics: Diagnostics,
}

impl<'a> EmitContext<'a> {
    /// Create a fresh context for one document
    pub fn new(options: &'a EmitOptions) -> Self {
        Self {
            options,
            resolver: TypeResolver::new(options.naming),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Emit the declaration file text for a schema document
pub fn emit_document(document: &SchemaDocument, options: &EmitOptions) -> Translation {
    let mut ctx = EmitContext::new(options);
    let mut output = String::new();

    if options.header {
        output.push_str(LINT_HEADER);
    }

    for section in &document.sections {
        for simple_type in &section.simple_types {
            output.push_str(&emit_simple_type(simple_type, &mut ctx));
        }
        for complex_type in &section.complex_types {
            output.push_str(&emit_complex_type(complex_type, &mut ctx));
        }
        for element in &section.elements {
            output.push_str(&emit_element(element, &mut ctx));
        }
    }

    Translation {
        output,
        declarations: document.declaration_count(),
        diagnostics: ctx.diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ComplexShape, ComplexTypeNode, ElementNode, SchemaSection, SimpleTypeNode};
    use pretty_assertions::assert_eq;

    fn section(prefix: &str) -> SchemaSection {
        SchemaSection {
            simple_types: vec![SimpleTypeNode {
                name: Some(format!("{}Simple", prefix)),
                base: Some("string".to_string()),
                enumerations: Vec::new(),
            }],
            complex_types: vec![ComplexTypeNode {
                name: Some(format!("{}Complex", prefix)),
                shape: ComplexShape::Sequence(Vec::new()),
            }],
            elements: vec![ElementNode {
                name: Some(format!("{}Element", prefix)),
                fields: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_section_order() {
        let document = SchemaDocument {
            sections: vec![section("A"), section("B")],
        };
        let translation = emit_document(&document, &EmitOptions::default().with_header(false));

        assert_eq!(
            translation.output,
            "export type ASimple = string;\n\n\
             export interface AComplex {\n}\n\n\
             export interface AElement {\n}\n\n\
             export type BSimple = string;\n\n\
             export interface BComplex {\n}\n\n\
             export interface BElement {\n}\n\n"
        );
        assert_eq!(translation.declarations, 6);
    }

    #[test]
    fn test_header() {
        let document = SchemaDocument::default();
        assert_eq!(emit_document(&document, &EmitOptions::default()).output, LINT_HEADER);
        assert_eq!(
            emit_document(&document, &EmitOptions::default().with_header(false)).output,
            ""
        );
    }
}
