//! Complex type translation
//!
//! A complex type becomes an interface. A complex-content derivation adds an
//! `extends` clause naming its parent and lists only the fields the
//! derivation declares itself.

use super::emitter::EmitContext;
use super::fields::emit_field;
use crate::schema::{ComplexShape, ComplexTypeNode, FieldDescriptor};

/// Emit the interface declaration for a complex type, followed by a blank line
pub fn emit_complex_type(node: &ComplexTypeNode, ctx: &mut EmitContext<'_>) -> String {
    let name = ctx.resolver.declaration_name(node.name.as_deref().unwrap_or_default());

    let parent = match &node.shape {
        ComplexShape::ComplexContent { base, .. } => {
            ctx.resolver.parent_name(base.as_deref(), &mut ctx.diagnostics)
        }
        ComplexShape::Sequence(_) => None,
    };

    emit_interface(&name, parent.as_deref(), node.fields(), ctx)
}

/// Emit an interface with the given members, in order
pub(crate) fn emit_interface(
    name: &str,
    parent: Option<&str>,
    fields: &[FieldDescriptor],
    ctx: &mut EmitContext<'_>,
) -> String {
    let mut output = format!("export interface {}", name);
    if let Some(parent) = parent {
        output.push_str(" extends ");
        output.push_str(parent);
    }
    output.push_str(" {\n");

    for field in fields {
        output.push_str(&emit_field(field, name, ctx));
    }

    output.push_str("}\n\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NamingPolicy;
    use crate::typegen::EmitOptions;
    use pretty_assertions::assert_eq;

    fn emit_with(node: &ComplexTypeNode, options: &EmitOptions) -> String {
        let mut ctx = EmitContext::new(options);
        emit_complex_type(node, &mut ctx)
    }

    fn emit(node: &ComplexTypeNode) -> String {
        emit_with(node, &EmitOptions::default())
    }

    #[test]
    fn test_sequence_shape() {
        let node = ComplexTypeNode {
            name: Some("Widget".to_string()),
            shape: ComplexShape::Sequence(vec![
                FieldDescriptor::new("count", "int"),
                FieldDescriptor::new("tags", "string")
                    .with_min_occurs("0")
                    .with_max_occurs("unbounded"),
            ]),
        };

        assert_eq!(
            emit(&node),
            "export interface Widget {\n\tcount: number;\n\ttags?: string | string[];\n}\n\n"
        );
    }

    #[test]
    fn test_complex_content_extension() {
        let node = ComplexTypeNode {
            name: Some("Dog".to_string()),
            shape: ComplexShape::ComplexContent {
                base: Some("tns_Animal".to_string()),
                fields: vec![FieldDescriptor::new("breed", "string")],
            },
        };

        assert_eq!(emit(&node), "export interface Dog extends Animal {\n\tbreed: string;\n}\n\n");
    }

    #[test]
    fn test_complex_content_without_base() {
        let node = ComplexTypeNode {
            name: Some("Orphan".to_string()),
            shape: ComplexShape::ComplexContent {
                base: None,
                fields: Vec::new(),
            },
        };

        assert_eq!(emit(&node), "export interface Orphan {\n}\n\n");
    }

    #[test]
    fn test_foreign_parent_has_no_extends_clause() {
        let options = EmitOptions::default();
        let mut ctx = EmitContext::new(&options);
        let node = ComplexTypeNode {
            name: Some("Dog".to_string()),
            shape: ComplexShape::ComplexContent {
                base: Some("foo:Bar".to_string()),
                fields: vec![FieldDescriptor::new("x", "foo:Bar")],
            },
        };

        assert_eq!(
            emit_complex_type(&node, &mut ctx),
            "export interface Dog {\n\tx: any;\n}\n\n"
        );
        assert_eq!(ctx.diagnostics.unresolved_types, vec!["foo:Bar", "foo:Bar"]);
    }

    #[test]
    fn test_empty_sequence_is_marker_type() {
        let node = ComplexTypeNode {
            name: Some("Marker".to_string()),
            shape: ComplexShape::Sequence(Vec::new()),
        };

        assert_eq!(emit(&node), "export interface Marker {\n}\n\n");
    }

    #[test]
    fn test_declaration_and_parent_share_policy() {
        let options = EmitOptions::default().with_naming(NamingPolicy::Capitalize);
        let node = ComplexTypeNode {
            name: Some("dog".to_string()),
            shape: ComplexShape::ComplexContent {
                base: Some("tns_animal".to_string()),
                fields: Vec::new(),
            },
        };

        assert_eq!(emit_with(&node, &options), "export interface Dog extends Animal {\n}\n\n");
    }

    #[test]
    fn test_reserved_name_is_suffixed() {
        let node = ComplexTypeNode {
            name: Some("delete".to_string()),
            shape: ComplexShape::Sequence(Vec::new()),
        };

        assert_eq!(emit(&node), "export interface delete_ {\n}\n\n");
    }
}
