//! Top-level element translation
//!
//! Elements become interfaces built from their inline complex type. Unlike
//! complex types they never extend a parent.

use super::complex_types::emit_interface;
use super::emitter::EmitContext;
use crate::schema::ElementNode;

/// Emit the interface declaration for an element, followed by a blank line
pub fn emit_element(node: &ElementNode, ctx: &mut EmitContext<'_>) -> String {
    let name = ctx.resolver.declaration_name(node.name.as_deref().unwrap_or_default());
    emit_interface(&name, None, &node.fields, ctx)
}
