//! Simple type translation
//!
//! A simple type becomes a type alias. String restrictions with enumerations
//! become a union of string literals, one arm per line:
//!
//! ```text
//! export type LogLevel = 'None'
//! | 'Debug';
//! ```
//!
//! Facets such as `length` or `pattern` are not carried over.

use super::emitter::EmitContext;
use super::resolver::{TsType, XSD_STRING};
use crate::names::quote_string;
use crate::schema::SimpleTypeNode;

/// Separator between the arms of a literal union
const UNION_SEPARATOR: &str = "\n| ";

/// Emit the alias declaration for a simple type, followed by a blank line
pub fn emit_simple_type(node: &SimpleTypeNode, ctx: &mut EmitContext<'_>) -> String {
    let name = ctx.resolver.declaration_name(node.name.as_deref().unwrap_or_default());

    let body = match node.base.as_deref() {
        Some(XSD_STRING) if !node.enumerations.is_empty() => node
            .enumerations
            .iter()
            .map(|value| quote_string(value))
            .collect::<Vec<_>>()
            .join(UNION_SEPARATOR),
        Some(XSD_STRING) => TsType::String.to_string(),
        Some(base) => ctx.resolver.resolve(base, &mut ctx.diagnostics).to_string(),
        None => TsType::Any.to_string(),
    };

    format!("export type {} = {};\n\n", name, body)
}
