//! Field line emission

use super::diagnostics::{FieldFault, MissingAttribute};
use super::emitter::EmitContext;
use super::resolver::TsType;
use crate::names::property_key;
use crate::schema::FieldDescriptor;
use tracing::warn;

/// Emit one interface member line for `field`, declared inside `owner`
///
/// A missing `name` or `type` is recorded as a field fault and replaced by an
/// empty name or `any`; the line is still emitted.
pub fn emit_field(field: &FieldDescriptor, owner: &str, ctx: &mut EmitContext<'_>) -> String {
    let name = field.name.as_deref().filter(|name| !name.is_empty());
    if name.is_none() {
        report_fault(ctx, owner, None, MissingAttribute::Name);
    }

    let value_type = match field.type_name.as_deref() {
        Some(token) => ctx.resolver.resolve(token, &mut ctx.diagnostics),
        None => {
            report_fault(ctx, owner, name, MissingAttribute::Type);
            TsType::Any
        }
    };

    let optional = if field.is_optional() { "?" } else { "" };
    let declared = if field.is_unbounded() {
        format!("{} | {}[]", value_type, value_type)
    } else {
        value_type.to_string()
    };

    format!(
        "{}{}{}: {};\n",
        ctx.options.indent,
        property_key(name.unwrap_or_default()),
        optional,
        declared
    )
}

fn report_fault(ctx: &mut EmitContext<'_>, owner: &str, field: Option<&str>, missing: MissingAttribute) {
    let fault = FieldFault {
        owner: owner.to_string(),
        field: field.map(str::to_string),
        missing,
    };
    warn!("{}", fault);
    ctx.diagnostics.record_field_fault(fault);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typegen::EmitOptions;

    fn emit(field: &FieldDescriptor) -> String {
        let options = EmitOptions::default();
        let mut ctx = EmitContext::new(&options);
        emit_field(field, "Owner", &mut ctx)
    }

    #[test]
    fn test_required_scalar() {
        assert_eq!(emit(&FieldDescriptor::new("checkOnly", "boolean")), "\tcheckOnly: boolean;\n");
    }

    #[test]
    fn test_optional_markers() {
        let min_zero = FieldDescriptor::new("line", "int").with_min_occurs("0");
        assert_eq!(emit(&min_zero), "\tline?: number;\n");

        let nillable = FieldDescriptor::new("id", "tns_ID").with_nillable("true");
        assert_eq!(emit(&nillable), "\tid?: ID;\n");

        let not_nillable = FieldDescriptor::new("id", "tns_ID").with_nillable("false");
        assert_eq!(emit(&not_nillable), "\tid: ID;\n");
    }

    #[test]
    fn test_unbounded_is_scalar_or_array() {
        let field = FieldDescriptor::new("classes", "string")
            .with_min_occurs("0")
            .with_max_occurs("unbounded");
        assert_eq!(emit(&field), "\tclasses?: string | string[];\n");

        let bounded = FieldDescriptor::new("pair", "string").with_max_occurs("2");
        assert_eq!(emit(&bounded), "\tpair: string;\n");
    }

    #[test]
    fn test_missing_type_substitutes_any() {
        let options = EmitOptions::default();
        let mut ctx = EmitContext::new(&options);
        let field = FieldDescriptor {
            name: Some("payload".to_string()),
            ..Default::default()
        };

        assert_eq!(emit_field(&field, "Envelope", &mut ctx), "\tpayload: any;\n");
        assert_eq!(ctx.diagnostics.fault_count(), 1);
        assert_eq!(ctx.diagnostics.field_faults[0].missing, MissingAttribute::Type);
        assert_eq!(ctx.diagnostics.field_faults[0].field.as_deref(), Some("payload"));
    }

    #[test]
    fn test_missing_name_and_type() {
        let options = EmitOptions::default();
        let mut ctx = EmitContext::new(&options);

        assert_eq!(emit_field(&FieldDescriptor::default(), "Envelope", &mut ctx), "\t: any;\n");
        assert_eq!(ctx.diagnostics.fault_count(), 2);
    }

    #[test]
    fn test_non_identifier_name_is_quoted() {
        assert_eq!(emit(&FieldDescriptor::new("x-trace-id", "string")), "\t'x-trace-id': string;\n");
    }

    #[test]
    fn test_custom_indent() {
        let options = EmitOptions::default().with_indent("    ");
        let mut ctx = EmitContext::new(&options);
        assert_eq!(
            emit_field(&FieldDescriptor::new("a", "long"), "Owner", &mut ctx),
            "    a: number;\n"
        );
    }
}
