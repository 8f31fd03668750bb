//! Type name resolution
//!
//! Maps a normalized schema type token to a TypeScript type: built-in XSD
//! types through a fixed table, marked references (`tns_Foo`) to named types,
//! everything else to `any`.

use super::diagnostics::Diagnostics;
use crate::names::NamingPolicy;
use crate::namespaces::strip_type_marker;
use std::fmt;
use tracing::debug;

/// XSD string type name
pub const XSD_STRING: &str = "string";

/// TypeScript type a schema token resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
    /// `boolean`
    Boolean,
    /// `string`
    String,
    /// `Date`
    Date,
    /// `number`
    Number,
    /// `any`
    Any,
    /// A type declared by a schema, already passed through the naming policy
    Named(String),
}

impl TsType {
    /// Map a built-in XSD type name, exact matches only
    pub fn primitive(token: &str) -> Option<TsType> {
        let ty = match token {
            "boolean" => TsType::Boolean,
            "string" | "base64Binary" => TsType::String,
            "dateTime" | "date" | "time" => TsType::Date,
            "int" | "long" | "double" => TsType::Number,
            "anyType" => TsType::Any,
            _ => return None,
        };
        Some(ty)
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Boolean => write!(f, "boolean"),
            TsType::String => write!(f, "string"),
            TsType::Date => write!(f, "Date"),
            TsType::Number => write!(f, "number"),
            TsType::Any => write!(f, "any"),
            TsType::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Resolves type tokens and declaration names under one naming policy
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeResolver {
    policy: NamingPolicy,
}

impl TypeResolver {
    /// Create a resolver using the given naming policy
    pub fn new(policy: NamingPolicy) -> Self {
        Self { policy }
    }

    /// Derive the TypeScript name for a declared schema name
    pub fn declaration_name(&self, raw: &str) -> String {
        self.policy.apply(raw)
    }

    /// Resolve a type token
    ///
    /// Tokens that are neither built-in nor marked as schema references
    /// resolve to `any`; the fallback is recorded in `diagnostics`.
    pub fn resolve(&self, token: &str, diagnostics: &mut Diagnostics) -> TsType {
        if let Some(primitive) = TsType::primitive(token) {
            return primitive;
        }

        if let Some(name) = strip_type_marker(token).filter(|name| !name.is_empty()) {
            return TsType::Named(self.declaration_name(name));
        }

        debug!(token = %token, "unresolved type reference, using any");
        diagnostics.record_fallback(token);
        TsType::Any
    }

    /// Resolve the parent of a complex-content derivation
    ///
    /// Returns `None` when there is nothing an interface can extend: no base,
    /// an empty base, a built-in type, or a token without a type marker. The
    /// last case is recorded in `diagnostics` as a fallback.
    pub fn parent_name(&self, base: Option<&str>, diagnostics: &mut Diagnostics) -> Option<String> {
        let base = base.filter(|base| !base.is_empty())?;
        if TsType::primitive(base).is_some() {
            debug!(base = %base, "complex content derives from a built-in type, no extends clause");
            return None;
        }

        match strip_type_marker(base) {
            Some(name) if !name.is_empty() => Some(self.declaration_name(name)),
            _ => {
                debug!(base = %base, "unresolved parent type, no extends clause");
                diagnostics.record_fallback(base);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_table() {
        let cases = [
            ("boolean", "boolean"),
            ("string", "string"),
            ("dateTime", "Date"),
            ("int", "number"),
            ("base64Binary", "string"),
            ("double", "number"),
            ("date", "Date"),
            ("long", "number"),
            ("time", "Date"),
            ("anyType", "any"),
        ];
        for (token, expected) in cases {
            assert_eq!(TsType::primitive(token).unwrap().to_string(), expected, "{}", token);
        }
        assert_eq!(TsType::primitive("String"), None);
        assert_eq!(TsType::primitive("decimal"), None);
    }

    #[test]
    fn test_resolve_marked_reference() {
        let resolver = TypeResolver::default();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            resolver.resolve("tns_RunTestsRequest", &mut diagnostics),
            TsType::Named("RunTestsRequest".to_string())
        );
        assert_eq!(
            resolver.resolve("ens_ID", &mut diagnostics),
            TsType::Named("ID".to_string())
        );
        assert!(diagnostics.is_clean());
    }

    #[test]
    fn test_resolve_fallback_is_recorded() {
        let resolver = TypeResolver::default();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(resolver.resolve("decimal", &mut diagnostics), TsType::Any);
        assert_eq!(resolver.resolve("foo_Bar", &mut diagnostics), TsType::Any);
        assert_eq!(diagnostics.unresolved_types, vec!["decimal", "foo_Bar"]);
    }

    #[test]
    fn test_anytype_is_not_a_fallback() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(TypeResolver::default().resolve("anyType", &mut diagnostics), TsType::Any);
        assert!(diagnostics.is_clean());
    }

    #[test]
    fn test_references_follow_policy() {
        let mut diagnostics = Diagnostics::new();

        let suffix = TypeResolver::new(NamingPolicy::ReservedSuffix);
        assert_eq!(suffix.resolve("tns_delete", &mut diagnostics).to_string(), "delete_");
        assert_eq!(suffix.resolve("tns_runTests", &mut diagnostics).to_string(), "runTests");

        let capitalize = TypeResolver::new(NamingPolicy::Capitalize);
        assert_eq!(capitalize.resolve("tns_runTests", &mut diagnostics).to_string(), "RunTests");
    }

    #[test]
    fn test_parent_name() {
        let resolver = TypeResolver::default();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            resolver.parent_name(Some("tns_Metadata"), &mut diagnostics),
            Some("Metadata".to_string())
        );
        assert_eq!(resolver.parent_name(Some(""), &mut diagnostics), None);
        assert_eq!(resolver.parent_name(Some("anyType"), &mut diagnostics), None);
        assert_eq!(resolver.parent_name(None, &mut diagnostics), None);
        assert!(diagnostics.is_clean());

        let capitalize = TypeResolver::new(NamingPolicy::Capitalize);
        assert_eq!(
            capitalize.parent_name(Some("tns_metadata"), &mut diagnostics),
            Some("Metadata".to_string())
        );
    }

    #[test]
    fn test_unmarked_parent_is_unresolved() {
        let resolver = TypeResolver::default();
        let mut diagnostics = Diagnostics::new();

        assert_eq!(resolver.parent_name(Some("foo:Bar"), &mut diagnostics), None);
        assert_eq!(resolver.parent_name(Some("decimal"), &mut diagnostics), None);
        assert_eq!(resolver.parent_name(Some("Animal"), &mut diagnostics), None);
        assert_eq!(resolver.parent_name(Some("tns_"), &mut diagnostics), None);
        assert_eq!(
            diagnostics.unresolved_types,
            vec!["foo:Bar", "decimal", "Animal", "tns_"]
        );
    }
}
