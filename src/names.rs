//! TypeScript identifier policy
//!
//! Schema names are mostly valid TypeScript identifiers already, but a handful
//! collide with keywords or predefined type names such as `function` or
//! `string`. The policy chosen here is applied to
//! every declared type name and every type reference, so an `extends` clause
//! always names exactly what was declared.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Suffix appended to type names that collide with a reserved identifier
pub const RESERVED_SUFFIX: char = '_';

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Words that cannot name an interface or type alias
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Keywords
        "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "enum", "export", "extends", "false",
        "finally", "for", "function", "if", "import", "in", "instanceof", "new",
        "null", "return", "super", "switch", "this", "throw", "true", "try",
        "typeof", "var", "void", "while", "with",
        // Strict mode
        "implements", "interface", "let", "package", "private", "protected",
        "public", "static", "yield",
        // Predefined types
        "any", "bigint", "boolean", "never", "number", "object", "string",
        "symbol", "undefined", "unknown",
        // Global types the translator emits
        "Date",
    ]
    .into_iter()
    .collect()
});

/// How raw schema names become TypeScript type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPolicy {
    /// Keep the name as written, suffixing reserved identifiers with `_`
    #[default]
    ReservedSuffix,
    /// Uppercase the first character, then suffix reserved identifiers
    Capitalize,
}

impl NamingPolicy {
    /// Derive the type name for a raw schema name
    pub fn apply(self, raw: &str) -> String {
        match self {
            NamingPolicy::ReservedSuffix => escape_reserved(raw),
            NamingPolicy::Capitalize => escape_reserved(&capitalize_first(raw)),
        }
    }
}

impl fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingPolicy::ReservedSuffix => write!(f, "reserved-suffix"),
            NamingPolicy::Capitalize => write!(f, "capitalize"),
        }
    }
}

/// Check if a name is one of the reserved TypeScript identifiers
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(name)
}

/// Check if a string can be written as a bare TypeScript identifier
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Append [`RESERVED_SUFFIX`] when `name` is reserved
pub fn escape_reserved(name: &str) -> String {
    if is_reserved(name) {
        format!("{}{}", name, RESERVED_SUFFIX)
    } else {
        name.to_string()
    }
}

/// Uppercase the first character of `name`
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render `value` as a single-quoted TypeScript string literal
///
/// Line terminators are escaped as well as quotes and backslashes; a raw one
/// would end the literal.
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}

/// Render a field name as a property key, quoting it when necessary
pub fn property_key(name: &str) -> String {
    if name.is_empty() || is_valid_identifier(name) {
        name.to_string()
    } else {
        quote_string(name)
    }
}
