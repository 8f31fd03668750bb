//! Namespace prefix normalization
//!
//! WSDL documents reference schema types through prefixed names such as
//! `tns:RunTestsRequest` or `xsd:string`. Before the document is parsed into a
//! node tree every known prefix is rewritten into an identifier-safe token:
//! the XML Schema prefix disappears, the others keep their name and trade the
//! colon for an underscore (`tns:Foo` becomes `tns_Foo`).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Prefix bound to the XML Schema namespace; removed entirely
pub const XSD_PREFIX: &str = "xsd";

/// Prefixes of the WSDL type namespaces and the element namespace
pub const TYPE_NAMESPACE_PREFIXES: [&str; 4] = ["tns", "ens", "mns", "fns"];

/// SOAP binding prefix
pub const SOAP_PREFIX: &str = "soap";

/// Namespace declaration prefix
pub const XMLNS_PREFIX: &str = "xmlns";

/// Separator replacing the colon of a rewritten prefix
pub const MARKER_SEPARATOR: char = '_';

static PREFIXED_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let prefixes = std::iter::once(XSD_PREFIX)
        .chain(TYPE_NAMESPACE_PREFIXES)
        .chain([SOAP_PREFIX, XMLNS_PREFIX])
        .collect::<Vec<_>>()
        .join("|");
    // The prefix set is disjoint, so one left-to-right pass gives the same
    // text as any sequence of individual substitutions.
    Regex::new(&format!("({}):", prefixes)).unwrap()
});

/// Rewrite every known namespace prefix in `text`
///
/// `xsd:` is stripped, every other known prefix has its colon replaced by an
/// underscore. Text without any known prefix is returned unchanged.
pub fn normalize_prefixes(text: &str) -> String {
    PREFIXED_TOKEN
        .replace_all(text, |caps: &Captures| {
            let prefix = &caps[1];
            if prefix == XSD_PREFIX {
                String::new()
            } else {
                format!("{}{}", prefix, MARKER_SEPARATOR)
            }
        })
        .into_owned()
}

/// Strip a type namespace marker (`tns_`, `ens_`, ...) from a normalized token
///
/// Returns `None` when the token carries none of the recognized markers.
pub fn strip_type_marker(token: &str) -> Option<&str> {
    TYPE_NAMESPACE_PREFIXES.iter().find_map(|prefix| {
        token
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(MARKER_SEPARATOR))
    })
}
