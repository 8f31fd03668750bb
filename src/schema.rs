//! Typed schema model
//!
//! A read-only view of the node tree holding only what the translators need.
//! Recognized attributes are plain `Option<String>` fields, so a missing
//! `name` or `type` is visible in the type rather than discovered by a map
//! lookup at emission time.

use crate::documents::Node;
use crate::error::{Result, StructureError};

/// Schema and WSDL element local names
mod tags {
    pub const DEFINITIONS: &str = "definitions";
    pub const TYPES: &str = "types";
    pub const SCHEMA: &str = "schema";
    pub const SIMPLE_TYPE: &str = "simpleType";
    pub const COMPLEX_TYPE: &str = "complexType";
    pub const ELEMENT: &str = "element";
    pub const SEQUENCE: &str = "sequence";
    pub const RESTRICTION: &str = "restriction";
    pub const EXTENSION: &str = "extension";
    pub const ENUMERATION: &str = "enumeration";
    pub const COMPLEX_CONTENT: &str = "complexContent";
}

/// Recognized attribute names
mod attrs {
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const MIN_OCCURS: &str = "minOccurs";
    pub const MAX_OCCURS: &str = "maxOccurs";
    pub const NILLABLE: &str = "nillable";
    pub const BASE: &str = "base";
    pub const VALUE: &str = "value";
}

/// Literal `minOccurs` value making a field optional
pub const MIN_OCCURS_OPTIONAL: &str = "0";
/// Literal `maxOccurs` value making a field repeatable
pub const MAX_OCCURS_UNBOUNDED: &str = "unbounded";
/// Literal `nillable` value making a field optional
pub const NILLABLE_TRUE: &str = "true";

fn owned_attribute(node: &Node, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

/// One structural member of a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: Option<String>,
    /// Raw type token
    pub type_name: Option<String>,
    /// Lower occurrence bound, as written
    pub min_occurs: Option<String>,
    /// Upper occurrence bound, as written
    pub max_occurs: Option<String>,
    /// Nillability, as written
    pub nillable: Option<String>,
}

impl FieldDescriptor {
    /// Read a field descriptor from an `element` node inside a sequence
    pub fn from_node(node: &Node) -> Self {
        Self {
            name: owned_attribute(node, attrs::NAME),
            type_name: owned_attribute(node, attrs::TYPE),
            min_occurs: owned_attribute(node, attrs::MIN_OCCURS),
            max_occurs: owned_attribute(node, attrs::MAX_OCCURS),
            nillable: owned_attribute(node, attrs::NILLABLE),
        }
    }

    /// Create a required single-valued field
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    /// Set `minOccurs`
    pub fn with_min_occurs(mut self, value: impl Into<String>) -> Self {
        self.min_occurs = Some(value.into());
        self
    }

    /// Set `maxOccurs`
    pub fn with_max_occurs(mut self, value: impl Into<String>) -> Self {
        self.max_occurs = Some(value.into());
        self
    }

    /// Set `nillable`
    pub fn with_nillable(mut self, value: impl Into<String>) -> Self {
        self.nillable = Some(value.into());
        self
    }

    /// Whether the field may be left out
    ///
    /// Compares the literal strings: `nillable="false"` does not cancel
    /// `minOccurs="0"`.
    pub fn is_optional(&self) -> bool {
        self.min_occurs.as_deref() == Some(MIN_OCCURS_OPTIONAL)
            || self.nillable.as_deref() == Some(NILLABLE_TRUE)
    }

    /// Whether the field may occur any number of times
    pub fn is_unbounded(&self) -> bool {
        self.max_occurs.as_deref() == Some(MAX_OCCURS_UNBOUNDED)
    }
}

/// Field descriptors of a `sequence` node, in source order
fn sequence_fields(sequence: Option<&Node>) -> Vec<FieldDescriptor> {
    sequence
        .map(|seq| {
            seq.children_of(tags::ELEMENT)
                .iter()
                .map(FieldDescriptor::from_node)
                .collect()
        })
        .unwrap_or_default()
}

/// Scalar type, optionally restricted to an enumerated set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleTypeNode {
    /// Type name
    pub name: Option<String>,
    /// Restriction base token
    pub base: Option<String>,
    /// Enumerated values in source order, duplicates kept
    pub enumerations: Vec<String>,
}

impl SimpleTypeNode {
    /// Read a simple type from a `simpleType` node
    pub fn from_node(node: &Node) -> Self {
        let restriction = node.child(tags::RESTRICTION);
        Self {
            name: owned_attribute(node, attrs::NAME),
            base: restriction.and_then(|r| owned_attribute(r, attrs::BASE)),
            enumerations: restriction
                .map(|r| {
                    r.children_of(tags::ENUMERATION)
                        .iter()
                        .map(|e| e.attribute(attrs::VALUE).unwrap_or_default().to_string())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// How a complex type lays out its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexShape {
    /// A flat field sequence
    Sequence(Vec<FieldDescriptor>),
    /// A derivation from a named parent plus the fields it adds
    ComplexContent {
        /// Raw parent type token
        base: Option<String>,
        /// Fields declared by the derivation
        fields: Vec<FieldDescriptor>,
    },
}

/// Structured record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexTypeNode {
    /// Type name; absent for anonymous types
    pub name: Option<String>,
    /// Field layout
    pub shape: ComplexShape,
}

impl ComplexTypeNode {
    /// Read a complex type from a `complexType` node
    pub fn from_node(node: &Node) -> Self {
        let shape = match node.child(tags::COMPLEX_CONTENT) {
            Some(content) => {
                let derivation = content
                    .child(tags::EXTENSION)
                    .or_else(|| content.child(tags::RESTRICTION));
                ComplexShape::ComplexContent {
                    base: derivation.and_then(|d| owned_attribute(d, attrs::BASE)),
                    fields: sequence_fields(derivation.and_then(|d| d.child(tags::SEQUENCE))),
                }
            }
            None => ComplexShape::Sequence(sequence_fields(node.child(tags::SEQUENCE))),
        };

        Self {
            name: owned_attribute(node, attrs::NAME),
            shape,
        }
    }

    /// Fields declared directly by this type
    pub fn fields(&self) -> &[FieldDescriptor] {
        match &self.shape {
            ComplexShape::Sequence(fields) => fields,
            ComplexShape::ComplexContent { fields, .. } => fields,
        }
    }
}

/// Top-level element, optionally with an inline record shape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// Element name
    pub name: Option<String>,
    /// Fields of the inline complex type's sequence
    pub fields: Vec<FieldDescriptor>,
}

impl ElementNode {
    /// Read an element from a top-level `element` node
    pub fn from_node(node: &Node) -> Self {
        Self {
            name: owned_attribute(node, attrs::NAME),
            fields: sequence_fields(
                node.child(tags::COMPLEX_TYPE)
                    .and_then(|ct| ct.child(tags::SEQUENCE)),
            ),
        }
    }
}

/// One `schema` block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSection {
    /// Simple types in source order
    pub simple_types: Vec<SimpleTypeNode>,
    /// Complex types in source order
    pub complex_types: Vec<ComplexTypeNode>,
    /// Elements in source order
    pub elements: Vec<ElementNode>,
}

impl SchemaSection {
    /// Read a section from a `schema` node
    pub fn from_node(node: &Node) -> Self {
        Self {
            simple_types: node
                .children_of(tags::SIMPLE_TYPE)
                .iter()
                .map(SimpleTypeNode::from_node)
                .collect(),
            complex_types: node
                .children_of(tags::COMPLEX_TYPE)
                .iter()
                .map(ComplexTypeNode::from_node)
                .collect(),
            elements: node
                .children_of(tags::ELEMENT)
                .iter()
                .map(ElementNode::from_node)
                .collect(),
        }
    }

    /// Number of declarations the section will produce
    pub fn declaration_count(&self) -> usize {
        self.simple_types.len() + self.complex_types.len() + self.elements.len()
    }
}

/// Root translation unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Schema sections in document order
    pub sections: Vec<SchemaSection>,
}

impl SchemaDocument {
    /// Read the schema sections of a parsed document
    ///
    /// Accepts a WSDL `definitions` root, whose `types` block holds one or more
    /// `schema` sections, or a bare `schema` root.
    pub fn from_root(root: &Node) -> Result<Self> {
        let schemas = match root.tag.as_str() {
            tags::SCHEMA => std::slice::from_ref(root),
            tags::DEFINITIONS => {
                let types = root.child(tags::TYPES).ok_or_else(|| {
                    StructureError::new("WSDL document has no types section")
                        .with_expected("definitions/types/schema")
                })?;
                let schemas = types.children_of(tags::SCHEMA);
                if schemas.is_empty() {
                    return Err(StructureError::new("types section contains no schema")
                        .with_expected("definitions/types/schema")
                        .into());
                }
                schemas
            }
            other => {
                return Err(StructureError::new("not a WSDL or XML Schema document")
                    .with_expected("definitions or schema")
                    .with_found(other)
                    .into())
            }
        };

        Ok(Self {
            sections: schemas.iter().map(SchemaSection::from_node).collect(),
        })
    }

    /// Number of declarations across all sections
    pub fn declaration_count(&self) -> usize {
        self.sections.iter().map(SchemaSection::declaration_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Document;
    use crate::error::Error;

    fn root(xml: &str) -> Node {
        Document::from_string(xml).unwrap().root.unwrap()
    }

    #[test]
    fn test_field_optionality() {
        assert!(!FieldDescriptor::new("a", "string").is_optional());
        assert!(FieldDescriptor::new("a", "string").with_min_occurs("0").is_optional());
        assert!(FieldDescriptor::new("a", "string").with_nillable("true").is_optional());
        assert!(!FieldDescriptor::new("a", "string").with_min_occurs("1").is_optional());
        assert!(FieldDescriptor::new("a", "string")
            .with_min_occurs("0")
            .with_nillable("false")
            .is_optional());
    }

    #[test]
    fn test_field_cardinality() {
        assert!(FieldDescriptor::new("a", "string").with_max_occurs("unbounded").is_unbounded());
        assert!(!FieldDescriptor::new("a", "string").with_max_occurs("5").is_unbounded());
        assert!(!FieldDescriptor::new("a", "string").is_unbounded());
    }

    #[test]
    fn test_simple_type_with_enumeration() {
        let node = root(
            r#"<simpleType name="Status">
                 <restriction base="string">
                   <enumeration value="Open"/>
                   <enumeration value="Closed"/>
                   <enumeration value="Open"/>
                 </restriction>
               </simpleType>"#,
        );
        let simple = SimpleTypeNode::from_node(&node);
        assert_eq!(simple.name.as_deref(), Some("Status"));
        assert_eq!(simple.base.as_deref(), Some("string"));
        assert_eq!(simple.enumerations, vec!["Open", "Closed", "Open"]);
    }

    #[test]
    fn test_simple_type_without_restriction() {
        let simple = SimpleTypeNode::from_node(&root(r#"<simpleType name="L"><list itemType="int"/></simpleType>"#));
        assert_eq!(simple.base, None);
        assert!(simple.enumerations.is_empty());
    }

    #[test]
    fn test_complex_type_shapes() {
        let flat = ComplexTypeNode::from_node(&root(
            r#"<complexType name="W"><sequence><element name="count" type="int"/></sequence></complexType>"#,
        ));
        assert!(matches!(flat.shape, ComplexShape::Sequence(ref f) if f.len() == 1));

        let derived = ComplexTypeNode::from_node(&root(
            r#"<complexType name="Dog"><complexContent><extension base="tns_Animal">
                 <sequence><element name="breed" type="string"/></sequence>
               </extension></complexContent></complexType>"#,
        ));
        match derived.shape {
            ComplexShape::ComplexContent { base, fields } => {
                assert_eq!(base.as_deref(), Some("tns_Animal"));
                assert_eq!(fields[0].name.as_deref(), Some("breed"));
            }
            other => panic!("Expected ComplexContent, got {:?}", other),
        }
    }

    #[test]
    fn test_complex_type_without_sequence() {
        let empty = ComplexTypeNode::from_node(&root(r#"<complexType name="Marker"/>"#));
        assert!(empty.fields().is_empty());
        assert_eq!(empty.shape, ComplexShape::Sequence(Vec::new()));
    }

    #[test]
    fn test_element_inline_fields() {
        let element = ElementNode::from_node(&root(
            r#"<element name="Response"><complexType><sequence>
                 <element name="result" type="tns_Result"/>
               </sequence></complexType></element>"#,
        ));
        assert_eq!(element.name.as_deref(), Some("Response"));
        assert_eq!(element.fields.len(), 1);

        let bare = ElementNode::from_node(&root(r#"<element name="Ping" type="tns_Ping"/>"#));
        assert!(bare.fields.is_empty());
    }

    #[test]
    fn test_document_from_wsdl_root() {
        let doc = SchemaDocument::from_root(&root(
            r#"<definitions><types>
                 <schema><simpleType name="A"><restriction base="string"/></simpleType></schema>
                 <schema><complexType name="B"/><element name="c"/></schema>
               </types><message name="m"/></definitions>"#,
        ))
        .unwrap();
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.declaration_count(), 3);
    }

    #[test]
    fn test_document_from_bare_schema() {
        let doc = SchemaDocument::from_root(&root(r#"<schema><complexType name="B"/></schema>"#)).unwrap();
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn test_structure_errors() {
        let missing_types = SchemaDocument::from_root(&root("<definitions><message/></definitions>"));
        assert!(matches!(missing_types, Err(Error::Structure(_))));

        let empty_types = SchemaDocument::from_root(&root("<definitions><types/></definitions>"));
        assert!(matches!(empty_types, Err(Error::Structure(_))));

        let foreign = SchemaDocument::from_root(&root("<html/>"));
        assert!(matches!(foreign, Err(Error::Structure(_))));
    }
}
