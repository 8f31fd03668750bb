//! Generic XML node tree
//!
//! A parsed document is a tree of [`Node`]s. Each node keeps its attributes as
//! a flat string map and groups its children by tag. A tag that occurs once
//! under a parent is stored as [`Children::One`], a repeated tag as
//! [`Children::Many`]; [`one_or_many`] and [`Node::children_of`] hide that
//! difference from every consumer. Character data is not captured.

use crate::error::{Error, Result};
use crate::limits::Limits;
use indexmap::map::Entry;
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Children of one tag under a parent node
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    /// The tag occurred once
    One(Node),
    /// The tag occurred several times, in document order
    Many(Vec<Node>),
}

impl Children {
    /// View the children as a uniform ordered slice
    pub fn as_slice(&self) -> &[Node] {
        match self {
            Children::One(node) => std::slice::from_ref(node),
            Children::Many(nodes) => nodes,
        }
    }

    /// Number of nodes with this tag
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether there are no nodes
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn push(&mut self, node: Node) {
        match self {
            Children::Many(nodes) => nodes.push(node),
            Children::One(_) => {
                if let Children::One(first) = std::mem::replace(self, Children::Many(Vec::new())) {
                    *self = Children::Many(vec![first, node]);
                }
            }
        }
    }
}

/// Normalize an optional single-or-many child group into a slice
///
/// An absent group is an empty slice, a single node a one-element slice.
pub fn one_or_many(children: Option<&Children>) -> &[Node] {
    children.map(Children::as_slice).unwrap_or(&[])
}

/// Element in the node tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Element tag, as written after prefix normalization
    pub tag: String,
    /// Element attributes in document order
    pub attributes: IndexMap<String, String>,
    /// Child elements grouped by tag, in order of first occurrence
    pub children: IndexMap<String, Children>,
}

impl Node {
    /// Create a new node without attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// All children with the given tag
    pub fn children_of(&self, tag: &str) -> &[Node] {
        one_or_many(self.children.get(tag))
    }

    /// The first child with the given tag
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children_of(tag).first()
    }

    /// Add a child element, collapsing repeated tags into a list
    pub fn add_child(&mut self, child: Node) {
        match self.children.entry(child.tag.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(child),
            Entry::Vacant(entry) => {
                entry.insert(Children::One(child));
            }
        }
    }

    /// Set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }
}

/// Parsed XML document
#[derive(Debug, Default)]
pub struct Document {
    /// Root element of the document
    pub root: Option<Node>,
}

impl Document {
    /// Parse an XML document from a string with default limits
    pub fn from_string(xml: &str) -> Result<Self> {
        Self::parse(xml, &Limits::default())
    }

    /// Parse an XML document from a string
    pub fn parse(xml: &str, limits: &Limits) -> Result<Self> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.trim_text(true);

        let mut doc = Document::default();
        let mut stack: Vec<Node> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    limits.check_xml_depth(stack.len() + 1)?;
                    let node = Self::parse_element(&e, limits)?;
                    stack.push(node);
                }
                Ok(Event::End(_)) => {
                    if let Some(current) = stack.pop() {
                        if let Some(parent) = stack.last_mut() {
                            parent.add_child(current);
                        } else {
                            doc.root = Some(current);
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    limits.check_xml_depth(stack.len() + 1)?;
                    let node = Self::parse_element(&e, limits)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.add_child(node);
                    } else {
                        doc.root = Some(node);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "Error parsing XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                // Text, comments, declarations and processing instructions
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::Xml(format!(
                "Unexpected end of document: <{}> is not closed",
                open.tag
            )));
        }

        Ok(doc)
    }

    fn parse_element(start: &BytesStart, limits: &Limits) -> Result<Node> {
        let tag = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| Error::Xml(format!("Invalid element name: {}", e)))?
            .to_string();

        let mut node = Node::new(tag);

        for attr_result in start.attributes() {
            let attr = attr_result
                .map_err(|e| Error::Xml(format!("Failed to parse attribute: {}", e)))?;

            let name = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::Xml(format!("Invalid attribute name: {}", e)))?
                .to_string();

            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(format!("Failed to unescape attribute value: {}", e)))?
                .to_string();

            node.attributes.insert(name, value);
        }

        limits.check_attributes(node.attributes.len())?;

        Ok(node)
    }

    /// Get the root element
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }
}
