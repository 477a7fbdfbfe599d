//! Minimal XML element tree and its canonical rendering.
//!
//! Documents are assembled as [`Element`] trees and rendered with two-space
//! indentation. Rendering is deterministic: identical trees always produce
//! identical bytes, which the content hashes rely on. Attribute values and
//! text are sanitized on output, so no document carries a code point outside
//! the XML 1.0 character set.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use plcsnap_core::ExportError;

use crate::sanitize::sanitize;

/// Child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element holding a single text child.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).text(text)
    }

    /// Add an attribute and return self.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Add a text child and return self.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Add a child element and return self.
    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    /// Set an attribute, replacing any existing value for the key.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Look up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over child elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Render as a content document (no XML declaration).
    pub fn to_document(&self) -> Result<String, ExportError> {
        render(self, false)
    }

    /// Render as a standalone document with an XML declaration.
    pub fn to_standalone_document(&self) -> Result<String, ExportError> {
        render(self, true)
    }
}

fn render(root: &Element, declaration: bool) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    if declaration {
        let decl = BytesDecl::new("1.0", Some("utf-8"), Some("yes"));
        emit(&mut writer, Event::Decl(decl), &root.name)?;
    }
    write_element(&mut writer, root, &root.name)?;

    String::from_utf8(writer.into_inner()).map_err(|e| ExportError::render(&root.name, e))
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    document: &str,
) -> Result<(), ExportError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), sanitize(value).as_str()));
    }

    if element.children.is_empty() {
        return emit(writer, Event::Empty(start), document);
    }

    emit(writer, Event::Start(start), document)?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e, document)?,
            Node::Text(t) => {
                let text = sanitize(t);
                emit(writer, Event::Text(BytesText::new(&text)), document)?
            }
        }
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())), document)
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>, document: &str) -> Result<(), ExportError> {
    writer
        .write_event(event)
        .map_err(|e| ExportError::render(document, e))
}
