//! Render tree - in-memory page markup prior to final serialization
//!
//! Templates build a [`Node`] tree; the page-assembly stage turns it into
//! HTML with [`Node::to_html`] as the last step of a page build.

use std::fmt;

use indexmap::IndexMap;

use crate::helpers::html_escape;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: [&str; 8] = ["area", "base", "br", "col", "hr", "img", "link", "meta"];

/// A node in the render tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with tag, attributes and children
    Element(Element),
    /// Text content, escaped at serialization time
    Text(String),
}

/// An element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `div`
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: IndexMap<String, String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Serialize the tree to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape(value));
                    out.push('"');
                }
                out.push('>');

                if el.is_void() {
                    return;
                }

                for child in &el.children {
                    child.write_html(out);
                }

                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
