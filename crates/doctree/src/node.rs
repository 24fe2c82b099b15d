//! Document tree node types.
//!
//! This module defines the [`Document`] root and the [`Node`] tagged union
//! used by tree transforms. The shape follows the mdast convention: block and
//! inline nodes share one enum, container nodes hold an ordered `children`
//! sequence, and literal nodes hold a `value` string.

use serde::{Deserialize, Serialize};

/// A parsed markdown document: an ordered sequence of top-level siblings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level block nodes in source order.
    pub children: Vec<Node>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A single node in the document tree.
///
/// The variant set covers the constructs produced by the CommonMark parser
/// without extensions. Consumers that walk the tree should treat unknown
/// shapes as pass-through rather than assume a closed world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// A markdown heading (`# Title`).
    Heading(Heading),
    /// A paragraph of inline content.
    Paragraph(Paragraph),
    /// Literal text.
    Text(Text),
    /// Raw HTML, block-level or inline.
    Html(Html),
    /// A fenced or indented code block.
    CodeBlock(CodeBlock),
    /// A blockquote (`> ...`).
    BlockQuote(BlockQuote),
    /// An ordered or unordered list.
    List(List),
    /// A single list item.
    ListItem(ListItem),
    /// Emphasized inline content (`*text*`).
    Emphasis(Emphasis),
    /// Strongly emphasized inline content (`**text**`).
    Strong(Strong),
    /// Inline code (`` `code` ``).
    InlineCode(InlineCode),
    /// A hyperlink.
    Link(Link),
    /// An image reference.
    Image(Image),
    /// A soft line break.
    SoftBreak,
    /// A hard line break.
    HardBreak,
    /// A thematic break (`---`).
    ThematicBreak,
}

/// A markdown heading with its inline children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading depth, 1 (`#`) through 6 (`######`).
    pub depth: u8,
    /// Inline children of the heading.
    pub children: Vec<Node>,
}

/// A paragraph of inline content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<Node>,
}

/// Literal text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Raw HTML content, stored without the block's trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Html {
    pub value: String,
}

/// A code block with an optional info-string language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub value: String,
}

/// A blockquote container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    pub children: Vec<Node>,
}

/// A list container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Whether the list is ordered.
    pub ordered: bool,
    /// First item number for ordered lists.
    pub start: Option<u64>,
    pub children: Vec<Node>,
}

/// A single list item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Vec<Node>,
}

/// Emphasized inline content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub children: Vec<Node>,
}

/// Strongly emphasized inline content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub children: Vec<Node>,
}

/// Inline code content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

/// A hyperlink with inline children as its label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

/// An image with inline children as its alt text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    /// The textual value of a literal node.
    ///
    /// Returns `None` for container nodes and breaks, so "has no value"
    /// safely reads as "does not match" at comparison sites.
    ///
    /// # Examples
    ///
    /// ```
    /// use doctree::{Html, Node, Paragraph};
    ///
    /// let html = Node::Html(Html { value: "<hr>".into() });
    /// assert_eq!(html.value(), Some("<hr>"));
    /// assert_eq!(Node::Paragraph(Paragraph::default()).value(), None);
    /// ```
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            Node::Html(html) => Some(&html.value),
            Node::InlineCode(code) => Some(&code.value),
            Node::CodeBlock(code) => Some(&code.value),
            _ => None,
        }
    }

    /// The child sequence of a container node, if any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Heading(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::BlockQuote(n) => Some(&n.children),
            Node::List(n) => Some(&n.children),
            Node::ListItem(n) => Some(&n.children),
            Node::Emphasis(n) => Some(&n.children),
            Node::Strong(n) => Some(&n.children),
            Node::Link(n) => Some(&n.children),
            Node::Image(n) => Some(&n.children),
            _ => None,
        }
    }

    /// Mutable access to the child sequence of a container node.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Heading(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::BlockQuote(n) => Some(&mut n.children),
            Node::List(n) => Some(&mut n.children),
            Node::ListItem(n) => Some(&mut n.children),
            Node::Emphasis(n) => Some(&mut n.children),
            Node::Strong(n) => Some(&mut n.children),
            Node::Link(n) => Some(&mut n.children),
            Node::Image(n) => Some(&mut n.children),
            _ => None,
        }
    }

    /// Plain text node constructor.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Raw HTML node constructor.
    pub fn html(value: impl Into<String>) -> Self {
        Node::Html(Html {
            value: value.into(),
        })
    }

    /// Heading node constructor.
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { depth, children })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_on_literal_nodes() {
        assert_eq!(Node::text("hello").value(), Some("hello"));
        assert_eq!(Node::html("<br>").value(), Some("<br>"));
        assert_eq!(
            Node::InlineCode(InlineCode { value: "x".into() }).value(),
            Some("x")
        );
    }

    #[test]
    fn test_value_on_containers() {
        assert_eq!(Node::heading(1, vec![Node::text("T")]).value(), None);
        assert_eq!(Node::SoftBreak.value(), None);
        assert_eq!(Node::ThematicBreak.value(), None);
    }

    #[test]
    fn test_children_access() {
        let mut node = Node::heading(2, vec![Node::text("T")]);
        assert_eq!(node.children().map(|c| c.len()), Some(1));
        node.children_mut().unwrap().push(Node::SoftBreak);
        assert_eq!(node.children().map(|c| c.len()), Some(2));
        assert!(Node::text("x").children().is_none());
    }

    #[test]
    fn test_serde_shape_is_type_tagged() {
        let node = Node::heading(1, vec![Node::text("Title")]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["depth"], 1);
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["value"], "Title");
    }
}
