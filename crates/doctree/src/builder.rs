//! Markdown parsing into a [`Document`] tree.
//!
//! Folds the `pulldown_cmark` event stream into the node types from
//! [`crate::node`] with a stack of open containers. Parsing is total: any
//! input yields a tree, there is no error path.

use crate::node::{
    BlockQuote, CodeBlock, Document, Emphasis, Heading, Image, InlineCode, Link, List, ListItem,
    Node, Paragraph, Strong,
};
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag};

/// Parse markdown text into a document tree.
///
/// Uses plain CommonMark (no extensions), matching the dialect the host
/// pipeline feeds in. A standalone HTML line such as `<CustomUIContent>`
/// becomes a top-level [`Node::Html`] whose value is the literal tag.
///
/// # Examples
///
/// ```
/// use doctree::{parse, Node};
///
/// let document = parse("# Hello\n\nWorld");
/// assert_eq!(document.children.len(), 2);
/// assert!(matches!(document.children[0], Node::Heading(_)));
/// ```
pub fn parse(markdown: &str) -> Document {
    let mut builder = TreeBuilder::default();
    for event in Parser::new(markdown) {
        builder.handle(event);
    }
    builder.finish()
}

/// An open container on the builder stack.
enum Container {
    Paragraph,
    Heading(u8),
    BlockQuote,
    CodeBlock(Option<String>),
    HtmlBlock,
    List { ordered: bool, start: Option<u64> },
    ListItem,
    Emphasis,
    Strong,
    Link { url: String, title: Option<String> },
    Image { url: String, title: Option<String> },
    // Constructs the tree has no variant for (tables etc.); children are
    // spliced into the parent on close.
    Transparent,
}

struct Frame {
    container: Container,
    children: Vec<Node>,
    literal: String,
}

impl Frame {
    fn open(container: Container) -> Self {
        Self {
            container,
            children: Vec::new(),
            literal: String::new(),
        }
    }

    fn collects_literal(&self) -> bool {
        matches!(
            self.container,
            Container::CodeBlock(_) | Container::HtmlBlock
        )
    }
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.stack.push(Frame::open(open_container(tag))),
            Event::End(_) => {
                if let Some(frame) = self.stack.pop() {
                    self.close(frame);
                }
            }
            Event::Text(text) => match self.stack.last_mut() {
                Some(frame) if frame.collects_literal() => frame.literal.push_str(&text),
                _ => self.push(Node::text(text.into_string())),
            },
            Event::Code(code) => self.push(Node::InlineCode(InlineCode {
                value: code.into_string(),
            })),
            Event::Html(html) | Event::InlineHtml(html) => match self.stack.last_mut() {
                Some(frame) if frame.collects_literal() => frame.literal.push_str(&html),
                _ => self.push(Node::html(html.trim_end_matches('\n').to_string())),
            },
            Event::SoftBreak => self.push(Node::SoftBreak),
            Event::HardBreak => self.push(Node::HardBreak),
            Event::Rule => self.push(Node::ThematicBreak),
            // Footnotes and task lists require extensions we do not enable.
            Event::FootnoteReference(_) | Event::TaskListMarker(_) => {}
        }
    }

    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.root.push(node),
        }
    }

    fn close(&mut self, frame: Frame) {
        let Frame {
            container,
            children,
            literal,
        } = frame;
        let node = match container {
            Container::Paragraph => Node::Paragraph(Paragraph { children }),
            Container::Heading(depth) => Node::Heading(Heading { depth, children }),
            Container::BlockQuote => Node::BlockQuote(BlockQuote { children }),
            Container::CodeBlock(language) => Node::CodeBlock(CodeBlock {
                language,
                value: literal.trim_end_matches('\n').to_string(),
            }),
            Container::HtmlBlock => Node::html(literal.trim_end_matches('\n').to_string()),
            Container::List { ordered, start } => Node::List(List {
                ordered,
                start,
                children,
            }),
            Container::ListItem => Node::ListItem(ListItem { children }),
            Container::Emphasis => Node::Emphasis(Emphasis { children }),
            Container::Strong => Node::Strong(Strong { children }),
            Container::Link { url, title } => Node::Link(Link {
                url,
                title,
                children,
            }),
            Container::Image { url, title } => Node::Image(Image {
                url,
                title,
                children,
            }),
            Container::Transparent => {
                for child in children {
                    self.push(child);
                }
                return;
            }
        };
        self.push(node);
    }

    fn finish(mut self) -> Document {
        // A well-formed event stream closes every container; drain anything
        // left over rather than drop it.
        while let Some(frame) = self.stack.pop() {
            self.close(frame);
        }
        Document {
            children: self.root,
        }
    }
}

fn open_container(tag: Tag<'_>) -> Container {
    match tag {
        Tag::Paragraph => Container::Paragraph,
        Tag::Heading { level, .. } => Container::Heading(level as u8),
        Tag::BlockQuote => Container::BlockQuote,
        Tag::CodeBlock(kind) => Container::CodeBlock(match kind {
            CodeBlockKind::Fenced(info) if !info.is_empty() => Some(info.into_string()),
            _ => None,
        }),
        Tag::HtmlBlock => Container::HtmlBlock,
        Tag::List(start) => Container::List {
            ordered: start.is_some(),
            start,
        },
        Tag::Item => Container::ListItem,
        Tag::Emphasis => Container::Emphasis,
        Tag::Strong => Container::Strong,
        Tag::Link {
            dest_url, title, ..
        } => Container::Link {
            url: dest_url.into_string(),
            title: non_empty(title.into_string()),
        },
        Tag::Image {
            dest_url, title, ..
        } => Container::Image {
            url: dest_url.into_string(),
            title: non_empty(title.into_string()),
        },
        _ => Container::Transparent,
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
