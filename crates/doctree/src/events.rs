//! Lowering a [`Document`] tree back to `pulldown_cmark` events and HTML.

use crate::node::{Document, Node};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, LinkType, Tag, TagEnd};

/// Lower a document tree to a flat event sequence.
pub fn to_events(document: &Document) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    for node in &document.children {
        push_node_events(node, &mut events);
    }
    events
}

/// Render a document tree to HTML.
///
/// # Examples
///
/// ```
/// use doctree::{parse, to_html};
///
/// let html = to_html(&parse("# Hello"));
/// assert!(html.contains("<h1>Hello</h1>"));
/// ```
pub fn to_html(document: &Document) -> String {
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, to_events(document).into_iter());
    html
}

fn push_node_events(node: &Node, events: &mut Vec<Event<'static>>) {
    match node {
        Node::Heading(heading) => {
            let level = heading_level(heading.depth);
            events.push(Event::Start(Tag::Heading {
                level,
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
            }));
            push_children(&heading.children, events);
            events.push(Event::End(TagEnd::Heading(level)));
        }
        Node::Paragraph(paragraph) => {
            events.push(Event::Start(Tag::Paragraph));
            push_children(&paragraph.children, events);
            events.push(Event::End(TagEnd::Paragraph));
        }
        Node::Text(text) => events.push(Event::Text(owned(&text.value))),
        Node::Html(html) => events.push(Event::Html(owned(&html.value))),
        Node::CodeBlock(code) => {
            let info = owned(code.language.as_deref().unwrap_or_default());
            events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))));
            events.push(Event::Text(owned(&format!("{}\n", code.value))));
            events.push(Event::End(TagEnd::CodeBlock));
        }
        Node::BlockQuote(quote) => {
            events.push(Event::Start(Tag::BlockQuote));
            push_children(&quote.children, events);
            events.push(Event::End(TagEnd::BlockQuote));
        }
        Node::List(list) => {
            let start = if list.ordered {
                Some(list.start.unwrap_or(1))
            } else {
                None
            };
            events.push(Event::Start(Tag::List(start)));
            push_children(&list.children, events);
            events.push(Event::End(TagEnd::List(list.ordered)));
        }
        Node::ListItem(item) => {
            events.push(Event::Start(Tag::Item));
            push_children(&item.children, events);
            events.push(Event::End(TagEnd::Item));
        }
        Node::Emphasis(emphasis) => {
            events.push(Event::Start(Tag::Emphasis));
            push_children(&emphasis.children, events);
            events.push(Event::End(TagEnd::Emphasis));
        }
        Node::Strong(strong) => {
            events.push(Event::Start(Tag::Strong));
            push_children(&strong.children, events);
            events.push(Event::End(TagEnd::Strong));
        }
        Node::InlineCode(code) => events.push(Event::Code(owned(&code.value))),
        Node::Link(link) => {
            events.push(Event::Start(Tag::Link {
                link_type: LinkType::Inline,
                dest_url: owned(&link.url),
                title: owned(link.title.as_deref().unwrap_or_default()),
                id: CowStr::Borrowed(""),
            }));
            push_children(&link.children, events);
            events.push(Event::End(TagEnd::Link));
        }
        Node::Image(image) => {
            events.push(Event::Start(Tag::Image {
                link_type: LinkType::Inline,
                dest_url: owned(&image.url),
                title: owned(image.title.as_deref().unwrap_or_default()),
                id: CowStr::Borrowed(""),
            }));
            push_children(&image.children, events);
            events.push(Event::End(TagEnd::Image));
        }
        Node::SoftBreak => events.push(Event::SoftBreak),
        Node::HardBreak => events.push(Event::HardBreak),
        Node::ThematicBreak => events.push(Event::Rule),
    }
}

fn push_children(children: &[Node], events: &mut Vec<Event<'static>>) {
    for child in children {
        push_node_events(child, events);
    }
}

fn heading_level(depth: u8) -> HeadingLevel {
    match depth {
        0 | 1 => HeadingLevel::H1,
        2 => HeadingLevel::H2,
        3 => HeadingLevel::H3,
        4 => HeadingLevel::H4,
        5 => HeadingLevel::H5,
        _ => HeadingLevel::H6,
    }
}

fn owned(s: &str) -> CowStr<'static> {
    CowStr::from(s.to_string())
}
