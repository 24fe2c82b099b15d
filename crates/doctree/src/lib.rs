//! Markdown document tree for pipeline transforms.
//!
//! This crate provides the tree model that document transforms operate on:
//! an mdast-style [`Document`] of tagged [`Node`]s, a parser that folds
//! `pulldown_cmark` events into that tree, and a renderer that lowers the
//! tree back to events and HTML.
//!
//! # Modules
//!
//! - [`node`] - The [`Document`] / [`Node`] types and their accessors
//! - [`builder`] - Markdown text to tree ([`parse`])
//! - [`events`] - Tree to `pulldown_cmark` events and HTML ([`to_html`])

pub mod builder;
pub mod events;
pub mod node;

// Re-export commonly used types at crate root
pub use builder::parse;
pub use events::{to_events, to_html};
pub use node::{
    BlockQuote, CodeBlock, Document, Emphasis, Heading, Html, Image, InlineCode, Link, List,
    ListItem, Node, Paragraph, Strong, Text,
};
