//! The heading annotator transform.
//!
//! Walks a document's top-level siblings once, tracking content-region
//! markers, and rewrites the text of headings found inside a region: the
//! region tag and a `{#slug}` anchor are appended to each direct text child.
//! Markers below the top level never toggle state and headings below the top
//! level are never touched.

use crate::pipeline::{AstTransform, FileContext, TransformError};
use crate::region::{Region, RegionFlags};
use crate::slug::slugify;
use doctree::{Document, Heading, Node};

/// Appends region tags and anchor slugs to headings inside content regions.
///
/// Takes no configuration; the marker literals and tag strings are fixed.
/// The file context handed in by the pipeline is accepted and ignored. The
/// transform is not idempotent: running it twice over a document appends a
/// second suffix to every tagged heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingAnnotator;

impl HeadingAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl AstTransform for HeadingAnnotator {
    fn name(&self) -> &'static str {
        "heading_annotator"
    }

    fn apply(
        &mut self,
        document: Document,
        _ctx: &FileContext,
    ) -> Result<Document, TransformError> {
        Ok(annotate_headings(document))
    }
}

/// Annotate headings found inside content regions.
///
/// Region state is local to this call; nothing persists across documents.
///
/// # Examples
///
/// ```
/// use doctree::Node;
/// use region_annotator::annotate_headings;
///
/// let document = doctree::parse("<PreBuiltUIContent>\n\n# Getting Started\n\n</PreBuiltUIContent>\n");
/// let document = annotate_headings(document);
/// let Node::Heading(heading) = &document.children[1] else { unreachable!() };
/// assert_eq!(
///     heading.children[0].value(),
///     Some("Getting Started [[prebuilt]] {#getting-started}"),
/// );
/// ```
pub fn annotate_headings(mut document: Document) -> Document {
    if document.children.is_empty() {
        return document;
    }

    let mut flags = RegionFlags::new();
    for child in &mut document.children {
        if let Some(value) = child.value() {
            if flags.apply_marker(value) {
                tracing::debug!(
                    marker = value,
                    in_pre_built = flags.is_in_pre_built(),
                    in_custom = flags.is_in_custom(),
                    "Content region marker"
                );
                continue;
            }
        }
        if let Node::Heading(heading) = child {
            if let Some(region) = flags.active() {
                annotate_heading(heading, region);
            }
        }
    }
    document
}

fn annotate_heading(heading: &mut Heading, region: Region) {
    for child in &mut heading.children {
        if let Node::Text(text) = child {
            let slug = slugify(&text.value);
            tracing::debug!(region = ?region, slug = %slug, "Annotating heading text");
            text.value = format!("{}{} {{#{slug}}}", text.value, region.tag());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{
        CUSTOM_CLOSE, CUSTOM_OPEN, PRE_BUILT_CLOSE, PRE_BUILT_OPEN,
    };

    fn heading(text: &str) -> Node {
        Node::heading(2, vec![Node::text(text)])
    }

    fn heading_text(node: &Node) -> &str {
        let Node::Heading(heading) = node else {
            panic!("expected heading, got {node:?}");
        };
        heading.children[0].value().expect("heading text")
    }

    fn doc(children: Vec<Node>) -> Document {
        Document { children }
    }

    #[test]
    fn test_empty_document_is_untouched() {
        let document = annotate_headings(Document::new());
        assert!(document.children.is_empty());
    }

    #[test]
    fn test_heading_outside_any_region_is_untouched() {
        let document = annotate_headings(doc(vec![
            heading("Intro"),
            Node::html(PRE_BUILT_OPEN),
            Node::html(PRE_BUILT_CLOSE),
        ]));
        assert_eq!(heading_text(&document.children[0]), "Intro");
    }

    #[test]
    fn test_pre_built_region_tags_heading() {
        let document = annotate_headings(doc(vec![
            Node::html(PRE_BUILT_OPEN),
            heading("Getting Started"),
            Node::html(PRE_BUILT_CLOSE),
        ]));
        assert_eq!(
            heading_text(&document.children[1]),
            "Getting Started [[prebuilt]] {#getting-started}"
        );
    }

    #[test]
    fn test_custom_region_tags_heading() {
        let document = annotate_headings(doc(vec![
            Node::html(CUSTOM_OPEN),
            heading("My Widget"),
            Node::html(CUSTOM_CLOSE),
        ]));
        assert_eq!(
            heading_text(&document.children[1]),
            "My Widget [[custom]] {#my-widget}"
        );
    }

    #[test]
    fn test_marker_nodes_stay_in_the_tree() {
        let document = annotate_headings(doc(vec![
            Node::html(CUSTOM_OPEN),
            heading("My Widget"),
            Node::html(CUSTOM_CLOSE),
        ]));
        assert_eq!(document.children.len(), 3);
        assert_eq!(document.children[0].value(), Some(CUSTOM_OPEN));
        assert_eq!(document.children[2].value(), Some(CUSTOM_CLOSE));
    }

    #[test]
    fn test_regions_are_tracked_independently() {
        let document = annotate_headings(doc(vec![
            Node::html(PRE_BUILT_OPEN),
            heading("First"),
            Node::html(PRE_BUILT_CLOSE),
            heading("Between"),
            Node::html(PRE_BUILT_OPEN),
            heading("Second"),
            Node::html(PRE_BUILT_CLOSE),
        ]));
        assert_eq!(
            heading_text(&document.children[1]),
            "First [[prebuilt]] {#first}"
        );
        assert_eq!(heading_text(&document.children[3]), "Between");
        assert_eq!(
            heading_text(&document.children[5]),
            "Second [[prebuilt]] {#second}"
        );
    }

    #[test]
    fn test_overlapping_regions_prefer_pre_built() {
        let document = annotate_headings(doc(vec![
            Node::html(CUSTOM_OPEN),
            Node::html(PRE_BUILT_OPEN),
            heading("Shared"),
            Node::html(PRE_BUILT_CLOSE),
            heading("Still Custom"),
        ]));
        assert_eq!(
            heading_text(&document.children[2]),
            "Shared [[prebuilt]] {#shared}"
        );
        assert_eq!(
            heading_text(&document.children[4]),
            "Still Custom [[custom]] {#still-custom}"
        );
    }

    #[test]
    fn test_annotation_is_not_idempotent() {
        let document = annotate_headings(doc(vec![
            Node::html(CUSTOM_OPEN),
            heading("My Widget"),
            Node::html(CUSTOM_CLOSE),
        ]));
        let document = annotate_headings(document);
        // The second pass slugs the already-suffixed text, brackets and all.
        assert_eq!(
            heading_text(&document.children[1]),
            "My Widget [[custom]] {#my-widget} [[custom]] {#my-widget-[[custom]]-{#my-widget}}"
        );
    }

    #[test]
    fn test_only_direct_text_children_are_rewritten() {
        let document = annotate_headings(doc(vec![
            Node::html(PRE_BUILT_OPEN),
            Node::Heading(doctree::Heading {
                depth: 3,
                children: vec![
                    Node::text("Use "),
                    Node::InlineCode(doctree::InlineCode {
                        value: "init".into(),
                    }),
                ],
            }),
            Node::html(PRE_BUILT_CLOSE),
        ]));
        let Node::Heading(heading) = &document.children[1] else {
            panic!("expected heading");
        };
        assert_eq!(
            heading.children[0].value(),
            Some("Use  [[prebuilt]] {#use}")
        );
        // Inline code is not a text node and keeps its value.
        assert_eq!(heading.children[1].value(), Some("init"));
    }

    #[test]
    fn test_heading_without_text_children_is_a_no_op() {
        let document = annotate_headings(doc(vec![
            Node::html(PRE_BUILT_OPEN),
            Node::heading(2, vec![]),
        ]));
        let Node::Heading(heading) = &document.children[1] else {
            panic!("expected heading");
        };
        assert!(heading.children.is_empty());
    }

    #[test]
    fn test_markers_below_top_level_do_not_toggle() {
        let document = annotate_headings(doc(vec![
            Node::BlockQuote(doctree::BlockQuote {
                children: vec![Node::html(PRE_BUILT_OPEN)],
            }),
            heading("Intro"),
        ]));
        assert_eq!(heading_text(&document.children[1]), "Intro");
    }

    #[test]
    fn test_headings_below_top_level_are_untouched() {
        let document = annotate_headings(doc(vec![
            Node::html(PRE_BUILT_OPEN),
            Node::BlockQuote(doctree::BlockQuote {
                children: vec![heading("Nested")],
            }),
            Node::html(PRE_BUILT_CLOSE),
        ]));
        let Node::BlockQuote(quote) = &document.children[1] else {
            panic!("expected blockquote");
        };
        assert_eq!(heading_text(&quote.children[0]), "Nested");
    }

    #[test]
    fn test_unclosed_region_runs_to_end_of_document() {
        let document = annotate_headings(doc(vec![
            Node::html(CUSTOM_OPEN),
            heading("One"),
            heading("Two"),
        ]));
        assert_eq!(heading_text(&document.children[1]), "One [[custom]] {#one}");
        assert_eq!(heading_text(&document.children[2]), "Two [[custom]] {#two}");
    }
}
