//! Transform trait and pipeline plumbing.
//!
//! A [`Pipeline`] threads a [`Document`] through an ordered list of
//! [`AstTransform`]s, each receiving the [`FileContext`] the host supplies
//! alongside every document.

use doctree::Document;
use std::path::{Path, PathBuf};

/// Error type for document transforms.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// I/O error from a transform that consults the originating file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// General transform error.
    #[error("transform error: {0}")]
    Other(String),
}

/// Context describing the file a document came from.
///
/// The host pipeline supplies this alongside every document. Transforms are
/// free to ignore it; most do.
#[derive(Debug, Clone, Default)]
pub struct FileContext {
    path: Option<PathBuf>,
}

impl FileContext {
    /// Context with no originating file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a document read from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The originating file path, if known.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// A document-tree transform.
///
/// Transforms take the document by value and hand back the (possibly
/// rebuilt) document, preserving sibling order for nodes they do not touch.
pub trait AstTransform: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Apply the transform to `document`.
    fn apply(
        &mut self,
        document: Document,
        ctx: &FileContext,
    ) -> Result<Document, TransformError>;
}

/// An ordered list of transforms applied between parse and render.
#[derive(Default)]
pub struct Pipeline {
    transforms: Vec<Box<dyn AstTransform>>,
}

impl Pipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform, builder-style.
    pub fn with(mut self, transform: impl AstTransform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Run every transform over `document` in order.
    pub fn run(
        &mut self,
        mut document: Document,
        ctx: &FileContext,
    ) -> Result<Document, TransformError> {
        for transform in &mut self.transforms {
            tracing::debug!(transform = transform.name(), "Applying transform");
            document = transform.apply(document, ctx)?;
        }
        Ok(document)
    }

    /// Convenience path: parse markdown, run the transforms, render HTML.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_annotator::{FileContext, HeadingAnnotator, Pipeline};
    ///
    /// let mut pipeline = Pipeline::new().with(HeadingAnnotator::new());
    /// let html = pipeline
    ///     .process("# Hello", &FileContext::new())
    ///     .unwrap();
    /// assert!(html.contains("<h1>Hello</h1>"));
    /// ```
    pub fn process(
        &mut self,
        markdown: &str,
        ctx: &FileContext,
    ) -> Result<String, TransformError> {
        let document = doctree::parse(markdown);
        let document = self.run(document, ctx)?;
        Ok(doctree::to_html(&document))
    }
}
