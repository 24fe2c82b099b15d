//! Content-region heading annotation for markdown document trees.
//!
//! Documentation sources mark prebuilt-UI and custom-UI sections with literal
//! `<PreBuiltUIContent>` / `<CustomUIContent>` markers between top-level
//! blocks. This crate provides the transform that walks a parsed
//! [`doctree::Document`] once, tracks which region is active, and appends a
//! region tag plus `{#slug}` anchor to the text of every heading found inside
//! a region, so downstream tooling can link to and filter those headings.
//!
//! # Modules
//!
//! - [`region`] - Marker literals and the region scan state
//! - [`slug`] - Anchor slug derivation from heading text
//! - [`annotate`] - The [`HeadingAnnotator`] transform
//! - [`pipeline`] - The [`AstTransform`] seam and [`Pipeline`] plumbing
//!
//! # Example
//!
//! ```
//! use region_annotator::{FileContext, HeadingAnnotator, Pipeline};
//!
//! let markdown = "<PreBuiltUIContent>\n\n# Getting Started\n\n</PreBuiltUIContent>\n";
//! let mut pipeline = Pipeline::new().with(HeadingAnnotator::new());
//! let html = pipeline.process(markdown, &FileContext::new()).unwrap();
//! assert!(html.contains("Getting Started [[prebuilt]] {#getting-started}"));
//! ```

pub mod annotate;
pub mod pipeline;
pub mod region;
pub mod slug;

// Re-export commonly used types at crate root
pub use annotate::{annotate_headings, HeadingAnnotator};
pub use pipeline::{AstTransform, FileContext, Pipeline, TransformError};
pub use region::{Region, RegionFlags};
pub use slug::slugify;
