//! Anchor slug generation for heading text.

/// Derive an anchor slug from heading text.
///
/// Lower-cases the text, replaces every space with a hyphen, then strips
/// leading and trailing runs of hyphens and whitespace. The replacement runs
/// before the trim, so outer whitespace turns into boundary hyphens that the
/// trim removes; interior runs of spaces are kept as runs of hyphens. Hyphens
/// the author wrote at the ends of the text are stripped as well.
///
/// # Examples
///
/// ```
/// use region_annotator::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("  Hello   World  "), "hello---world");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}
