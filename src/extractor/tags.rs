//! Tag names and tag-name tests used by the page extractors.
//!
//! The boundary and content tests match on substrings of the tag name, not
//! on exact names. `<hr>`, `<thead>` or `<header>` end a section just like a
//! heading does, and `<span>` or `<pre>` count as paragraphs.

/// Container of the EPA page's main content.
pub const ARTICLE: &str = "article";

/// Unordered list.
pub const LIST: &str = "ul";

/// List item.
pub const LIST_ITEM: &str = "li";

/// Paragraph.
pub const PARAGRAPH: &str = "p";

/// Card container and card header on the CDC page.
pub const DIV: &str = "div";

/// Heading level of each trigger on the EPA page.
pub const TRIGGER_HEADING: &str = "h2";

const BOUNDARY_MARKER: char = 'h';
const CONTENT_MARKER: char = 'p';

/// Whether an element named `name` ends a content scan.
#[inline]
#[must_use]
pub fn is_section_boundary(name: &str) -> bool {
    name.contains(BOUNDARY_MARKER)
}

/// Whether an element named `name` is collected as a paragraph.
#[inline]
#[must_use]
pub fn is_content_tag(name: &str) -> bool {
    name.contains(CONTENT_MARKER)
}

/// Heading tag one level below `tag` (`h2` -> `h3`). `None` for `h6` and
/// non-heading tags.
#[must_use]
pub fn subheading_tag(tag: &str) -> Option<String> {
    let level: u8 = tag.strip_prefix('h')?.parse().ok()?;
    (1..6).contains(&level).then(|| format!("h{}", level + 1))
}
