//! Subsection lookup by heading text.

use crate::dom::{self, NodeRef};
use crate::error::{Error, Result};
use crate::text::match_key;

/// Find the first element named `tag` after `start` whose text matches `name`.
///
/// Elements are scanned in document order, `start`'s own descendants
/// included. Text is compared trimmed and case-insensitively.
#[must_use]
pub fn find_sub_item<'a>(start: &NodeRef<'a>, tag: &str, name: &str) -> Option<NodeRef<'a>> {
    let wanted = match_key(name);
    let found = dom::find_all_next(start, tag).find(|node| match_key(&node.text()) == wanted);
    tracing::debug!(tag, name, found = found.is_some(), "subsection lookup");
    found
}

/// Like [`find_sub_item`], but a miss is an error.
pub fn require_sub_item<'a>(start: &NodeRef<'a>, tag: &str, name: &str) -> Result<NodeRef<'a>> {
    find_sub_item(start, tag, name)
        .ok_or_else(|| Error::MissingElement(format!("<{tag}> \"{}\"", name.trim())))
}
