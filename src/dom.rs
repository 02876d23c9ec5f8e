//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. Extraction code works on single
//! nodes (`NodeRef`) and walks the tree in document order: depth-first, left
//! to right, the order the tags appear in the source HTML.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase). `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_string())
}

/// Check whether `node` is an element with tag name `tag`.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(node: &NodeRef) -> Option<String> {
    node.attr("class").map(|s| s.to_string())
}

/// Check if the element carries no attributes at all
#[inline]
#[must_use]
pub fn has_no_attributes(node: &NodeRef) -> bool {
    node.attrs().is_empty()
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Every text node below `node`, trimmed, with empty strings dropped.
#[must_use]
pub fn stripped_strings(node: &NodeRef) -> Vec<String> {
    let mut out = Vec::new();
    collect_strings(node, &mut out);
    out
}

fn collect_strings(node: &NodeRef, out: &mut Vec<String>) {
    for child in node.children() {
        if child.is_text() {
            let text = child.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        } else if child.is_element() {
            collect_strings(&child, out);
        }
    }
}

// === Document Order ===

/// Iterator over every node after a starting node in document order.
///
/// The starting node's own descendants come first, then its following
/// siblings and theirs, then the following siblings of each ancestor.
#[derive(Clone)]
pub struct Following<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Following<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(current)
    }
}

/// Next node in document order, descending first.
fn successor<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    if let Some(child) = node.first_child() {
        return Some(child);
    }
    let mut cursor = node.clone();
    loop {
        if let Some(sibling) = cursor.next_sibling() {
            return Some(sibling);
        }
        cursor = cursor.parent()?;
    }
}

/// All nodes following `node` in document order (`node` itself excluded).
#[must_use]
pub fn following<'a>(node: &NodeRef<'a>) -> Following<'a> {
    Following {
        next: successor(node),
    }
}

/// All elements following `node` in document order.
pub fn following_elements<'a>(node: &NodeRef<'a>) -> impl Iterator<Item = NodeRef<'a>> {
    following(node).filter(NodeRef::is_element)
}

/// All elements with tag name `tag` following `node` in document order.
pub fn find_all_next<'a>(node: &NodeRef<'a>, tag: &str) -> impl Iterator<Item = NodeRef<'a>> {
    let tag = tag.to_ascii_lowercase();
    following_elements(node).filter(move |n| is_tag(n, &tag))
}

/// First element with tag name `tag` following `node` in document order.
#[must_use]
pub fn find_next<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    find_all_next(node, tag).next()
}

// === Querying ===

/// First element in the document matching a CSS selector
#[must_use]
pub fn find_first<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select(selector).nodes().first().cloned()
}

/// First descendant of `node` matching a CSS selector
#[must_use]
pub fn find_descendant<'a>(node: &NodeRef<'a>, selector: &str) -> Option<NodeRef<'a>> {
    Selection::from(node.clone())
        .select(selector)
        .nodes()
        .first()
        .cloned()
}

/// All descendants of `node` matching a CSS selector, in document order
#[must_use]
pub fn find_descendants<'a>(node: &NodeRef<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    Selection::from(node.clone()).select(selector).nodes().to_vec()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn names<'a>(nodes: impl Iterator<Item = NodeRef<'a>>) -> Vec<String> {
        nodes.filter_map(|n| tag_name(&n)).collect()
    }

    #[test]
    fn test_tag_name_and_class() {
        let doc = parse(r#"<div id="main" class="card mb-3">content</div>"#);
        let div = find_first(&doc, "div").expect("div");

        assert_eq!(tag_name(&div), Some("div".to_string()));
        assert_eq!(class_name(&div), Some("card mb-3".to_string()));
        assert!(!has_no_attributes(&div));
    }

    #[test]
    fn test_text_nodes_have_no_tag_name() {
        let doc = parse("<p>hello</p>");
        let p = find_first(&doc, "p").expect("p");
        let text = p.first_child().expect("text child");

        assert!(text.is_text());
        assert_eq!(tag_name(&text), None);
    }

    #[test]
    fn test_following_visits_descendants_then_siblings() {
        let doc = parse(
            r#"<div id="a"><span><em>x</em></span></div><p>y</p><section><b>z</b></section>"#,
        );
        let div = find_first(&doc, "div").expect("div");

        let order = names(following_elements(&div));
        assert_eq!(order, vec!["span", "em", "p", "section", "b"]);
    }

    #[test]
    fn test_following_climbs_out_of_nested_parents() {
        let doc = parse(r#"<div><div><h2>deep</h2></div></div><h3>after</h3>"#);
        let h2 = find_first(&doc, "h2").expect("h2");

        let order = names(following_elements(&h2));
        assert_eq!(order, vec!["h3"]);
    }

    #[test]
    fn test_find_next_skips_other_tags() {
        let doc = parse(r#"<h2>T</h2><p>one</p><ul><li>a</li></ul><ul><li>b</li></ul>"#);
        let h2 = find_first(&doc, "h2").expect("h2");

        let ul = find_next(&h2, "ul").expect("ul");
        assert_eq!(text_content(&ul).trim(), "a");
        assert_eq!(find_all_next(&h2, "ul").count(), 2);
        assert!(find_next(&h2, "table").is_none());
    }

    #[test]
    fn test_stripped_strings_in_document_order() {
        let doc = parse("<ul>\n  <li> Pollen </li>\n  <li><a href=\"#\">Dust  mites</a></li>\n</ul>");
        let ul = find_first(&doc, "ul").expect("ul");

        assert_eq!(stripped_strings(&ul), vec!["Pollen", "Dust  mites"]);
    }

    #[test]
    fn test_has_no_attributes() {
        let doc = parse(r#"<article><p class="lead">x</p><p>y</p></article>"#);
        let paragraphs = find_descendants(&find_first(&doc, "article").expect("article"), "p");

        assert_eq!(paragraphs.len(), 2);
        assert!(!has_no_attributes(&paragraphs[0]));
        assert!(has_no_attributes(&paragraphs[1]));
    }

    #[test]
    fn test_find_descendant_stays_inside_node() {
        let doc = parse(r#"<article><p>in</p></article><ul><li>out</li></ul>"#);
        let article = find_first(&doc, "article").expect("article");

        assert!(find_descendant(&article, "p").is_some());
        assert!(find_descendant(&article, "ul").is_none());
    }
}
