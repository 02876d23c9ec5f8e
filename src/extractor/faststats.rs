//! FastStats page (CDC).
//!
//! Facts are grouped in `<div class="card mb-3">` containers. The first
//! `<div>` after a card's opening tag is its header; only cards whose header
//! is styled `bg-primary` are part of the report.

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::report::{Block, Section};
use crate::text::normalize;

use super::tags::{DIV, LIST_ITEM};

/// Banner of the statistics page.
pub const PAGE_HEADER: &str = "Asthma Faststats © CDC";

/// Class attribute of a card container.
pub const CARD_CLASS: &str = "card mb-3";

/// Class marker of a titled card header.
pub const CARD_HEADER_CLASS: &str = "bg-primary";

/// Every card container of the page, in document order.
///
/// A `div` is a card when its class attribute, whitespace-normalized, is
/// exactly [`CARD_CLASS`].
#[must_use]
pub fn cards(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.select(DIV)
        .nodes()
        .iter()
        .filter(|node| dom::class_name(node).is_some_and(|class| normalize(&class) == CARD_CLASS))
        .cloned()
        .collect()
}

/// Whether a header's class list holds the [`CARD_HEADER_CLASS`] token.
fn is_titled_header(class: &str) -> bool {
    class.split_whitespace().any(|token| token == CARD_HEADER_CLASS)
}

/// Title and bullets of one card.
///
/// A card whose header lacks the title marker yields an empty section; a
/// card without any following `div` is an error.
pub fn card_section(card: &NodeRef) -> Result<Section> {
    let header = dom::find_next(card, DIV)
        .ok_or_else(|| Error::MissingElement(format!("header <{DIV}> after card")))?;

    let mut section = Section::new("card");
    match dom::class_name(&header) {
        Some(class) if is_titled_header(&class) => {
            section.push(Block::Title(normalize(&header.text())));
            for fact in dom::find_descendants(card, LIST_ITEM) {
                section.push(Block::Bullet(normalize(&fact.text())));
            }
        }
        class => {
            tracing::warn!(class = class.as_deref().unwrap_or(""), "skipping card without title marker");
        }
    }
    Ok(section)
}

/// The whole statistics page: banner, then every card in document order.
pub fn faststats_page(doc: &Document) -> Result<Section> {
    let mut page = Section::new("faststats");
    page.push(Block::Header(PAGE_HEADER.to_string()));

    let cards = cards(doc);
    tracing::debug!(count = cards.len(), "faststats cards");
    for card in &cards {
        page.extend(card_section(card)?);
    }
    Ok(page)
}
