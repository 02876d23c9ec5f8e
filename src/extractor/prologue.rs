//! Opening page: welcome banner, date line and the EPA introduction.

use chrono::NaiveDateTime;

use crate::console::brief;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::report::{Block, Section};
use crate::text::normalize;

use super::tags::{ARTICLE, PARAGRAPH};

/// Banner of the opening page.
pub const WELCOME: &str = "WELCOME to ClearAir for Better Asthma Management";

/// Text of the first attribute-free paragraph of the page's `<article>`.
///
/// Styled paragraphs (breadcrumbs, disclaimers, ...) carry a class, so the
/// first plain one is the page introduction. Empty when there is none.
pub fn intro_paragraph(doc: &Document) -> Result<String> {
    let article = dom::find_first(doc, ARTICLE)
        .ok_or_else(|| Error::MissingElement(format!("<{ARTICLE}>")))?;

    Ok(dom::find_descendants(&article, PARAGRAPH)
        .iter()
        .find(|p| dom::has_no_attributes(p))
        .map(|p| normalize(&p.text()))
        .unwrap_or_default())
}

pub fn prologue(doc: &Document, now: &NaiveDateTime) -> Result<Section> {
    let mut page = Section::new("prologue");
    page.push(Block::Header(WELCOME.to_string()));
    page.push(Block::SubHeader(brief(now)));
    page.push(Block::Para(intro_paragraph(doc)?));
    page.push(Block::Homepage);
    Ok(page)
}
