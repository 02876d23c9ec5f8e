//! Asthma triggers page (EPA).
//!
//! The page lists the triggers in the first `<ul>` of its `<article>`, then
//! gives each trigger an `<h2>` with two `<h3>` subsections: "About ..." and
//! "Actions You Can Take".

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::locator::require_sub_item;
use crate::report::{Block, Section};
use crate::text::{is_valid_text, normalize};

use super::tags::{self, ARTICLE, LIST, LIST_ITEM, TRIGGER_HEADING};

/// Banner of the triggers page.
pub const PAGE_HEADER: &str = "Asthma Triggers © EPA";

/// Fixed introduction shown above the list of triggers.
pub const INTRODUCTION: &str = "More than 25 million people in the U.S. have asthma. \
    It is a long-term disease that causes your airways to become swollen and inflamed, \
    making it hard to breathe. There is no cure for asthma, \
    but it can be managed and controlled.";

/// The trigger list element and its labels in order.
pub fn trigger_list(doc: &Document) -> Result<(NodeRef<'_>, Vec<String>)> {
    let article = dom::find_first(doc, ARTICLE)
        .ok_or_else(|| Error::MissingElement(format!("<{ARTICLE}>")))?;
    let list = dom::find_descendant(&article, LIST)
        .ok_or_else(|| Error::MissingElement(format!("<{LIST}> inside <{ARTICLE}>")))?;

    let labels = dom::stripped_strings(&list);
    tracing::debug!(count = labels.len(), "trigger labels");
    Ok((list, labels))
}

/// About and Actions blocks for one trigger.
///
/// The trigger's heading is searched after `list`. The About heading is
/// emitted as a paragraph, followed by every valid paragraph up to the next
/// element whose tag name contains `h`. The Actions heading becomes a title
/// and each item of the first list after it a bullet.
pub fn trigger_section(list: &NodeRef, label: &str) -> Result<Section> {
    let heading = require_sub_item(list, TRIGGER_HEADING, label)?;
    let sub_tag = dom::tag_name(&heading)
        .as_deref()
        .and_then(tags::subheading_tag)
        .ok_or_else(|| Error::MissingElement(format!("subheading level under \"{label}\"")))?;

    let mut subsections = dom::find_all_next(&heading, &sub_tag);
    let about = subsections
        .next()
        .ok_or_else(|| Error::MissingElement(format!("About <{sub_tag}> for \"{label}\"")))?;
    let actions = subsections
        .next()
        .ok_or_else(|| Error::MissingElement(format!("Actions <{sub_tag}> for \"{label}\"")))?;

    let mut section = Section::new(normalize(label));

    section.push(Block::Para(normalize(&about.text())));
    for node in dom::following_elements(&about) {
        let Some(name) = dom::tag_name(&node) else {
            continue;
        };
        if tags::is_section_boundary(&name) {
            break;
        }
        if tags::is_content_tag(&name) {
            let text = node.text();
            if is_valid_text(&text) {
                section.push(Block::Para(normalize(&text)));
            }
        }
    }

    section.push(Block::Title(normalize(&actions.text())));
    let actions_list = dom::find_next(&actions, LIST)
        .ok_or_else(|| Error::MissingElement(format!("<{LIST}> of actions for \"{label}\"")))?;
    for item in actions_list.children() {
        if !dom::is_tag(&item, LIST_ITEM) {
            continue;
        }
        let text = item.text();
        if is_valid_text(&text) {
            section.push(Block::Bullet(normalize(&text)));
        }
    }

    tracing::debug!(
        label,
        paras = section.paras().len(),
        bullets = section.bullets().len(),
        "trigger section"
    );
    Ok(section)
}

/// The whole triggers page: banner, introduction, options, then one block
/// per trigger in list order.
pub fn trigger_page(doc: &Document) -> Result<Section> {
    let (list, labels) = trigger_list(doc)?;

    let mut page = Section::new("triggers");
    page.push(Block::Header(PAGE_HEADER.to_string()));
    page.push(Block::Para(INTRODUCTION.to_string()));
    page.push(Block::MultiChoice(labels.clone()));

    for label in &labels {
        page.extend(trigger_section(&list, label)?);
    }
    Ok(page)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn page(body: &str) -> Document {
        parse(&format!("<html><body><article>{body}</article></body></html>"))
    }

    const POLLEN: &str = r#"
        <ul><li>Pollen</li></ul>
        <h2>Pollen</h2>
        <h3>About Pollen</h3>
        <p>Pollen is released by trees.</p>
        <p>-</p>
        <p>x</p>
        <h3>Actions You Can Take</h3>
        <ul><li>Stay indoors on windy days.</li><li>?</li><li>Keep windows shut.</li></ul>
    "#;

    #[test]
    fn trigger_list_reads_first_article_list() {
        let doc = page("<p>intro</p><ul><li> Pollen </li><li>Dust</li></ul><ul><li>Other</li></ul>");
        let (_, labels) = trigger_list(&doc).unwrap();
        assert_eq!(labels, vec!["Pollen", "Dust"]);
    }

    #[test]
    fn trigger_list_requires_article() {
        let doc = parse("<ul><li>Pollen</li></ul>");
        assert!(matches!(trigger_list(&doc), Err(Error::MissingElement(_))));
    }

    #[test]
    fn about_paragraphs_are_filtered() {
        let doc = page(POLLEN);
        let (list, _) = trigger_list(&doc).unwrap();
        let section = trigger_section(&list, "pollen").unwrap();

        assert_eq!(
            section.paras(),
            vec!["About Pollen", "Pollen is released by trees."]
        );
    }

    #[test]
    fn actions_become_title_and_bullets() {
        let doc = page(POLLEN);
        let (list, _) = trigger_list(&doc).unwrap();
        let section = trigger_section(&list, "Pollen").unwrap();

        assert_eq!(section.titles(), vec!["Actions You Can Take"]);
        assert_eq!(
            section.bullets(),
            vec!["Stay indoors on windy days.", "Keep windows shut."]
        );
    }

    #[test]
    fn block_order_is_about_then_actions() {
        let doc = page(POLLEN);
        let (list, _) = trigger_list(&doc).unwrap();
        let section = trigger_section(&list, "Pollen").unwrap();

        assert!(matches!(section.blocks.first(), Some(Block::Para(t)) if t == "About Pollen"));
        let title_at = section
            .blocks
            .iter()
            .position(|b| matches!(b, Block::Title(_)))
            .unwrap();
        assert!(section.blocks[..title_at].iter().all(|b| matches!(b, Block::Para(_))));
        assert!(section.blocks[title_at + 1..].iter().all(|b| matches!(b, Block::Bullet(_))));
    }

    #[test]
    fn scan_stops_at_non_heading_tag_containing_h() {
        let doc = page(
            r#"
            <ul><li>Mold</li></ul>
            <h2>Mold</h2>
            <h3>About Mold</h3>
            <p>Mold grows in damp places.</p>
            <hr>
            <p>Hidden after the rule.</p>
            <h3>Actions You Can Take</h3>
            <ul><li>Fix leaks.</li></ul>
        "#,
        );
        let (list, _) = trigger_list(&doc).unwrap();
        let section = trigger_section(&list, "Mold").unwrap();

        assert_eq!(section.paras(), vec!["About Mold", "Mold grows in damp places."]);
    }

    #[test]
    fn list_items_in_about_are_not_paragraphs() {
        let doc = page(
            r#"
            <ul><li>Smoke</li></ul>
            <h2>Smoke</h2>
            <h3>About Smoke</h3>
            <div><span>Smoke is an irritant.</span><li>Not collected</li></div>
            <h3>Actions You Can Take</h3>
            <ul><li>Do not smoke indoors.</li></ul>
        "#,
        );
        let (list, _) = trigger_list(&doc).unwrap();
        let section = trigger_section(&list, "Smoke").unwrap();

        assert_eq!(section.paras(), vec!["About Smoke", "Smoke is an irritant."]);
    }

    #[test]
    fn action_bullets_come_from_list_after_actions_heading() {
        let doc = page(
            r#"
            <ul><li>Pests</li></ul>
            <h2>Pests</h2>
            <h3>About Pests</h3>
            <p>Cockroach droppings can trigger attacks.</p>
            <h3>Actions You Can Take</h3>
            <p>Try these steps:</p>
            <ul>
                <li>Store food in <a href="/containers">sealed containers</a>.</li>
                <li>Use bait stations.</li>
            </ul>
        "#,
        );
        let (list, _) = trigger_list(&doc).unwrap();
        let section = trigger_section(&list, "Pests").unwrap();

        assert_eq!(
            section.bullets(),
            vec!["Store food in sealed containers.", "Use bait stations."]
        );
    }

    #[test]
    fn missing_trigger_heading_is_an_error() {
        let doc = page(POLLEN);
        let (list, _) = trigger_list(&doc).unwrap();
        let err = trigger_section(&list, "Dust").unwrap_err();
        assert!(matches!(err, Error::MissingElement(ref w) if w.contains("Dust")));
    }

    #[test]
    fn missing_actions_heading_is_an_error() {
        let doc = page(
            r#"
            <ul><li>Dust</li></ul>
            <h2>Dust</h2>
            <h3>About Dust</h3>
            <p>Dust mites live in bedding.</p>
        "#,
        );
        let (list, _) = trigger_list(&doc).unwrap();
        let err = trigger_section(&list, "Dust").unwrap_err();
        assert!(matches!(err, Error::MissingElement(ref w) if w.starts_with("Actions")));
    }

    #[test]
    fn missing_actions_list_is_an_error() {
        let doc = page(
            r#"
            <ul><li>Dust</li></ul>
            <h2>Dust</h2>
            <h3>About Dust</h3>
            <h3>Actions You Can Take</h3>
            <p>Wash bedding.</p>
        "#,
        );
        let (list, _) = trigger_list(&doc).unwrap();
        assert!(trigger_section(&list, "Dust").is_err());
    }

    #[test]
    fn trigger_page_has_one_block_per_trigger_in_order() {
        let doc = page(
            r#"
            <ul><li>Pollen</li><li>Dust</li></ul>
            <h2>Pollen</h2>
            <h3>About Pollen</h3><p>Pollen text.</p>
            <h3>Actions You Can Take</h3><ul><li>Pollen action.</li></ul>
            <h2>Dust</h2>
            <h3>About Dust</h3><p>Dust text.</p>
            <h3>Actions You Can Take</h3><ul><li>Dust action.</li></ul>
        "#,
        );
        let section = trigger_page(&doc).unwrap();

        assert_eq!(section.name, "triggers");
        assert_eq!(section.blocks[0], Block::Header(PAGE_HEADER.to_string()));
        assert_eq!(section.blocks[1], Block::Para(INTRODUCTION.to_string()));
        assert_eq!(
            section.blocks[2],
            Block::MultiChoice(vec!["Pollen".to_string(), "Dust".to_string()])
        );
        assert_eq!(
            section.paras()[1..],
            ["About Pollen", "Pollen text.", "About Dust", "Dust text."]
        );
        assert_eq!(section.bullets(), vec!["Pollen action.", "Dust action."]);
    }
}
