//! Report model produced by the extractors.
//!
//! Extraction and rendering are kept apart: extractors return [`Section`]s
//! of typed [`Block`]s and the console presenter (or JSON output) decides how
//! they look.

use serde::{Deserialize, Serialize};

/// One rendered element of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    /// Page banner.
    Header(String),
    /// Line under a banner, such as the date and time.
    SubHeader(String),
    /// Body paragraph.
    Para(String),
    /// Title of a group of bullets.
    Title(String),
    /// List item.
    Bullet(String),
    /// Numbered list of options.
    MultiChoice(Vec<String>),
    /// Navigation hint shown before the first pause.
    Homepage,
}

/// A page of the report. The interactive binary pauses between sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Short identifier (`prologue`, `triggers`, `faststats`).
    pub name: String,

    /// Blocks in display order.
    pub blocks: Vec<Block>,
}

impl Section {
    /// Empty section named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    /// Append one block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append every block of `other`, dropping its name.
    pub fn extend(&mut self, other: Section) {
        self.blocks.extend(other.blocks);
    }

    /// Paragraph texts in order.
    #[must_use]
    pub fn paras(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Para(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Title texts in order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Title(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Bullet texts in order.
    #[must_use]
    pub fn bullets(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Bullet(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// The complete report: prologue, EPA triggers, CDC statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}
