//! Page extractors.
//!
//! # Module Structure
//!
//! - `tags`: Tag constants and the tag-name tests behind section boundaries
//! - `prologue`: Welcome banner and EPA introduction
//! - `triggers`: EPA asthma triggers, one About/Actions block per trigger
//! - `faststats`: CDC statistics cards
//!
//! Every extractor reads an already-parsed, read-only tree and returns a
//! [`Section`]; none of them writes output.

pub mod faststats;
pub mod prologue;
pub mod tags;
pub mod triggers;

use chrono::NaiveDateTime;

use crate::dom::Document;
use crate::error::Result;
use crate::report::{Report, Section};

pub use faststats::faststats_page;
pub use prologue::prologue;
pub use triggers::{trigger_page, trigger_section};

/// Build the full report from the EPA and CDC documents.
///
/// Sections come in display order: prologue, triggers, statistics. The
/// first layout mismatch aborts the build.
pub fn build_report(epa: &Document, cdc: &Document, now: &NaiveDateTime) -> Result<Report> {
    let sections: Vec<Section> = vec![prologue(epa, now)?, trigger_page(epa)?, faststats_page(cdc)?];
    Ok(Report { sections })
}
