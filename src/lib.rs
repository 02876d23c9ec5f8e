//! # asthma-report
//!
//! Console report about asthma triggers and statistics, scraped from saved
//! copies of the EPA "Asthma Triggers: Gain Control" page and the CDC
//! "FastStats - Asthma" page.
//!
//! ## Quick Start
//!
//! ```rust
//! use asthma_report::{dom, extractor};
//!
//! let epa = dom::parse(r#"<article>
//!     <p>Triggers can make asthma worse.</p>
//!     <ul><li>Pollen</li></ul>
//!     <h2>Pollen</h2>
//!     <h3>About Pollen</h3><p>Pollen comes from plants.</p>
//!     <h3>Actions You Can Take</h3><ul><li>Check the pollen count.</li></ul>
//! </article>"#);
//!
//! let section = extractor::trigger_page(&epa)?;
//! assert_eq!(section.bullets(), vec!["Check the pollen count."]);
//! # Ok::<(), asthma_report::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Load**: read each saved page, decode its charset, parse the DOM
//! - **Extract**: walk the tree in document order, matching tags by name
//!   and headings by text
//! - **Render**: write the report through the console presenter or as JSON

mod error;
mod options;

/// DOM operations adapter over `dom_query`, including document-order walks.
pub mod dom;

/// Character decoding for saved pages.
pub mod encoding;

/// Domain and host labels of source URLs.
pub mod url_utils;

/// Text validity filter and whitespace cleanup.
pub mod text;

/// Subsection lookup by heading text.
pub mod locator;

/// Page loading from disk.
pub mod loader;

/// Report blocks and sections.
pub mod report;

/// Plain-text presenter.
pub mod console;

/// Prologue, triggers and statistics extractors.
pub mod extractor;

use std::io::{self, BufRead, Write};

// Public API - re-exports
pub use console::Console;
pub use error::{Error, Result};
pub use loader::{load_page, Page};
pub use options::{OutputFormat, Options, CDC_URL, DEFAULT_CDC_PATH, DEFAULT_EPA_PATH, EPA_URL};
pub use report::{Block, Report, Section};

/// Load both saved pages and build the report.
///
/// Loading progress is written to `console`.
pub fn load_report<W: Write>(options: &Options, console: &mut Console<W>) -> Result<Report> {
    let epa = load_page(&options.epa_url, &options.epa_path, console)?;
    let cdc = load_page(&options.cdc_url, &options.cdc_path, console)?;

    let now = chrono::Local::now().naive_local();
    extractor::build_report(&epa.document, &cdc.document, &now)
}

/// Run the whole program: load, extract, render.
///
/// In text mode the report goes through the console presenter and, when
/// `options.pause` is set, a line is read from `input` between pages. In
/// JSON mode only the serialized report is written to `out`.
pub fn run<R: BufRead, W: Write>(options: &Options, input: R, mut out: W) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            let mut console = Console::new(out, options.width);
            let report = load_report(options, &mut console)?;
            console.render_report(&report, options.pause.then_some(input))
        }
        OutputFormat::Json => {
            let mut quiet = Console::new(io::sink(), options.width);
            let report = load_report(options, &mut quiet)?;
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
            out.flush()?;
            Ok(())
        }
    }
}
