//! Source page loading.
//!
//! Both pages are read from saved copies on disk. The source URL is kept only
//! to label the page in loading messages.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::console::Console;
use crate::dom::{self, Document};
use crate::encoding::transcode_to_utf8;
use crate::error::{Error, Result};
use crate::url_utils::find_domain;

/// A parsed source page.
pub struct Page {
    /// Short domain label, e.g. `epa`.
    pub domain: String,

    /// Host of the source URL, e.g. `www.epa.gov`.
    pub home: String,

    /// Parsed document tree, read-only after loading.
    pub document: Document,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("domain", &self.domain)
            .field("home", &self.home)
            .finish_non_exhaustive()
    }
}

/// Read and parse a saved page, announcing progress on `console`.
///
/// A missing or unreadable file is fatal for the run.
pub fn load_page<W: Write>(url: &str, path: &Path, console: &mut Console<W>) -> Result<Page> {
    let (domain, home) = find_domain(url)?;

    console.loading(&format!("web scraping from {home}"), '>')?;

    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let html = transcode_to_utf8(&bytes);
    tracing::info!(path = %path.display(), bytes = bytes.len(), %home, "loaded saved page");

    let page = Page {
        domain,
        home,
        document: dom::parse(&html),
    };

    console.loading(&format!("{} data collected", page.domain), '<')?;
    Ok(page)
}
