//! Configuration options for a report run.
//!
//! The `Options` struct says where the saved pages live, which URLs they were
//! saved from, and how the report is written.

use std::path::PathBuf;

use crate::console::DEFAULT_WIDTH;

/// Default location of the saved EPA triggers page.
pub const DEFAULT_EPA_PATH: &str = "data/asthma_triggers_epa.html";

/// Default location of the saved CDC statistics page.
pub const DEFAULT_CDC_PATH: &str = "data/faststats_asthma_cdc.html";

/// Source URL of the EPA triggers page.
pub const EPA_URL: &str = "https://www.epa.gov/asthma/asthma-triggers-gain-control";

/// Source URL of the CDC statistics page.
pub const CDC_URL: &str = "https://www.cdc.gov/nchs/fastats/asthma.htm";

/// How the report is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Console presenter, pausing between pages.
    #[default]
    Text,
    /// The whole report as pretty-printed JSON, no pauses.
    Json,
}

/// Configuration options for a report run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use asthma_report::{Options, OutputFormat};
///
/// let options = Options {
///     pause: false,
///     format: OutputFormat::Json,
///     ..Options::default()
/// };
/// assert_eq!(options.width, 80);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Saved copy of the EPA triggers page.
    ///
    /// Default: [`DEFAULT_EPA_PATH`]
    pub epa_path: PathBuf,

    /// Saved copy of the CDC statistics page.
    ///
    /// Default: [`DEFAULT_CDC_PATH`]
    pub cdc_path: PathBuf,

    /// URL the EPA page was saved from. Only used for display.
    ///
    /// Default: [`EPA_URL`]
    pub epa_url: String,

    /// URL the CDC page was saved from. Only used for display.
    ///
    /// Default: [`CDC_URL`]
    pub cdc_url: String,

    /// Wrap width of the text report in columns.
    ///
    /// Default: `80`
    pub width: usize,

    /// Wait for Enter between report pages (text output only).
    ///
    /// Default: `true`
    pub pause: bool,

    /// Output format.
    ///
    /// Default: [`OutputFormat::Text`]
    pub format: OutputFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            epa_path: PathBuf::from(DEFAULT_EPA_PATH),
            cdc_path: PathBuf::from(DEFAULT_CDC_PATH),
            epa_url: EPA_URL.to_string(),
            cdc_url: CDC_URL.to_string(),
            width: DEFAULT_WIDTH,
            pause: true,
            format: OutputFormat::Text,
        }
    }
}
