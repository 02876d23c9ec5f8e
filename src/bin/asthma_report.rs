//! Print the asthma triggers and statistics report.
//!
//! Reads the saved EPA and CDC pages, then writes the report page by page,
//! waiting for Enter in between.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use asthma_report::console::DEFAULT_WIDTH;
use asthma_report::{Options, OutputFormat, DEFAULT_CDC_PATH, DEFAULT_EPA_PATH};
use clap::{ArgAction, Parser};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "asthma_report",
    about = "Asthma triggers (EPA) and statistics (CDC) from saved pages"
)]
struct Cli {
    /// Saved copy of the EPA asthma triggers page
    #[arg(long, env = "ASTHMA_EPA_PATH", default_value = DEFAULT_EPA_PATH)]
    epa_path: PathBuf,

    /// Saved copy of the CDC asthma FastStats page
    #[arg(long, env = "ASTHMA_CDC_PATH", default_value = DEFAULT_CDC_PATH)]
    cdc_path: PathBuf,

    /// Wrap width of the text report
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Do not wait for Enter between pages
    #[arg(long)]
    no_pause: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log lookups to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> Options {
        Options {
            epa_path: self.epa_path,
            cdc_path: self.cdc_path,
            width: self.width,
            pause: !self.no_pause,
            format: self.format,
            ..Options::default()
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_timer(ChronoLocal::new("%H:%M".to_string()))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.into_options();
    match asthma_report::run(&options, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
