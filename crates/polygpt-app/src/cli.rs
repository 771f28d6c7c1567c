use std::path::PathBuf;

use clap::Parser;

/// PolyGPT: one prompt, four chat models side by side.
#[derive(Parser, Debug)]
#[command(name = "polygpt", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Selector file path override.
    #[arg(long)]
    pub selectors: Option<PathBuf>,

    /// Log level or filter directive (e.g. `debug`, `polygpt_sync=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable webview devtools.
    #[arg(long)]
    pub devtools: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
