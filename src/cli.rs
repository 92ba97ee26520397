//! Command-line grammar for darc.

use clap::{ArgAction, Parser};

pub const DEFAULT_URL: &str = "https://dead.archi/";

/// Upload a file (or standard input) and print its retrieval URL.
#[derive(Parser, Debug)]
#[command(name = "darc", version, disable_version_flag = true)]
pub struct Cli {
    /// File to upload. Reads standard input when absent or "-".
    #[arg(value_name = "filename")]
    pub filename: Option<String>,

    /// Upload file to specified server.
    #[arg(short, long, value_name = "url", default_value = DEFAULT_URL)]
    pub url: String,

    /// Automatically delete after downloading.
    #[arg(short = 'd', long)]
    pub auto_delete: bool,

    /// Ask the server to send headers that force a download.
    #[arg(short = 'l', long)]
    pub download: bool,

    /// Show version.
    // Only registers a long-only `--version`; clap prints and exits, the
    // value is never read.
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}
