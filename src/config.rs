// Validated upload configuration built from the command line.

use log::debug;

use crate::cli::Cli;
use crate::error::{Result, UploadError};
use crate::source::Source;

#[derive(Debug, Clone)]
pub struct Config {
    /// URL the upload is POSTed to, exactly as given.
    pub url: String,
    /// `url` with trailing slashes collapsed to one; prefix of the printed URL.
    pub display_url: String,
    pub source: Source,
    pub auto_delete: bool,
    pub download: bool,
}

impl Config {
    /// Check the base URL and resolve the source. Fails before any
    /// network activity if the URL has no scheme.
    pub fn new(url: &str, source: Source, auto_delete: bool, download: bool) -> Result<Self> {
        if !url.contains("://") {
            return Err(UploadError::MissingScheme { url: url.to_string() });
        }
        let display_url = normalize_url(url);
        debug!("upload to {} (display {})", url, display_url);
        Ok(Config {
            url: url.to_string(),
            display_url,
            source,
            auto_delete,
            download,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Config::new(
            &cli.url,
            Source::from_arg(cli.filename.as_deref()),
            cli.auto_delete,
            cli.download,
        )
    }

    /// The shareable link for a server-issued token.
    pub fn retrieval_url(&self, token: &str) -> String {
        format!("{}{}", self.display_url, token)
    }
}

/// Strip every trailing slash and append exactly one.
pub fn normalize_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}
