// Error taxonomy for the uploader. Every variant is fatal; `exit_code`
// maps the kind to the process exit status used by the binary.

use std::path::PathBuf;

use reqwest::StatusCode;

/// Exit status for a missing URL scheme (sysexits EX_CONFIG).
pub const EXIT_CONFIG: u8 = 78;
/// Exit status for a source that cannot be opened (EX_NOINPUT).
pub const EXIT_NOINPUT: u8 = 66;
/// Exit status for local or response read failures (EX_IOERR).
pub const EXIT_IOERR: u8 = 74;
/// Exit status for transport failures (EX_UNAVAILABLE).
pub const EXIT_UNAVAILABLE: u8 = 69;
/// Exit status for an unexpected HTTP status (EX_PROTOCOL).
pub const EXIT_PROTOCOL: u8 = 76;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("URL should contain a scheme: {url}")]
    MissingScheme { url: String },

    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build request")]
    Body(#[source] reqwest::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected server status: {0}")]
    Status(StatusCode),

    #[error("failed to read response body")]
    Response(#[source] reqwest::Error),
}

impl UploadError {
    pub fn exit_code(&self) -> u8 {
        match self {
            UploadError::MissingScheme { .. } => EXIT_CONFIG,
            UploadError::Open { .. } => EXIT_NOINPUT,
            UploadError::Read { .. } | UploadError::Response(_) => EXIT_IOERR,
            UploadError::Body(_) | UploadError::Transport(_) => EXIT_UNAVAILABLE,
            UploadError::Status(_) => EXIT_PROTOCOL,
        }
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;
