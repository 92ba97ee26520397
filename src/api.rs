// API client module: a small blocking HTTP client that posts one file to
// the drop server and returns the token the server hands back.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;

use crate::config::Config;
use crate::error::{Result, UploadError};

/// `User-Agent` sent with every upload.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Holds a reqwest blocking client and the exact URL uploads are POSTed to.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    url: String,
}

/// Everything that goes into the multipart body.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub content: Vec<u8>,
    pub auto_delete: bool,
    pub download: bool,
}

impl UploadRequest {
    /// Read the configured source to completion and capture the flags.
    pub fn from_config(config: &Config) -> Result<Self> {
        let content = config.source.read_all()?;
        Ok(UploadRequest {
            file_name: config.source.announced_name(),
            content,
            auto_delete: config.auto_delete,
            download: config.download,
        })
    }
}

/// Build the multipart body. Flag fields come first and are left out
/// entirely when unset; the `file` part is last.
pub fn build_form(req: UploadRequest) -> Result<multipart::Form> {
    let mut form = multipart::Form::new();
    if req.auto_delete {
        form = form.text("auto_delete", "1");
    }
    if req.download {
        form = form.text("header_download", "1");
    }
    let part = multipart::Part::bytes(req.content)
        .file_name(req.file_name)
        .mime_str("application/octet-stream")
        .map_err(UploadError::Body)?;
    Ok(form.part("file", part))
}

impl ApiClient {
    /// Create a client for `url`. The blocking client's default request
    /// timeout is switched off; the upload runs until the server answers
    /// or the transport fails.
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(UploadError::Transport)?;
        Ok(ApiClient {
            client,
            url: url.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        ApiClient::new(&config.url)
    }

    /// POST the upload and return the trimmed token from the response body.
    pub fn upload(&self, req: UploadRequest) -> Result<String> {
        debug!(
            "posting {} ({} bytes, auto_delete={}, download={}) to {}",
            req.file_name,
            req.content.len(),
            req.auto_delete,
            req.download,
            self.url
        );
        let form = build_form(req)?;

        let res = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .map_err(UploadError::Transport)?;
        let status = res.status();
        debug!("server answered {}", status);
        if status != StatusCode::OK {
            return Err(UploadError::Status(status));
        }

        let body = res.text().map_err(UploadError::Response)?;
        let token = body.trim().to_string();
        info!("received token {}", token);
        Ok(token)
    }
}

/// Run one upload for `config` and return the retrieval URL.
pub fn upload(config: &Config) -> Result<String> {
    let req = UploadRequest::from_config(config)?;
    let api = ApiClient::from_config(config)?;
    let token = api.upload(req)?;
    Ok(config.retrieval_url(&token))
}
