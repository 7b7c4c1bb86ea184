//! Media host client.
//!
//! Forwards uploaded files to the configured external media host and returns
//! the hosted URL. The host's internals are out of scope: the contract is one
//! multipart POST that answers with a JSON body carrying the public URL.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::MediaConfig;

/// Errors that can occur while forwarding an upload.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The upload request could not be built or sent.
    #[error("upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media host answered with a non-success status.
    #[error("media host returned {0}")]
    Upstream(reqwest::StatusCode),

    /// The media host's response did not carry a URL.
    #[error("media host response missing url")]
    MalformedResponse,
}

/// Client for the external media host.
#[derive(Clone)]
pub struct MediaClient {
    inner: Arc<MediaClientInner>,
}

struct MediaClientInner {
    client: reqwest::Client,
    upload_url: String,
    api_key: secrecy::SecretString,
    folder: String,
}

/// The subset of the media host's response we rely on. Hosts differ on the
/// field name, so accept either.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: Option<String>,
    secure_url: Option<String>,
}

impl MediaClient {
    /// Create a new media host client.
    #[must_use]
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            inner: Arc::new(MediaClientInner {
                client: reqwest::Client::new(),
                upload_url: config.upload_url.clone(),
                api_key: config.api_key.clone(),
                folder: config.folder.clone(),
            }),
        }
    }

    /// Forward a file to the media host and return its hosted URL.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` if the request fails, the host answers with a
    /// non-success status, or the response carries no URL.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, MediaError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(content_type)?;

        let form = Form::new()
            .part("file", part)
            .text("folder", self.inner.folder.clone());

        let response = self
            .inner
            .client
            .post(&self.inner.upload_url)
            .bearer_auth(self.inner.api_key.expose_secret())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::Upstream(status));
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url
            .or(body.url)
            .ok_or(MediaError::MalformedResponse)
    }
}
