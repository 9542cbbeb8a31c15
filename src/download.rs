//! Artwork download
//!
//! Fetches artwork from the TV database banner host and stores it next to
//! the media. Downloads land in a temporary sibling first and are renamed
//! into place once complete, so an interrupted transfer never leaves a
//! truncated image behind.

use crate::config::DEFAULT_BANNER_BASE_URL;
use crate::layout::banner_url;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while downloading an asset
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The request could not be sent or the body could not be read
    #[error("Failed to download {url}: {source}")]
    RequestFailed {
        url: String,
        source: reqwest::Error,
    },

    /// The banner host answered with a non-success status
    #[error("HTTP {status} while downloading {url}")]
    HttpStatus { url: String, status: u16 },

    /// The payload is not a recognised image format
    #[error("Downloaded data from {url} is not an image")]
    NotAnImage { url: String },

    /// Failed to write the image to disk
    #[error("Failed to write asset {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Stores a remote asset at a local destination.
pub trait AssetDownloader {
    /// Downloads the asset identified by `reference` to `destination`,
    /// replacing any existing file.
    fn download(&self, reference: &str, destination: &Path) -> Result<(), DownloadError>;
}

/// Downloads artwork over HTTP from the banner host.
pub struct HttpBannerDownloader {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpBannerDownloader {
    /// Creates a downloader for the default TV database banner host.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BANNER_BASE_URL)
    }

    /// Creates a downloader resolving references against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, reference: &str) -> String {
        banner_url(&self.base_url, reference)
    }
}

impl Default for HttpBannerDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetDownloader for HttpBannerDownloader {
    fn download(&self, reference: &str, destination: &Path) -> Result<(), DownloadError> {
        let url = self.url_for(reference);
        debug!(url = %url, path = %destination.display(), "Downloading asset");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DownloadError::RequestFailed {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(DownloadError::HttpStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|e| DownloadError::RequestFailed {
            url: url.clone(),
            source: e,
        })?;

        if !infer::is_image(&bytes) {
            return Err(DownloadError::NotAnImage { url });
        }

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DownloadError::WriteFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = destination.with_extension("tmp");
        fs::write(&temp_path, &bytes).map_err(|e| DownloadError::WriteFailed {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, destination).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DownloadError::WriteFailed {
                path: destination.to_path_buf(),
                source: e,
            }
        })?;

        debug!(path = %destination.display(), size = bytes.len(), "Asset stored");

        Ok(())
    }
}
