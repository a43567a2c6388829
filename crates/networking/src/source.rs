//! Where data files come from
//!
//! A data file is either a local path or an `http(s)` URL. [`JsonSource`] is
//! the seam between loading and fetching; [`Fetcher`] is the real
//! implementation backed by `tokio::fs` and `reqwest`.

use crate::{LoadError, Result};
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// Location of a data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local file
    File(PathBuf),
    /// Remote file fetched over HTTP
    Http(String),
}

impl DataSource {
    /// Interpret a configured location
    ///
    /// `http://` and `https://` locations are fetched over the network,
    /// everything else is a file path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Http(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Http(url) => f.write_str(url),
        }
    }
}

impl From<&str> for DataSource {
    fn from(location: &str) -> Self {
        DataSource::parse(location)
    }
}

/// Fetches the raw text of a data file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetch the file's contents
    async fn fetch_text(&self, source: &DataSource) -> Result<String>;
}

/// Fetches from disk and over HTTP
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher around an existing HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch_http(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { url: url.to_string(), status: status.as_u16() });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl JsonSource for Fetcher {
    async fn fetch_text(&self, source: &DataSource) -> Result<String> {
        tracing::debug!(%source, "fetching data file");
        match source {
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io { path: path.clone(), source }),
            DataSource::Http(url) => self.fetch_http(url).await,
        }
    }
}
