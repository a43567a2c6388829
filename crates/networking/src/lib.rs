//! Data fetching for bandsite
//!
//! This crate fetches the site's JSON data files (blog posts, albums) from
//! disk or over HTTP and parses them into the `app-core` content model.
//!
//! Each fetch is a single attempt: there is no retry and no timeout. Callers
//! decide what to show when a load fails.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod source;

pub use loader::ContentLoader;
pub use source::{DataSource, Fetcher, JsonSource};

use std::path::PathBuf;

/// Result type for data loading
pub type Result<T> = std::result::Result<T, LoadError>;

/// Error types for data loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading a local file failed
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error ({status}) fetching {url}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The data file is not the expected JSON
    #[error("Invalid JSON in {location}: {source}")]
    Json {
        /// Where the data came from
        location: String,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },
}
