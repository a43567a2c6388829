//! Loading the site's JSON data files

use crate::source::{DataSource, Fetcher, JsonSource};
use crate::{LoadError, Result};
use app_core::albums::Album;
use app_core::posts::BlogPost;
use serde::de::DeserializeOwned;

/// Loads posts and albums through a [`JsonSource`]
#[derive(Debug, Clone, Default)]
pub struct ContentLoader<S = Fetcher> {
    source: S,
}

impl ContentLoader<Fetcher> {
    /// Create a loader that reads from disk and HTTP
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: JsonSource> ContentLoader<S> {
    /// Create a loader around a specific source
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Fetch and parse a JSON data file
    pub async fn load_json<T: DeserializeOwned>(&self, location: &DataSource) -> Result<T> {
        let text = self.source.fetch_text(location).await?;
        serde_json::from_str(&text)
            .map_err(|source| LoadError::Json { location: location.to_string(), source })
    }

    /// Load the blog posts, in file order
    pub async fn load_posts(&self, location: &DataSource) -> Result<Vec<BlogPost>> {
        self.load_json(location)
            .await
            .inspect(|posts: &Vec<BlogPost>| {
                tracing::debug!(%location, count = posts.len(), "loaded blog posts")
            })
            .inspect_err(|e| tracing::error!(%location, error = %e, "Error loading blog posts"))
    }

    /// Load the albums, in file order
    pub async fn load_albums(&self, location: &DataSource) -> Result<Vec<Album>> {
        self.load_json(location)
            .await
            .inspect(|albums: &Vec<Album>| {
                tracing::debug!(%location, count = albums.len(), "loaded albums")
            })
            .inspect_err(|e| tracing::error!(%location, error = %e, "Error loading albums"))
    }
}
