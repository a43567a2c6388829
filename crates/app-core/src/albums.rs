//! Album catalog entries from `albums.json`

use crate::dates::Dated;
use serde::{Deserialize, Serialize};

/// A released album
///
/// Missing fields read as empty strings, so one sparse entry does not fail
/// the whole catalog. An empty date sorts last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Album {
    /// Title
    pub title: String,
    /// Release date as written in the data file
    pub date: String,
    /// Where the album card links to
    pub url: String,
    /// Cover art URL
    pub image: String,
}

impl Album {
    /// Create a new album entry
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        url: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            url: url.into(),
            image: image.into(),
        }
    }
}

impl Dated for Album {
    fn date_str(&self) -> &str {
        &self.date
    }
}
