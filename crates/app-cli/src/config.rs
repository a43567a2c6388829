//! Site configuration
//!
//! Read from a TOML file. Every field has a default, so an empty or missing
//! file gives a working setup that reads `blog-posts.json` and `albums.json`
//! from the current directory and writes to `dist/`.

use app_ui::comments::GiscusConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "bandsite.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config {}: {}", .path.display(), .source)]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`SiteConfig`]
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Where the data files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Blog posts file (path or http(s) URL)
    pub posts: String,
    /// Albums file (path or http(s) URL)
    pub albums: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { posts: "blog-posts.json".to_string(), albums: "albums.json".to_string() }
    }
}

/// Where rendered fragments go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("dist") }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Data file locations
    pub data: DataConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Comment widget settings
    pub comments: GiscusConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml(&text)
    }

    /// Load the given file, or the default file if it exists, or defaults
    ///
    /// An explicitly given file must exist.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.data.posts, "blog-posts.json");
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.comments.repo, "OldBeardMan/mattnet");
    }

    #[test]
    fn test_partial_config() {
        let config = SiteConfig::from_toml(
            r#"
            [data]
            posts = "https://example.com/blog-posts.json"

            [comments]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.posts, "https://example.com/blog-posts.json");
        assert_eq!(config.data.albums, "albums.json");
        assert_eq!(config.comments.theme, "light");
        assert_eq!(config.comments.lang, "en");
    }

    #[test]
    fn test_invalid_config() {
        let err = SiteConfig::from_toml("[data]\nposts = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndir = \"public\"").unwrap();

        let config = SiteConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("public"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::resolve(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
