//! Giscus comment widget
//!
//! Each post gets its own discussion thread, keyed by
//! [`BlogPost::comment_term`]. The widget is loaded by a `<script>` tag whose
//! `data-*` attributes carry the repository and display settings.

use crate::html::escape;
use app_core::posts::BlogPost;
use serde::{Deserialize, Serialize};

/// Giscus client script
pub const GISCUS_CLIENT_URL: &str = "https://giscus.app/client.js";

/// Giscus settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiscusConfig {
    /// GitHub repository (`owner/name`) holding the discussions
    pub repo: String,
    /// Repository node id
    pub repo_id: String,
    /// Discussion category
    pub category: String,
    /// Discussion category node id
    pub category_id: String,
    /// How pages map to discussions
    pub mapping: String,
    /// Strict title matching
    pub strict: bool,
    /// Show reactions on the main post
    pub reactions_enabled: bool,
    /// Emit discussion metadata to the parent page
    pub emit_metadata: bool,
    /// Comment box placement (`top` or `bottom`)
    pub input_position: String,
    /// Widget theme
    pub theme: String,
    /// Widget language
    pub lang: String,
    /// Loading strategy
    pub loading: String,
}

impl Default for GiscusConfig {
    fn default() -> Self {
        Self {
            repo: "OldBeardMan/mattnet".to_string(),
            repo_id: "R_kgDOQPnOgw".to_string(),
            category: "Announcements".to_string(),
            category_id: "DIC_kwDOQPnOg84CzS2L".to_string(),
            mapping: "specific".to_string(),
            strict: false,
            reactions_enabled: true,
            emit_metadata: false,
            input_position: "top".to_string(),
            theme: "dark".to_string(),
            lang: "en".to_string(),
            loading: "lazy".to_string(),
        }
    }
}

fn flag(value: bool) -> String {
    let flag = if value { "1" } else { "0" };
    flag.to_string()
}

impl GiscusConfig {
    /// Script attributes for a discussion term, in document order
    pub fn attributes(&self, term: &str) -> Vec<(&'static str, String)> {
        vec![
            ("data-repo", self.repo.clone()),
            ("data-repo-id", self.repo_id.clone()),
            ("data-category", self.category.clone()),
            ("data-category-id", self.category_id.clone()),
            ("data-mapping", self.mapping.clone()),
            ("data-term", term.to_string()),
            ("data-strict", flag(self.strict)),
            ("data-reactions-enabled", flag(self.reactions_enabled)),
            ("data-emit-metadata", flag(self.emit_metadata)),
            ("data-input-position", self.input_position.clone()),
            ("data-theme", self.theme.clone()),
            ("data-lang", self.lang.clone()),
            ("data-loading", self.loading.clone()),
            ("crossorigin", "anonymous".to_string()),
        ]
    }

    /// Widget script tag for a post
    pub fn script_tag(&self, post: &BlogPost) -> String {
        let attrs: String = self
            .attributes(&post.comment_term())
            .into_iter()
            .map(|(name, value)| format!(r#" {}="{}""#, name, escape(&value)))
            .collect();
        format!(r#"<script src="{}"{} async></script>"#, GISCUS_CLIENT_URL, attrs)
    }
}
