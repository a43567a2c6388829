//! Blog posts
//!
//! Posts come from `blog-posts.json`, an array of objects with an id, title,
//! date, author, HTML content, an optional cover image and an optional list
//! of embed URLs.

use crate::dates::Dated;
use crate::embeds::{EmbedDetector, ResolvedEmbed};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Post identifier
///
/// Data files use numeric ids, but string ids are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    /// Numeric id
    Number(i64),
    /// String id
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        PostId::Number(value)
    }
}

impl From<i32> for PostId {
    fn from(value: i32) -> Self {
        PostId::Number(i64::from(value))
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId::Text(value.to_string())
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post id
    pub id: PostId,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Publication date as written in the data file
    #[serde(default)]
    pub date: String,
    /// Author name
    #[serde(default)]
    pub author: String,
    /// Body, as site-authored HTML
    #[serde(default)]
    pub content: String,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Embed URLs in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<String>>,
}

impl BlogPost {
    /// Create a post with no author, content, image or embeds
    pub fn new(id: impl Into<PostId>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            author: String::new(),
            content: String::new(),
            image: None,
            embeds: None,
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the cover image
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the embed URLs
    pub fn with_embeds<I, S>(mut self, embeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.embeds = Some(embeds.into_iter().map(Into::into).collect());
        self
    }

    /// Cover image URL, if one is set and not blank
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|image| !image.trim().is_empty())
    }

    /// Check if the post has a cover image
    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }

    /// Embed URLs, empty when none are set
    pub fn embeds(&self) -> &[String] {
        self.embeds.as_deref().unwrap_or(&[])
    }

    /// Check if the post has any embeds
    pub fn has_embeds(&self) -> bool {
        !self.embeds().is_empty()
    }

    /// Classify every embed URL, in order
    pub fn resolve_embeds(&self) -> Vec<ResolvedEmbed> {
        EmbedDetector::classify_all(self.embeds())
    }

    /// Discussion term used by the comment widget
    pub fn comment_term(&self) -> String {
        format!("post-{}-{}", self.id, self.title)
    }
}

impl Dated for BlogPost {
    fn date_str(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{latest, sort_newest_first};
    use crate::embeds::EmbedType;

    #[test]
    fn test_deserialize_full_post() {
        let json = r#"{
            "id": 3,
            "title": "New single out",
            "date": "2025-10-05",
            "author": "Matt",
            "content": "Listen <b>now</b>",
            "image": "img/single.jpg",
            "embeds": ["https://youtu.be/dQw4w9WgXcQ"]
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId::Number(3));
        assert_eq!(post.author, "Matt");
        assert_eq!(post.image(), Some("img/single.jpg"));
        assert_eq!(post.embeds().len(), 1);
        assert_eq!(post.display_date(), "October 5, 2025");
    }

    #[test]
    fn test_deserialize_minimal_post() {
        let json = r#"{"id": "intro", "title": "Hello", "date": "2024-01-01", "embeds": null}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId::Text("intro".to_string()));
        assert!(!post.has_image());
        assert!(!post.has_embeds());
        assert!(post.embeds().is_empty());
    }

    #[test]
    fn test_post_without_title_or_date_still_loads() {
        let json = r#"[
            {"id": 1, "content": "draft"},
            {"id": 2, "title": "Tour", "date": "2025-03-01"}
        ]"#;
        let posts: Vec<BlogPost> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "");
        assert_eq!(posts[0].display_date(), "");
        assert_eq!(latest(&posts).unwrap().id, PostId::Number(2));
    }

    #[test]
    fn test_blank_image_is_no_image() {
        let post = BlogPost::new(1, "t", "2024-01-01").with_image("   ");
        assert!(!post.has_image());
        assert_eq!(post.image(), None);
    }

    #[test]
    fn test_resolve_embeds_in_order() {
        let post = BlogPost::new(1, "t", "2024-01-01").with_embeds([
            "https://open.spotify.com/track/abc123",
            "https://example.com",
        ]);
        let resolved = post.resolve_embeds();
        assert_eq!(resolved[0].embed.embed_type(), EmbedType::Spotify);
        assert_eq!(resolved[1].embed.embed_type(), EmbedType::Link);
    }

    #[test]
    fn test_comment_term() {
        let post = BlogPost::new(7, "Tour dates", "2024-01-01");
        assert_eq!(post.comment_term(), "post-7-Tour dates");
    }

    #[test]
    fn test_posts_sort_newest_first() {
        let mut posts = vec![
            BlogPost::new(1, "old", "2023-02-01"),
            BlogPost::new(2, "new", "2025-02-01"),
            BlogPost::new(3, "mid", "2024-02-01"),
        ];
        assert_eq!(latest(&posts).unwrap().title, "new");

        sort_newest_first(&mut posts);
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_post_id_display() {
        assert_eq!(PostId::from(12).to_string(), "12");
        assert_eq!(PostId::from("abc").to_string(), "abc");
    }
}
