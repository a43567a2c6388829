//! Post and album markup
//!
//! Builds the HTML fragments that go into the page containers:
//!
//! - [`PostCard`] - a blog post card for the news feed or the homepage
//! - [`album_card`] / [`album_link`] - album grid entries and the latest-album link
//! - [`news_feed`], [`latest_news`], [`album_grid`], [`latest_album`] - whole containers
//!
//! Titles, authors and URLs are escaped. Post content is site-authored HTML
//! and is inserted as written.

use crate::embeds::{render_embed_list, EmbedRenderer, HtmlEmbedRenderer};
use crate::html::escape;
use crate::navigation::{is_news_page, NEWS_PAGE_PATH};
use app_core::albums::Album;
use app_core::dates::{latest, sort_newest_first, Dated};
use app_core::posts::BlogPost;

/// Fallback for the news feed container
pub const NEWS_UNAVAILABLE: &str = "Unable to load news posts at this time.";

/// Fallback for the homepage latest-news container
pub const LATEST_NEWS_UNAVAILABLE: &str = "Unable to load latest news.";

/// Fallback for the album grid container
pub const ALBUMS_UNAVAILABLE: &str = "Unable to load albums at this time.";

/// Fallback for the homepage latest-album container
pub const LATEST_ALBUM_UNAVAILABLE: &str = "Unable to load latest album.";

// =============================================================================
// Post Cards
// =============================================================================

/// What clicking a post card does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostClickAction {
    /// Open the post in the modal (news page)
    OpenModal,
    /// Go to another page (homepage cards link to the news page)
    Navigate(String),
}

impl PostClickAction {
    /// Click behaviour for cards shown on the given page
    pub fn for_page(path: &str) -> Self {
        if is_news_page(path) {
            PostClickAction::OpenModal
        } else {
            PostClickAction::Navigate(NEWS_PAGE_PATH.to_string())
        }
    }

    /// Value of the card's `data-click` attribute
    pub fn as_attr(&self) -> &str {
        match self {
            PostClickAction::OpenModal => "modal",
            PostClickAction::Navigate(path) => path,
        }
    }

    /// Resolve a click on the card
    ///
    /// Clicks that land inside the embeds block belong to the embedded
    /// players and do nothing.
    pub fn on_click(&self, inside_embeds: bool) -> Option<&PostClickAction> {
        if inside_embeds {
            None
        } else {
            Some(self)
        }
    }
}

/// Where a post's media goes
///
/// With a cover image, the image sits above the content and the embeds
/// follow the content. Without one, the embeds take the image's place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMedia {
    /// Markup above the content
    pub top: String,
    /// Markup after the content
    pub after_content: String,
}

impl PostMedia {
    /// Lay out a post's image and embeds
    pub fn for_post<R>(post: &BlogPost, image_html: impl FnOnce(&str) -> String, renderer: &R) -> Self
    where
        R: EmbedRenderer + ?Sized,
    {
        let embeds = render_embed_list(renderer, &post.resolve_embeds());
        match post.image() {
            Some(image) => Self { top: image_html(image), after_content: embeds },
            None => Self { top: embeds, after_content: String::new() },
        }
    }
}

/// A blog post card
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    post: &'a BlogPost,
    click: PostClickAction,
}

impl<'a> PostCard<'a> {
    /// Create a card that opens the post modal when clicked
    pub fn new(post: &'a BlogPost) -> Self {
        Self { post, click: PostClickAction::OpenModal }
    }

    /// Set the click behaviour
    pub fn with_click_action(mut self, click: PostClickAction) -> Self {
        self.click = click;
        self
    }

    /// Click behaviour of this card
    pub fn click_action(&self) -> &PostClickAction {
        &self.click
    }

    /// Render with the default HTML embed renderer
    pub fn render(&self) -> String {
        self.render_with(&HtmlEmbedRenderer)
    }

    /// Render with a specific embed renderer
    pub fn render_with<R: EmbedRenderer + ?Sized>(&self, renderer: &R) -> String {
        let post = self.post;
        let title = escape(&post.title);
        let media = PostMedia::for_post(
            post,
            |image| {
                format!(
                    r#"<div class="blog-post-image"><img src="{}" alt="{}"></div>"#,
                    escape(image),
                    title
                )
            },
            renderer,
        );

        format!(
            concat!(
                r#"<article class="blog-post" data-click="{click}">"#,
                r#"<div class="blog-post-header">"#,
                r#"<h3 class="blog-post-title">{title}</h3>"#,
                r#"<p class="blog-post-date">{date} • by {author}</p>"#,
                r#"</div>"#,
                "{top}",
                r#"<div class="blog-post-content"><p>{content}</p></div>"#,
                "{after}",
                r#"<div class="blog-post-stats" data-post-id="{id}"></div>"#,
                r#"</article>"#
            ),
            click = escape(self.click.as_attr()),
            title = title,
            date = escape(&post.display_date()),
            author = escape(&post.author),
            top = media.top,
            content = post.content,
            after = media.after_content,
            id = escape(&post.id.to_string()),
        )
    }
}

// =============================================================================
// Albums
// =============================================================================

/// Album link with cover art and title
pub fn album_link(album: &Album) -> String {
    let title = escape(&album.title);
    format!(
        r#"<a href="{}" class="album-link"><img class="img-fluid album-img" src="{}" alt="{}"><h3>{}</h3></a>"#,
        escape(&album.url),
        escape(&album.image),
        title,
        title
    )
}

/// Album grid entry
pub fn album_card(album: &Album) -> String {
    format!(r#"<div class="col-album text-center">{}</div>"#, album_link(album))
}

// =============================================================================
// Containers
// =============================================================================

fn newest_first<T: Dated + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sort_newest_first(&mut sorted);
    sorted
}

/// Every post, newest first, as cards for the given page
pub fn news_feed(posts: &[BlogPost], page_path: &str) -> String {
    let click = PostClickAction::for_page(page_path);
    newest_first(posts)
        .iter()
        .map(|post| PostCard::new(post).with_click_action(click.clone()).render())
        .collect()
}

/// The newest post as a card for the given page; empty when there are no posts
pub fn latest_news(posts: &[BlogPost], page_path: &str) -> String {
    latest(posts)
        .map(|post| {
            PostCard::new(post)
                .with_click_action(PostClickAction::for_page(page_path))
                .render()
        })
        .unwrap_or_default()
}

/// Every album, newest first, as grid entries
pub fn album_grid(albums: &[Album]) -> String {
    newest_first(albums).iter().map(album_card).collect()
}

/// Link to the newest album; empty when there are no albums
pub fn latest_album(albums: &[Album]) -> String {
    latest(albums).map(album_link).unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================
