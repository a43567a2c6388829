//! Page markup for bandsite
//!
//! This crate turns the content model from `app-core` into the HTML
//! fragments the site pages insert into their containers, and models the
//! page chrome that surrounds them.
//!
//! # Modules
//!
//! - [`embeds`] - Markup for classified embeds, behind the [`embeds::EmbedRenderer`] trait
//! - [`components`] - Post cards, album cards and whole page containers
//! - [`modal`] - Post detail modal state and contents
//! - [`comments`] - Giscus comment widget settings
//! - [`navigation`] - Navbar, active links, scrollspy and page paths
//! - [`html`] - Escaping and fallback messages
//!
//! # Example
//!
//! ```rust
//! use app_core::posts::BlogPost;
//! use app_ui::components::PostCard;
//!
//! let post = BlogPost::new(1, "New single", "2025-10-05")
//!     .with_author("Matt")
//!     .with_embeds(["https://youtu.be/dQw4w9WgXcQ"]);
//!
//! let html = PostCard::new(&post).render();
//! assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comments;
pub mod components;
pub mod embeds;
pub mod html;
pub mod modal;
pub mod navigation;

// Re-export commonly used types
pub use comments::GiscusConfig;
pub use components::{
    album_card, album_grid, album_link, latest_album, latest_news, news_feed, PostCard,
    PostClickAction, PostMedia, ALBUMS_UNAVAILABLE, LATEST_ALBUM_UNAVAILABLE,
    LATEST_NEWS_UNAVAILABLE, NEWS_UNAVAILABLE,
};
pub use embeds::{render_embeds, EmbedFragment, EmbedRenderer, HtmlEmbedRenderer};
pub use modal::{CloseTrigger, ModalState, ModalView, PostModal};
pub use navigation::{NavLink, NavbarState, ScrollSpyConfig, SHARED_COMPONENTS};
