//! Core site logic for bandsite
//!
//! This crate contains the content model (blog posts, albums, publication
//! dates) and the embed resolver that classifies media URLs attached to posts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod albums;
pub mod dates;
pub mod embeds;
pub mod posts;

pub use albums::Album;
pub use dates::{latest, sort_newest_first, Dated};
pub use embeds::{classify, EmbedDetector, EmbedType, ExternalEmbed, ResolvedEmbed};
pub use posts::{BlogPost, PostId};
