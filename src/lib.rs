//! bandsite
//!
//! Umbrella crate for the band site: the content model and embed resolver
//! (`app_core`), page markup (`app_ui`) and data loading (`networking`).
//!
//! ```rust
//! use bandsite::app_core::embeds::{classify, EmbedType};
//!
//! let embed = classify("https://youtu.be/dQw4w9WgXcQ");
//! assert_eq!(embed.embed_type(), EmbedType::YouTube);
//! ```

pub use app_core;
pub use app_ui;
pub use networking;

pub use app_core::{classify, Album, BlogPost, EmbedType, ExternalEmbed};
pub use networking::{ContentLoader, DataSource, LoadError};
