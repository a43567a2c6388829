//! The `render` command
//!
//! Loads both data files and renders every page container to its own HTML
//! fragment. A data file that fails to load gets the fixed fallback message
//! in each container that depends on it; the rest of the site still renders.

use crate::config::SiteConfig;
use anyhow::Context;
use app_core::posts::PostId;
use app_ui::components::{
    album_grid, latest_album, latest_news, news_feed, ALBUMS_UNAVAILABLE,
    LATEST_ALBUM_UNAVAILABLE, LATEST_NEWS_UNAVAILABLE, NEWS_UNAVAILABLE,
};
use app_ui::html::fallback_message;
use app_ui::modal::ModalView;
use app_ui::navigation::NEWS_PAGE_PATH;
use networking::{ContentLoader, DataSource, JsonSource};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Path of the homepage
const HOME_PAGE_PATH: &str = "/";

/// A rendered container, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// File path relative to the output directory
    pub path: PathBuf,
    /// Markup
    pub html: String,
}

impl Fragment {
    fn new(path: impl Into<PathBuf>, html: String) -> Self {
        Self { path: path.into(), html }
    }
}

/// Anything outside `[A-Za-z0-9_-]` becomes `-` so string ids cannot escape
/// the `posts/` directory.
fn fragment_stem(id: &PostId) -> String {
    id.to_string()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect()
}

/// Hands out post fragment names, never the same one twice
///
/// Distinct ids can sanitize to the same name (`1` and `"1"`, `"a/b"` and
/// `"a-b"`). Later posts get `-2`, `-3`, ... appended.
#[derive(Debug, Default)]
pub struct FragmentNames {
    used: HashSet<String>,
}

impl FragmentNames {
    /// Create an empty set of names
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a file name for a post
    pub fn assign(&mut self, id: &PostId) -> String {
        let stem = fragment_stem(id);
        let mut name = format!("{}.html", stem);
        let mut n = 2;
        while self.used.contains(&name) {
            name = format!("{}-{}.html", stem, n);
            n += 1;
        }
        if n > 2 {
            tracing::warn!(%id, file = %name, "post fragment name already taken, using a suffix");
        }
        self.used.insert(name.clone());
        name
    }
}

/// Load the data files and render every fragment
pub async fn render_site<S: JsonSource>(
    loader: &ContentLoader<S>,
    config: &SiteConfig,
) -> Vec<Fragment> {
    let posts_source = DataSource::parse(&config.data.posts);
    let albums_source = DataSource::parse(&config.data.albums);

    let (posts, albums) = tokio::join!(
        loader.load_posts(&posts_source),
        loader.load_albums(&albums_source)
    );

    let mut fragments = Vec::new();

    match posts {
        Ok(posts) => {
            fragments.push(Fragment::new("news.html", news_feed(&posts, NEWS_PAGE_PATH)));
            fragments.push(Fragment::new("latest-news.html", latest_news(&posts, HOME_PAGE_PATH)));
            let mut names = FragmentNames::new();
            for post in &posts {
                let path = Path::new("posts").join(names.assign(&post.id));
                let html = ModalView::for_post(post, &config.comments).render();
                fragments.push(Fragment::new(path, html));
            }
        }
        Err(_) => {
            fragments.push(Fragment::new("news.html", fallback_message(NEWS_UNAVAILABLE)));
            fragments.push(Fragment::new(
                "latest-news.html",
                fallback_message(LATEST_NEWS_UNAVAILABLE),
            ));
        }
    }

    match albums {
        Ok(albums) => {
            fragments.push(Fragment::new("albums.html", album_grid(&albums)));
            fragments.push(Fragment::new("latest-album.html", latest_album(&albums)));
        }
        Err(_) => {
            fragments.push(Fragment::new("albums.html", fallback_message(ALBUMS_UNAVAILABLE)));
            fragments.push(Fragment::new(
                "latest-album.html",
                fallback_message(LATEST_ALBUM_UNAVAILABLE),
            ));
        }
    }

    fragments
}

/// Write fragments under the output directory
pub async fn write_fragments(out_dir: &Path, fragments: &[Fragment]) -> anyhow::Result<()> {
    for fragment in fragments {
        let path = out_dir.join(&fragment.path);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        tokio::fs::write(&path, &fragment.html)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote fragment");
    }
    Ok(())
}
