//! Page chrome shared by every page
//!
//! This module covers:
//! - Shared components (navbar, social links, footer) loaded into containers
//! - Active nav link selection from the current path
//! - Navbar shrink-on-scroll and responsive collapse
//! - Scrollspy settings
//! - Page-dependent data paths

use crate::html::escape;
use serde::{Deserialize, Serialize};

/// Path of the news page
pub const NEWS_PAGE_PATH: &str = "/news";

// =============================================================================
// Shared Components
// =============================================================================

/// An HTML component fetched into a page container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedComponent {
    /// Id of the element that receives the component
    pub container_id: &'static str,
    /// Path the component markup is fetched from
    pub path: &'static str,
}

/// Components loaded on every page, in load order
pub const SHARED_COMPONENTS: [SharedComponent; 3] = [
    SharedComponent { container_id: "navbar-container", path: "/components/navbar.html" },
    SharedComponent { container_id: "social-container", path: "/components/social.html" },
    SharedComponent { container_id: "footer-container", path: "/components/footer.html" },
];

// =============================================================================
// Nav Links
// =============================================================================

/// A link in the main navbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link text
    pub label: String,
    /// Page path the link points to (`data-page`)
    pub page: String,
}

impl NavLink {
    /// Create a new nav link
    pub fn new(label: impl Into<String>, page: impl Into<String>) -> Self {
        Self { label: label.into(), page: page.into() }
    }

    /// Check if this link is active on the given page
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active_link(&self.page, current_path)
    }

    /// Render the link, marking it active when it matches the current page
    pub fn render(&self, current_path: &str) -> String {
        let class = if self.is_active(current_path) { "nav-link active" } else { "nav-link" };
        let page = escape(&self.page);
        format!(
            r#"<a class="{}" href="{}" data-page="{}">{}</a>"#,
            class,
            page,
            page,
            escape(&self.label)
        )
    }
}

/// Active-link rule
///
/// A link is active when its path equals the current path, when it is the
/// home link (`/`) and the current path is `/` or `/index.html`, or when the
/// current path is nested under a non-root link path.
pub fn is_active_link(link_path: &str, current_path: &str) -> bool {
    link_path == current_path
        || (link_path == "/" && (current_path == "/" || current_path == "/index.html"))
        || (link_path != "/" && current_path.starts_with(link_path))
}

// =============================================================================
// Navbar State
// =============================================================================

/// Navbar behaviour driven by scroll position and clicks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    shrunk: bool,
    expanded: bool,
}

impl NavbarState {
    /// Create a navbar at the top of the page, collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the navbar is in its shrunk style
    pub fn is_shrunk(&self) -> bool {
        self.shrunk
    }

    /// Whether the responsive menu is expanded
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Update for a new vertical scroll offset
    ///
    /// The navbar is shrunk everywhere except at the very top.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.shrunk = scroll_y != 0.0;
    }

    /// The toggler button was clicked
    pub fn on_toggler_click(&mut self) {
        self.expanded = !self.expanded;
    }

    /// A nav link was clicked
    ///
    /// On narrow layouts (toggler visible) this clicks the toggler so the
    /// menu closes again. Returns whether the toggler was clicked.
    pub fn on_nav_link_click(&mut self, toggler_visible: bool) -> bool {
        if toggler_visible {
            self.on_toggler_click();
        }
        toggler_visible
    }
}

// =============================================================================
// Scrollspy
// =============================================================================

/// Scrollspy settings for the main nav
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSpyConfig {
    /// Selector of the nav being spied on
    pub target: String,
    /// Intersection root margin
    pub root_margin: String,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self { target: "#mainNav".to_string(), root_margin: "0px 0px -40%".to_string() }
    }
}

// =============================================================================
// Page Paths
// =============================================================================

/// Check if a path is the news page
pub fn is_news_page(path: &str) -> bool {
    path.contains("news.html") || path.contains(NEWS_PAGE_PATH)
}

/// Relative path to the blog posts file from a page
///
/// Pages under `/pages/` sit one directory below the data file.
pub fn posts_data_path(page_path: &str) -> &'static str {
    if page_path.contains("/pages/") {
        "../blog-posts.json"
    } else {
        "blog-posts.json"
    }
}

// =============================================================================
// Tests
// =============================================================================
