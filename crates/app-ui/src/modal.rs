//! Post detail modal
//!
//! On the news page, clicking a post opens it in a modal with the full
//! content, its embeds and a comment thread. The modal closes from its close
//! button, a click on the backdrop, or the Escape key.

use crate::comments::GiscusConfig;
use crate::components::PostMedia;
use crate::embeds::{EmbedRenderer, HtmlEmbedRenderer};
use crate::html::escape;
use app_core::dates::Dated;
use app_core::posts::{BlogPost, PostId};

/// Modal visibility
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Not shown
    #[default]
    Hidden,
    /// Showing a post
    Shown(PostId),
}

/// Something that may close the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The close (×) button
    CloseButton,
    /// A click on the modal overlay
    BackdropClick {
        /// Whether the click target was the backdrop itself rather than
        /// something inside the dialog
        target_is_backdrop: bool,
    },
    /// A key press anywhere on the page
    KeyDown(String),
}

impl CloseTrigger {
    /// Whether this trigger closes the modal
    pub fn closes(&self) -> bool {
        match self {
            CloseTrigger::CloseButton => true,
            CloseTrigger::BackdropClick { target_is_backdrop } => *target_is_backdrop,
            CloseTrigger::KeyDown(key) => key == "Escape",
        }
    }
}

/// Contents of the modal for one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Post shown
    pub post_id: PostId,
    /// Title text
    pub title: String,
    /// Formatted date
    pub date: String,
    /// Author line (`by {author}`)
    pub author: String,
    /// Markup for the image slot
    pub image_html: String,
    /// Whether the image slot is displayed
    pub image_visible: bool,
    /// Markup for the body
    pub content_html: String,
    /// Comment widget script
    pub comments_html: String,
}

impl ModalView {
    /// Build the modal contents with the default embed renderer
    pub fn for_post(post: &BlogPost, comments: &GiscusConfig) -> Self {
        Self::for_post_with(post, comments, &HtmlEmbedRenderer)
    }

    /// Build the modal contents with a specific embed renderer
    ///
    /// Posts with an image show it in the image slot and put the embeds after
    /// the content. Posts without one show the embeds in the image slot,
    /// which is hidden when there is nothing to show.
    pub fn for_post_with<R>(post: &BlogPost, comments: &GiscusConfig, renderer: &R) -> Self
    where
        R: EmbedRenderer + ?Sized,
    {
        let media = PostMedia::for_post(
            post,
            |image| format!(r#"<img src="{}" alt="{}">"#, escape(image), escape(&post.title)),
            renderer,
        );
        let image_visible = !media.top.is_empty();

        Self {
            post_id: post.id.clone(),
            title: post.title.clone(),
            date: post.display_date(),
            author: format!("by {}", post.author),
            image_html: media.top,
            image_visible,
            content_html: format!("<p>{}</p>{}", post.content, media.after_content),
            comments_html: comments.script_tag(post),
        }
    }

    /// Render the modal body
    pub fn render(&self) -> String {
        let display = if self.image_visible { "block" } else { "none" };
        format!(
            concat!(
                r#"<div class="post-modal-body" data-post-id="{id}">"#,
                r#"<h2 id="modal-post-title">{title}</h2>"#,
                r#"<p id="modal-post-date">{date}</p>"#,
                r#"<p id="modal-post-author">{author}</p>"#,
                r#"<div id="modal-post-image" style="display: {display}">{image}</div>"#,
                r#"<div id="modal-post-content">{content}</div>"#,
                r#"<div class="giscus">{comments}</div>"#,
                r#"</div>"#
            ),
            id = escape(&self.post_id.to_string()),
            title = escape(&self.title),
            date = escape(&self.date),
            author = escape(&self.author),
            display = display,
            image = self.image_html,
            content = self.content_html,
            comments = self.comments_html,
        )
    }
}

/// The post modal
#[derive(Debug, Clone, Default)]
pub struct PostModal {
    state: ModalState,
    view: Option<ModalView>,
    comments: GiscusConfig,
}

impl PostModal {
    /// Create a hidden modal
    pub fn new(comments: GiscusConfig) -> Self {
        Self { state: ModalState::Hidden, view: None, comments }
    }

    /// Current state
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Check if the modal is showing a post
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Shown(_))
    }

    /// Contents currently shown
    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    /// Show a post, replacing whatever was shown before
    ///
    /// The comment thread is rebuilt for the new post.
    pub fn open(&mut self, post: &BlogPost) -> &ModalView {
        self.state = ModalState::Shown(post.id.clone());
        self.view.insert(ModalView::for_post(post, &self.comments))
    }

    /// Hide the modal. Closing a hidden modal does nothing.
    pub fn close(&mut self) {
        self.state = ModalState::Hidden;
        self.view = None;
    }

    /// Handle a possible close trigger. Returns whether the modal closed.
    pub fn handle(&mut self, trigger: &CloseTrigger) -> bool {
        if !self.is_open() || !trigger.closes() {
            return false;
        }
        tracing::debug!(?trigger, "closing post modal");
        self.close();
        true
    }
}
