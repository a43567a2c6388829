//! Markup for post embeds
//!
//! Turns classified embeds into HTML fragments. Each embed kind has exactly
//! one markup shape:
//!
//! - YouTube: iframe at the YouTube embed endpoint
//! - Spotify: iframe at the Spotify embed endpoint, full width, type-dependent height
//! - Bandcamp: "Listen on Bandcamp" link button (Bandcamp has no embed-by-URL endpoint)
//! - SoundCloud: iframe at the SoundCloud player with the track URL as a query parameter
//! - Link: plain outbound link
//!
//! Rendering sits behind [`EmbedRenderer`] so a different output format can be
//! swapped in without touching classification.

use crate::html::escape;
use app_core::embeds::{
    BandcampEmbed, EmbedDetector, EmbedType, ExternalEmbed, LinkEmbed, ResolvedEmbed,
    SoundCloudEmbed, SpotifyEmbed, YouTubeEmbed,
};

/// SoundCloud player endpoint
pub const SOUNDCLOUD_PLAYER_BASE: &str = "https://w.soundcloud.com/player/";

/// Fixed SoundCloud player options
pub const SOUNDCLOUD_PLAYER_OPTIONS: &str = "color=%237464a1&auto_play=false&hide_related=true&show_comments=false&show_user=true&show_reposts=false&show_teaser=false";

/// SoundCloud player height in pixels
pub const SOUNDCLOUD_PLAYER_HEIGHT: u32 = 166;

/// Bandcamp logo shown on the link button
pub const BANDCAMP_LOGO_URL: &str = "https://s4.bcbits.com/img/bclogo.png";

/// Renders a single embed to markup
pub trait EmbedRenderer {
    /// Render one embed
    fn render(&self, embed: &ExternalEmbed) -> String;
}

/// One rendered embed, still tied to the URL it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFragment {
    /// URL as it appeared in the post
    pub source_url: String,
    /// Kind the URL was classified as
    pub embed_type: EmbedType,
    /// Rendered markup
    pub html: String,
}

/// HTML renderer used by the site pages
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEmbedRenderer;

impl HtmlEmbedRenderer {
    fn youtube(embed: &YouTubeEmbed) -> String {
        format!(
            r#"<iframe src="{}" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
            escape(&embed.embed_url())
        )
    }

    fn spotify(embed: &SpotifyEmbed) -> String {
        format!(
            r#"<iframe src="{}" width="100%" height="{}" frameborder="0" allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture" loading="lazy"></iframe>"#,
            escape(&embed.embed_url()),
            embed.display_height
        )
    }

    fn bandcamp(embed: &BandcampEmbed) -> String {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="bandcamp-link"><img src="{}" alt="Bandcamp" class="bandcamp-logo"><span>Listen on Bandcamp</span></a>"#,
            escape(&embed.source_url),
            BANDCAMP_LOGO_URL
        )
    }

    fn soundcloud(embed: &SoundCloudEmbed) -> String {
        format!(
            r#"<iframe width="100%" height="{}" scrolling="no" frameborder="no" allow="autoplay" src="{}"></iframe>"#,
            SOUNDCLOUD_PLAYER_HEIGHT,
            escape(&soundcloud_player_url(&embed.source_url))
        )
    }

    fn link(embed: &LinkEmbed) -> String {
        let url = escape(&embed.source_url);
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="generic-link">🔗 {}</a>"#,
            url, url
        )
    }
}

impl EmbedRenderer for HtmlEmbedRenderer {
    fn render(&self, embed: &ExternalEmbed) -> String {
        let inner = match embed {
            ExternalEmbed::YouTube(e) => Self::youtube(e),
            ExternalEmbed::Spotify(e) => Self::spotify(e),
            ExternalEmbed::Bandcamp(e) => Self::bandcamp(e),
            ExternalEmbed::SoundCloud(e) => Self::soundcloud(e),
            ExternalEmbed::Link(e) => Self::link(e),
        };
        format!(
            r#"<div class="embed-container embed-{}">{}</div>"#,
            embed.embed_type().as_str(),
            inner
        )
    }
}

/// SoundCloud player URL for a track URL
pub fn soundcloud_player_url(source_url: &str) -> String {
    format!(
        "{}?url={}&{}",
        SOUNDCLOUD_PLAYER_BASE,
        urlencoding::encode(source_url),
        SOUNDCLOUD_PLAYER_OPTIONS
    )
}

/// Render each resolved embed independently, keeping input order
pub fn render_fragments<R>(renderer: &R, embeds: &[ResolvedEmbed]) -> Vec<EmbedFragment>
where
    R: EmbedRenderer + ?Sized,
{
    embeds
        .iter()
        .map(|resolved| EmbedFragment {
            source_url: resolved.source_url.clone(),
            embed_type: resolved.embed.embed_type(),
            html: renderer.render(&resolved.embed),
        })
        .collect()
}

/// Render a post's embeds block
///
/// Returns an empty string when there are no embeds, otherwise every
/// fragment in order inside a single `post-embeds` container.
pub fn render_embed_list<R>(renderer: &R, embeds: &[ResolvedEmbed]) -> String
where
    R: EmbedRenderer + ?Sized,
{
    if embeds.is_empty() {
        return String::new();
    }

    let body: String = render_fragments(renderer, embeds)
        .into_iter()
        .map(|fragment| fragment.html)
        .collect();
    format!(r#"<div class="post-embeds">{}</div>"#, body)
}

/// Classify and render a list of embed URLs with [`HtmlEmbedRenderer`]
pub fn render_embeds<S: AsRef<str>>(urls: &[S]) -> String {
    let resolved = EmbedDetector::classify_all(urls);
    render_embed_list(&HtmlEmbedRenderer, &resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::embeds::classify;

    fn render(url: &str) -> String {
        HtmlEmbedRenderer.render(&classify(url))
    }

    #[test]
    fn test_render_youtube() {
        let html = render("https://youtu.be/dQw4w9WgXcQ");
        assert!(html.starts_with(r#"<div class="embed-container embed-youtube">"#));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn test_render_spotify_heights() {
        let track = render("https://open.spotify.com/track/abc123");
        assert!(track.contains(r#"src="https://open.spotify.com/embed/track/abc123""#));
        assert!(track.contains(r#"width="100%""#));
        assert!(track.contains(r#"height="152""#));

        let album = render("https://open.spotify.com/album/xyz789");
        assert!(album.contains(r#"height="352""#));
        assert!(album.contains("embed-spotify"));
    }

    #[test]
    fn test_render_bandcamp_is_link_not_iframe() {
        let html = render("https://someband.bandcamp.com/album/my-album");
        assert!(html.contains(r#"href="https://someband.bandcamp.com/album/my-album""#));
        assert!(html.contains("Listen on Bandcamp"));
        assert!(html.contains(BANDCAMP_LOGO_URL));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_soundcloud_player_url() {
        assert_eq!(
            soundcloud_player_url("https://soundcloud.com/artist/track-name"),
            "https://w.soundcloud.com/player/?url=https%3A%2F%2Fsoundcloud.com%2Fartist%2Ftrack-name&color=%237464a1&auto_play=false&hide_related=true&show_comments=false&show_user=true&show_reposts=false&show_teaser=false"
        );
    }

    #[test]
    fn test_render_soundcloud() {
        let html = render("https://soundcloud.com/artist/track-name");
        assert!(html.contains("embed-soundcloud"));
        assert!(html.contains(r#"height="166""#));
        assert!(html.contains("url=https%3A%2F%2Fsoundcloud.com%2Fartist%2Ftrack-name&amp;color=%237464a1"));
    }

    #[test]
    fn test_render_generic_link_escapes_url() {
        let html = render(r#"https://example.com/?q="<x>"&a=1"#);
        assert!(html.contains("embed-link"));
        assert!(html.contains("🔗 https://example.com/?q=&quot;&lt;x&gt;&quot;&amp;a=1"));
        assert!(!html.contains("<x>"));
    }

    #[test]
    fn test_render_embeds_empty() {
        let urls: Vec<String> = Vec::new();
        assert_eq!(render_embeds(&urls), "");
    }

    #[test]
    fn test_render_embeds_wraps_once_in_order() {
        let html = render_embeds(&[
            "https://soundcloud.com/a/b",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://example.com",
        ]);
        assert!(html.starts_with(r#"<div class="post-embeds">"#));
        assert_eq!(html.matches("post-embeds").count(), 1);
        assert_eq!(html.matches("embed-container").count(), 3);

        let soundcloud = html.find("embed-soundcloud").unwrap();
        let youtube = html.find("embed-youtube").unwrap();
        let link = html.find("embed-link").unwrap();
        assert!(soundcloud < youtube && youtube < link);
    }

    #[test]
    fn test_render_fragments_map_back_to_source() {
        let urls = ["https://example.com/a", "https://open.spotify.com/track/abc"];
        let resolved = EmbedDetector::classify_all(urls);
        let fragments = render_fragments(&HtmlEmbedRenderer, &resolved);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].source_url, "https://example.com/a");
        assert_eq!(fragments[0].embed_type, EmbedType::Link);
        assert_eq!(fragments[1].source_url, "https://open.spotify.com/track/abc");
        assert_eq!(fragments[1].embed_type, EmbedType::Spotify);
    }

    struct KindOnly;

    impl EmbedRenderer for KindOnly {
        fn render(&self, embed: &ExternalEmbed) -> String {
            format!("[{}]", embed.embed_type())
        }
    }

    #[test]
    fn test_custom_renderer() {
        let resolved = EmbedDetector::classify_all(["https://youtu.be/dQw4w9WgXcQ", "x"]);
        assert_eq!(
            render_embed_list(&KindOnly, &resolved),
            r#"<div class="post-embeds">[youtube][link]</div>"#
        );
    }
}
