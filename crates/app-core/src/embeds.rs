//! External embed support for post content
//!
//! This module classifies media URLs attached to blog posts into the providers
//! the site knows how to embed (YouTube videos, Spotify tracks/albums/playlists/
//! artists, Bandcamp releases and SoundCloud tracks), falling back to a plain
//! link for everything else.
//!
//! Classification never fails. Markup for each embed kind is produced
//! separately by `app_ui::embeds`.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Spotify player height for a single track
pub const SPOTIFY_TRACK_HEIGHT: u32 = 152;

/// Spotify player height for albums, playlists and artists
pub const SPOTIFY_COLLECTION_HEIGHT: u32 = 352;

/// Type of external embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedType {
    /// YouTube video
    YouTube,
    /// Spotify track, album, playlist, or artist
    Spotify,
    /// Bandcamp album or track (outbound link only)
    Bandcamp,
    /// SoundCloud track
    SoundCloud,
    /// Generic link
    Link,
}

impl EmbedType {
    /// Get the embed type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedType::YouTube => "youtube",
            EmbedType::Spotify => "spotify",
            EmbedType::Bandcamp => "bandcamp",
            EmbedType::SoundCloud => "soundcloud",
            EmbedType::Link => "link",
        }
    }
}

impl std::fmt::Display for EmbedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// YouTube video embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeEmbed {
    /// 11-character video ID
    pub video_id: String,
}

impl YouTubeEmbed {
    /// Create a new YouTube embed
    pub fn new(video_id: impl Into<String>) -> Self {
        Self { video_id: video_id.into() }
    }

    /// Get the embed URL
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }

    /// Get the watch URL
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// Spotify resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotifyEmbedType {
    /// Track
    Track,
    /// Album
    Album,
    /// Playlist
    Playlist,
    /// Artist
    Artist,
}

impl SpotifyEmbedType {
    /// Get the type as it appears in Spotify URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotifyEmbedType::Track => "track",
            SpotifyEmbedType::Album => "album",
            SpotifyEmbedType::Playlist => "playlist",
            SpotifyEmbedType::Artist => "artist",
        }
    }

    /// Parse a URL path segment into a resource type
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "track" => Some(SpotifyEmbedType::Track),
            "album" => Some(SpotifyEmbedType::Album),
            "playlist" => Some(SpotifyEmbedType::Playlist),
            "artist" => Some(SpotifyEmbedType::Artist),
            _ => None,
        }
    }

    /// Player height in pixels
    ///
    /// Single tracks get the compact player, everything else the list player.
    pub fn display_height(&self) -> u32 {
        match self {
            SpotifyEmbedType::Track => SPOTIFY_TRACK_HEIGHT,
            _ => SPOTIFY_COLLECTION_HEIGHT,
        }
    }
}

/// Spotify embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyEmbed {
    /// Resource type (track, album, playlist, artist)
    pub resource_type: SpotifyEmbedType,
    /// Spotify ID
    pub resource_id: String,
    /// Player height in pixels
    pub display_height: u32,
}

impl SpotifyEmbed {
    /// Create a new Spotify embed, deriving the player height from the type
    pub fn new(resource_type: SpotifyEmbedType, resource_id: impl Into<String>) -> Self {
        Self {
            resource_type,
            resource_id: resource_id.into(),
            display_height: resource_type.display_height(),
        }
    }

    /// Get the embed URL
    pub fn embed_url(&self) -> String {
        format!(
            "https://open.spotify.com/embed/{}/{}",
            self.resource_type.as_str(),
            self.resource_id
        )
    }

    /// Get the open URL
    pub fn open_url(&self) -> String {
        format!(
            "https://open.spotify.com/{}/{}",
            self.resource_type.as_str(),
            self.resource_id
        )
    }
}

/// Bandcamp release
///
/// Bandcamp players need a provider-issued album/track ID that cannot be
/// derived from the public URL, so these are rendered as outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandcampEmbed {
    /// Original URL
    pub source_url: String,
}

/// SoundCloud track embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundCloudEmbed {
    /// Original URL, handed to the SoundCloud player as a query parameter
    pub source_url: String,
}

/// Generic link embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEmbed {
    /// Original URL
    pub source_url: String,
}

/// External embed that can be any supported type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExternalEmbed {
    /// YouTube video embed
    #[serde(rename = "youtube")]
    YouTube(YouTubeEmbed),
    /// Spotify embed
    #[serde(rename = "spotify")]
    Spotify(SpotifyEmbed),
    /// Bandcamp outbound link
    #[serde(rename = "bandcamp")]
    Bandcamp(BandcampEmbed),
    /// SoundCloud embed
    #[serde(rename = "soundcloud")]
    SoundCloud(SoundCloudEmbed),
    /// Generic link embed
    #[serde(rename = "link")]
    Link(LinkEmbed),
}

impl ExternalEmbed {
    /// Get the embed type
    pub fn embed_type(&self) -> EmbedType {
        match self {
            ExternalEmbed::YouTube(_) => EmbedType::YouTube,
            ExternalEmbed::Spotify(_) => EmbedType::Spotify,
            ExternalEmbed::Bandcamp(_) => EmbedType::Bandcamp,
            ExternalEmbed::SoundCloud(_) => EmbedType::SoundCloud,
            ExternalEmbed::Link(_) => EmbedType::Link,
        }
    }

    /// The URL carried by the embed, for kinds that keep the original URL
    pub fn source_url(&self) -> Option<&str> {
        match self {
            ExternalEmbed::Bandcamp(embed) => Some(&embed.source_url),
            ExternalEmbed::SoundCloud(embed) => Some(&embed.source_url),
            ExternalEmbed::Link(embed) => Some(&embed.source_url),
            ExternalEmbed::YouTube(_) | ExternalEmbed::Spotify(_) => None,
        }
    }

    /// Check if this is the generic fallback
    pub fn is_link(&self) -> bool {
        matches!(self, ExternalEmbed::Link(_))
    }

    /// Get as YouTube embed if applicable
    pub fn as_youtube(&self) -> Option<&YouTubeEmbed> {
        match self {
            ExternalEmbed::YouTube(embed) => Some(embed),
            _ => None,
        }
    }

    /// Get as Spotify embed if applicable
    pub fn as_spotify(&self) -> Option<&SpotifyEmbed> {
        match self {
            ExternalEmbed::Spotify(embed) => Some(embed),
            _ => None,
        }
    }
}

/// An embed paired with the URL it was classified from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEmbed {
    /// URL as it appeared in the post
    pub source_url: String,
    /// Classification result
    pub embed: ExternalEmbed,
}

// =============================================================================
// Provider Rules
// =============================================================================

type Extractor = fn(&Captures<'_>, &str) -> Option<ExternalEmbed>;

/// One provider rule: a pattern searched anywhere in the URL plus the
/// function that turns a match into an embed.
struct ProviderRule {
    embed_type: EmbedType,
    pattern: &'static str,
    extract: Extractor,
}

/// Provider rules in priority order. The first rule that matches wins.
const PROVIDER_RULES: [ProviderRule; 4] = [
    ProviderRule {
        embed_type: EmbedType::YouTube,
        pattern: r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([a-zA-Z0-9_-]{11})",
        extract: extract_youtube,
    },
    ProviderRule {
        embed_type: EmbedType::Spotify,
        pattern: r"open\.spotify\.com/(track|album|playlist|artist)/([a-zA-Z0-9]+)",
        extract: extract_spotify,
    },
    ProviderRule {
        embed_type: EmbedType::Bandcamp,
        pattern: r"([a-zA-Z0-9-]+)\.bandcamp\.com/(album|track)/([a-zA-Z0-9-]+)",
        extract: extract_bandcamp,
    },
    ProviderRule {
        embed_type: EmbedType::SoundCloud,
        pattern: r"soundcloud\.com/([a-zA-Z0-9_-]+)/([a-zA-Z0-9_-]+)",
        extract: extract_soundcloud,
    },
];

fn extract_youtube(caps: &Captures<'_>, _url: &str) -> Option<ExternalEmbed> {
    let id = caps.get(1)?.as_str();
    Some(ExternalEmbed::YouTube(YouTubeEmbed::new(id)))
}

fn extract_spotify(caps: &Captures<'_>, _url: &str) -> Option<ExternalEmbed> {
    let resource_type = SpotifyEmbedType::parse(caps.get(1)?.as_str())?;
    let id = caps.get(2)?.as_str();
    Some(ExternalEmbed::Spotify(SpotifyEmbed::new(resource_type, id)))
}

fn extract_bandcamp(_caps: &Captures<'_>, url: &str) -> Option<ExternalEmbed> {
    Some(ExternalEmbed::Bandcamp(BandcampEmbed { source_url: url.to_string() }))
}

fn extract_soundcloud(_caps: &Captures<'_>, url: &str) -> Option<ExternalEmbed> {
    Some(ExternalEmbed::SoundCloud(SoundCloudEmbed { source_url: url.to_string() }))
}

/// Compiled provider rules, built once on first use
fn compiled_rules() -> &'static [(EmbedType, Regex, Extractor)] {
    static RULES: OnceLock<Vec<(EmbedType, Regex, Extractor)>> = OnceLock::new();
    RULES.get_or_init(|| {
        PROVIDER_RULES
            .iter()
            .map(|rule| {
                let re = Regex::new(rule.pattern).expect("provider pattern is a valid regex");
                (rule.embed_type, re, rule.extract)
            })
            .collect()
    })
}

// =============================================================================
// Detection
// =============================================================================

/// Embed detector for identifying and parsing embeddable URLs
pub struct EmbedDetector;

impl EmbedDetector {
    /// Classify a URL into an embed
    ///
    /// Providers are tried in a fixed order (YouTube, Spotify, Bandcamp,
    /// SoundCloud). Anything that matches none of them, including malformed
    /// input, becomes a [`ExternalEmbed::Link`].
    pub fn classify(url: &str) -> ExternalEmbed {
        for (embed_type, re, extract) in compiled_rules() {
            if let Some(embed) = re.captures(url).and_then(|caps| extract(&caps, url)) {
                tracing::debug!(%embed_type, url, "matched embed provider");
                return embed;
            }
        }

        tracing::debug!(url, "no embed provider matched, using plain link");
        ExternalEmbed::Link(LinkEmbed { source_url: url.to_string() })
    }

    /// Detect the embed type of a URL
    pub fn detect(url: &str) -> EmbedType {
        Self::classify(url).embed_type()
    }

    /// Classify every URL independently, preserving input order
    pub fn classify_all<I, S>(urls: I) -> Vec<ResolvedEmbed>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        urls.into_iter()
            .map(|url| {
                let url = url.as_ref();
                ResolvedEmbed { source_url: url.to_string(), embed: Self::classify(url) }
            })
            .collect()
    }
}

/// Classify a URL into an embed. See [`EmbedDetector::classify`].
pub fn classify(url: &str) -> ExternalEmbed {
    EmbedDetector::classify(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    // YouTube tests

    #[test]
    fn test_classify_youtube_watch_url() {
        let embed = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(embed, ExternalEmbed::YouTube(YouTubeEmbed::new("dQw4w9WgXcQ")));
    }

    #[test]
    fn test_classify_youtube_url_shapes_are_equivalent() {
        let watch = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        let short = classify("https://youtu.be/dQw4w9WgXcQ");
        let embed = classify("https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(watch, short);
        assert_eq!(watch, embed);
    }

    #[test]
    fn test_classify_youtube_with_extra_params() {
        let embed = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s");
        assert_eq!(embed.as_youtube().unwrap().video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_classify_youtube_takes_first_eleven_chars() {
        let embed = classify("https://youtu.be/dQw4w9WgXcQextra");
        assert_eq!(embed.as_youtube().unwrap().video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_classify_youtube_short_id_falls_back() {
        let embed = classify("https://youtu.be/tooshort");
        assert!(embed.is_link());
    }

    #[test]
    fn test_classify_youtube_with_v_param_not_first_falls_back() {
        // Only `watch?v=` is recognised, not `watch?feature=x&v=`
        let embed = classify("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ");
        assert!(embed.is_link());
    }

    #[test]
    fn test_youtube_embed_url() {
        let embed = YouTubeEmbed::new("dQw4w9WgXcQ");
        assert_eq!(embed.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(embed.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    // Spotify tests

    #[test]
    fn test_classify_spotify_track() {
        let embed = classify("https://open.spotify.com/track/abc123");
        let spotify = embed.as_spotify().unwrap();
        assert_eq!(spotify.resource_type, SpotifyEmbedType::Track);
        assert_eq!(spotify.resource_id, "abc123");
        assert_eq!(spotify.display_height, 152);
    }

    #[test]
    fn test_classify_spotify_playlist_height() {
        let embed = classify("https://open.spotify.com/playlist/xyz789");
        let spotify = embed.as_spotify().unwrap();
        assert_eq!(spotify.resource_type, SpotifyEmbedType::Playlist);
        assert_eq!(spotify.display_height, 352);
    }

    #[test]
    fn test_classify_spotify_album_and_artist() {
        let album = classify("https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3?si=abc");
        let spotify = album.as_spotify().unwrap();
        assert_eq!(spotify.resource_type, SpotifyEmbedType::Album);
        assert_eq!(spotify.resource_id, "1DFixLWuPkv3KT3TnV35m3");
        assert_eq!(spotify.display_height, SPOTIFY_COLLECTION_HEIGHT);

        let artist = classify("https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF");
        assert_eq!(artist.as_spotify().unwrap().resource_type, SpotifyEmbedType::Artist);
    }

    #[test]
    fn test_classify_spotify_unsupported_type_falls_back() {
        let embed = classify("https://open.spotify.com/episode/abc123");
        assert!(embed.is_link());
    }

    #[test]
    fn test_spotify_urls() {
        let embed = SpotifyEmbed::new(SpotifyEmbedType::Track, "3n3Ppam7vgaVa1iaRUc9Lp");
        assert_eq!(embed.embed_url(), "https://open.spotify.com/embed/track/3n3Ppam7vgaVa1iaRUc9Lp");
        assert_eq!(embed.open_url(), "https://open.spotify.com/track/3n3Ppam7vgaVa1iaRUc9Lp");
    }

    // Bandcamp and SoundCloud tests

    #[test]
    fn test_classify_bandcamp_keeps_original_url() {
        let url = "https://someband.bandcamp.com/album/my-album";
        let embed = classify(url);
        assert_eq!(
            embed,
            ExternalEmbed::Bandcamp(BandcampEmbed { source_url: url.to_string() })
        );
        assert_eq!(embed.source_url(), Some(url));
    }

    #[test]
    fn test_classify_bandcamp_without_subdomain_falls_back() {
        let embed = classify("https://bandcamp.com/album/my-album");
        assert!(embed.is_link());
    }

    #[test]
    fn test_classify_soundcloud_keeps_original_url() {
        let url = "https://soundcloud.com/artist/track-name";
        let embed = classify(url);
        assert_eq!(
            embed,
            ExternalEmbed::SoundCloud(SoundCloudEmbed { source_url: url.to_string() })
        );
    }

    #[test]
    fn test_classify_soundcloud_profile_only_falls_back() {
        let embed = classify("https://soundcloud.com/artist");
        assert!(embed.is_link());
    }

    // Fallback and priority tests

    #[test]
    fn test_classify_generic_link() {
        let url = "https://example.com/anything";
        assert_eq!(
            classify(url),
            ExternalEmbed::Link(LinkEmbed { source_url: url.to_string() })
        );
    }

    #[test]
    fn test_classify_is_total() {
        let inputs = [
            "",
            " ",
            "not a url",
            "://",
            "https://",
            "youtube.com/watch?v=",
            "open.spotify.com/track/",
            "\u{1F517}\u{0000}\u{FFFD}",
            "javascript:alert(1)",
        ];
        for input in inputs {
            let embed = classify(input);
            assert!(embed.is_link(), "expected fallback for {:?}", input);
            assert_eq!(embed.source_url(), Some(input));
        }
    }

    #[test]
    fn test_priority_youtube_before_spotify() {
        let embed = classify("https://youtu.be/dQw4w9WgXcQ?ref=open.spotify.com/track/abc123");
        assert_eq!(embed.embed_type(), EmbedType::YouTube);
    }

    #[test]
    fn test_priority_spotify_before_bandcamp() {
        let embed = classify("https://open.spotify.com/album/abc?x=band.bandcamp.com/album/a-b");
        assert_eq!(embed.embed_type(), EmbedType::Spotify);
    }

    #[test]
    fn test_priority_bandcamp_before_soundcloud() {
        let embed = classify("https://band.bandcamp.com/track/song?via=soundcloud.com/user/song");
        assert_eq!(embed.embed_type(), EmbedType::Bandcamp);
    }

    #[test]
    fn test_detect() {
        assert_eq!(EmbedDetector::detect("https://youtu.be/dQw4w9WgXcQ"), EmbedType::YouTube);
        assert_eq!(
            EmbedDetector::detect("https://soundcloud.com/a/b"),
            EmbedType::SoundCloud
        );
        assert_eq!(EmbedDetector::detect("https://example.com"), EmbedType::Link);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let urls = [
            "https://example.com",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://example.com",
        ];
        let resolved = EmbedDetector::classify_all(urls);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].embed.embed_type(), EmbedType::Link);
        assert_eq!(resolved[1].embed.embed_type(), EmbedType::YouTube);
        assert_eq!(resolved[1].source_url, "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(resolved[2].source_url, "https://example.com");
    }

    #[test]
    fn test_classify_all_empty() {
        let resolved = EmbedDetector::classify_all(Vec::<String>::new());
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_embed_type_as_str() {
        assert_eq!(EmbedType::YouTube.as_str(), "youtube");
        assert_eq!(EmbedType::Bandcamp.as_str(), "bandcamp");
        assert_eq!(EmbedType::SoundCloud.to_string(), "soundcloud");
        assert_eq!(EmbedType::Link.as_str(), "link");
    }

    #[test]
    fn test_external_embed_serialization() {
        let embed = classify("https://open.spotify.com/track/abc123");
        let json = serde_json::to_value(&embed).unwrap();
        assert_eq!(json["kind"], "spotify");
        assert_eq!(json["resourceType"], "track");
        assert_eq!(json["resourceId"], "abc123");
        assert_eq!(json["displayHeight"], 152);

        let deserialized: ExternalEmbed = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, embed);
    }
}
