//! YouTube URL resolver
//!
//! Extracts video ids from the usual YouTube URL shapes and maps them to
//! track metadata. Metadata comes from a small static table; unknown ids
//! get generic placeholder metadata instead of an error.

use crate::error::{Result, SourceError};
use crate::latency::{Latency, Operation};
use crate::source::{ContentSource, LoadRequest, LoadedContent};
use async_trait::async_trait;
use melody_core::{SourceKind, VideoMetadata};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Length of a YouTube video id
pub const VIDEO_ID_LEN: usize = 11;

/// Duration reported for videos missing from the metadata table
pub const FALLBACK_DURATION: u32 = 180;

/// Title reported for videos missing from the metadata table
pub const FALLBACK_TITLE: &str = "YouTube Video";

/// Matches `youtu.be/<id>`, `v/<id>`, `/u/<w>/<id>`, `embed/<id>` and `watch?v=<id>`
static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*((youtu.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?(?P<id>[^#&?]*).*")
        .expect("video URL pattern is valid")
});

/// Known videos: (id, title, artist, album, duration)
const KNOWN_VIDEOS: &[(&str, &str, &str, &str, u32)] = &[
    ("dQw4w9WgXcQ", "Never Gonna Give You Up", "Rick Astley", "Whenever You Need Somebody", 213),
    ("fJ9rUzIMcZQ", "Bohemian Rhapsody", "Queen", "A Night at the Opera", 367),
    ("JGwWNGJdvx8", "Shape of You", "Ed Sheeran", "÷ (Divide)", 234),
    ("kJQP7kiw5Fk", "Despacito", "Luis Fonsi ft. Daddy Yankee", "Vida", 282),
    ("hT_nvWreIhg", "Counting Stars", "OneRepublic", "Native", 257),
];

/// Extract the 11-character video id from a YouTube URL
pub fn extract_video_id(url: &str) -> Option<String> {
    let captures = VIDEO_URL.captures(url)?;
    let id = captures.name("id")?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then(|| id.to_string())
}

/// Thumbnail URL for a video id
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

/// Embeddable player URL
///
/// Autoplay, controls, JS API, unmuted, inline playback and fullscreen
/// are always enabled. `origin` is URL-encoded.
pub fn embed_url(video_id: &str, origin: &str) -> String {
    let origin: String = url::form_urlencoded::byte_serialize(origin.as_bytes()).collect();
    format!(
        "https://www.youtube.com/embed/{video_id}?autoplay=1&controls=1&enablejsapi=1&origin={origin}&mute=0&playsinline=1&fs=1"
    )
}

/// Metadata for a video id, placeholder if unknown
fn lookup(video_id: &str) -> VideoMetadata {
    match KNOWN_VIDEOS.iter().find(|(id, ..)| *id == video_id) {
        Some(&(_, title, artist, album, duration)) => VideoMetadata {
            video_id: video_id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            thumbnail_url: thumbnail_url(video_id),
            duration,
        },
        None => VideoMetadata {
            video_id: video_id.to_string(),
            title: FALLBACK_TITLE.to_string(),
            artist: "Unknown Artist".to_string(),
            album: "YouTube".to_string(),
            thumbnail_url: thumbnail_url(video_id),
            duration: FALLBACK_DURATION,
        },
    }
}

/// Resolves YouTube URLs into track metadata
#[derive(Debug, Clone, Default)]
pub struct YouTubeResolver {
    latency: Latency,
}

impl YouTubeResolver {
    /// Create a resolver with realistic latency
    pub fn new() -> Self {
        Self::with_latency(Latency::simulated())
    }

    /// Create a resolver with a custom latency profile
    pub fn with_latency(latency: Latency) -> Self {
        Self { latency }
    }

    /// Whether a video id can be extracted from the URL
    pub fn is_valid_url(&self, url: &str) -> bool {
        extract_video_id(url).is_some()
    }

    /// Resolve a URL into video metadata
    ///
    /// # Errors
    /// Returns `SourceError::InvalidUrl` if no 11-character id can be
    /// extracted. Unknown ids are not an error.
    pub async fn resolve(&self, url: &str) -> Result<VideoMetadata> {
        let Some(video_id) = extract_video_id(url) else {
            warn!(url = %url, "Rejected YouTube URL");
            return Err(SourceError::InvalidUrl(url.to_string()));
        };

        self.latency.wait(Operation::ResolveVideo).await;
        let metadata = lookup(&video_id);
        debug!(video_id = %video_id, title = %metadata.title, "Resolved YouTube video");
        Ok(metadata)
    }

    /// Embeddable player URL for a video id
    pub fn embed_url(&self, video_id: &str, origin: &str) -> String {
        embed_url(video_id, origin)
    }
}

#[async_trait]
impl ContentSource for YouTubeResolver {
    fn kind(&self) -> SourceKind {
        SourceKind::Youtube
    }

    async fn load(&self, request: &LoadRequest) -> Result<LoadedContent> {
        match request {
            LoadRequest::Url(url) => {
                let metadata = self.resolve(url).await?;
                Ok(LoadedContent::Video {
                    track: metadata.to_track(),
                    video_id: metadata.video_id,
                })
            }
            other => Err(SourceError::unsupported(SourceKind::Youtube, other)),
        }
    }
}
