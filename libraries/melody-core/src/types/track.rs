/// Track domain type
use crate::types::VIDEO_TRACK_PREFIX;
use serde::{Deserialize, Serialize};

/// A playable track, regardless of which source produced it
///
/// Serializes to the catalog JSON shape
/// `{id, title, artist, album, duration, imageUrl, audioUrl}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Identifier, unique within its source namespace
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Duration in whole seconds
    pub duration: u32,

    /// Cover art URL
    #[serde(default)]
    pub image_url: String,

    /// Playable audio URL (local catalog only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Track {
    /// Create a track without artwork or audio reference
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration,
            image_url: String::new(),
            audio_url: None,
        }
    }

    /// Set the cover art URL
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Set the playable audio URL
    #[must_use]
    pub fn with_audio(mut self, audio_url: impl Into<String>) -> Self {
        self.audio_url = Some(audio_url.into());
        self
    }

    /// Video id when this track was built from video metadata
    pub fn video_id(&self) -> Option<&str> {
        self.id.strip_prefix(VIDEO_TRACK_PREFIX)
    }

    /// Case-insensitive substring match on title or artist
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}
