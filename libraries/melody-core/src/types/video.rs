/// Video metadata returned by a URL resolver
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Prefix applied to video ids when they become track ids
pub const VIDEO_TRACK_PREFIX: &str = "yt-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// 11-character video id
    pub video_id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub thumbnail_url: String,
    /// Duration in seconds
    pub duration: u32,
}

impl VideoMetadata {
    /// Build the track that represents this video in the player
    pub fn to_track(&self) -> Track {
        Track::new(
            format!("{VIDEO_TRACK_PREFIX}{}", self.video_id),
            self.title.clone(),
            self.artist.clone(),
            self.album.clone(),
            self.duration,
        )
        .with_image(self.thumbnail_url.clone())
    }
}
