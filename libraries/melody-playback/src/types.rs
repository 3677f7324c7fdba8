//! Core types for playback management

use crate::queue::Queue;
use crate::volume::Volume;
use melody_core::{Playlist, SourceKind, Track};
use serde::{Deserialize, Serialize};

/// Observable player state
///
/// Owned by exactly one `PlayerStore`; hosts get read-only access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Track being played (or paused)
    pub current_track: Option<Track>,

    /// Upcoming tracks, never containing `current_track`
    pub queue: Queue,

    pub is_playing: bool,

    pub volume: Volume,

    pub repeat: bool,

    pub shuffle: bool,

    /// Playlist the queue was filled from
    pub current_playlist: Option<Playlist>,

    /// Adapter that produced `current_track`
    pub source: SourceKind,

    /// Video id while a YouTube video is loaded
    pub youtube_video_id: Option<String>,

    /// True only while an adapter call is in flight
    pub loading: bool,

    /// Labelled message from the last failed action
    pub error: Option<String>,
}

impl PlayerState {
    /// ID of the current track (if any)
    pub fn current_track_id(&self) -> Option<&str> {
        self.current_track.as_ref().map(|t| t.id.as_str())
    }
}

/// Persisted subset of the player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerPreferences {
    pub volume: Volume,
    pub repeat: bool,
    pub shuffle: bool,
}

impl Default for PlayerPreferences {
    fn default() -> Self {
        Self {
            volume: Volume::default(),
            repeat: false,
            shuffle: false,
        }
    }
}

/// Configuration for the player store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial volume (0-100, default: 80)
    pub volume: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 80,
        }
    }
}
