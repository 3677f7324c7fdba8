//! Player Events
//!
//! Event-based communication for UI synchronization.
//! Events are buffered by the store and drained by the host after each
//! action:
//! - Play/pause changes
//! - Track changes (with the track that was replaced)
//! - Queue length, volume and source changes
//! - Action failures

use melody_core::SourceKind;
use serde::{Deserialize, Serialize};

/// Events emitted by the player store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// Playing flag flipped
    StateChanged { is_playing: bool },

    /// Current track replaced
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the replaced track (if any)
        previous_track_id: Option<String>,
    },

    /// Queue contents changed
    QueueChanged { length: usize },

    /// Volume changed (0-100)
    VolumeChanged { level: u8 },

    /// Active source switched
    SourceChanged { source: SourceKind },

    /// An action failed; same text as `PlayerState::error`
    Error { message: String },
}
