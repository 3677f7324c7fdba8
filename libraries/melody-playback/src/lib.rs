//! Melody Player - Playback Management
//!
//! Source-agnostic playback state machine for Melody Player.
//!
//! This crate provides:
//! - `PlayerStore`: the single owner of the session's `PlayerState`
//! - Upcoming-tracks queue (FIFO, never holds the current track)
//! - Playback history for "previous" (configurable size)
//! - Fisher-Yates shuffle with an injectable random source
//! - Clamped volume (0-100%)
//! - Buffered events for UI synchronization
//!
//! # Architecture
//!
//! The store never names a concrete adapter. It talks to
//! `ContentSource` handles (one per source kind) and to a `SpotifyApi`
//! handle for transport acknowledgements and search, all bundled in
//! `Adapters` and injected at construction.
//!
//! # Example
//!
//! ```rust
//! use melody_playback::{Adapters, PlayerStore};
//! use melody_sources::Latency;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut store = PlayerStore::new(Adapters::mock(Latency::none()));
//!
//! store.load_local_tracks().await;
//! assert_eq!(store.state().current_track_id(), Some("track1"));
//!
//! store.next_track().await;
//! assert_eq!(store.state().current_track_id(), Some("track2"));
//!
//! store.previous_track().await;
//! assert_eq!(store.state().current_track_id(), Some("track1"));
//! # }
//! ```

#![forbid(unsafe_code)]

mod adapters;
mod error;
mod events;
mod history;
mod queue;
mod shuffle;
mod store;
mod types;
mod volume;

// Public exports
pub use adapters::Adapters;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use history::History;
pub use queue::Queue;
pub use shuffle::shuffle_tracks;
pub use store::PlayerStore;
pub use types::{PlayerConfig, PlayerPreferences, PlayerState};
pub use volume::Volume;
