//! Melody Player - Content Sources
//!
//! Adapters that turn a data source into the `Track`/`Playlist` shapes the
//! playback store understands.
//!
//! This crate provides:
//! - `LocalLibrary`: the static local audio catalog (list, lookup, search)
//! - `MockSpotify`: a latency-simulating stand-in for the Spotify API
//! - `YouTubeResolver`: URL validation, id extraction and metadata lookup
//! - `ContentSource`: the load contract all three implement
//!
//! # Example
//!
//! ```rust
//! use melody_sources::{ContentSource, Latency, LoadRequest, LoadedContent, YouTubeResolver};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resolver = YouTubeResolver::with_latency(Latency::none());
//! assert!(resolver.is_valid_url("https://youtu.be/dQw4w9WgXcQ"));
//!
//! let request = LoadRequest::Url("https://youtu.be/dQw4w9WgXcQ".to_string());
//! match resolver.load(&request).await.unwrap() {
//!     LoadedContent::Video { track, .. } => assert_eq!(track.id, "yt-dQw4w9WgXcQ"),
//!     _ => unreachable!(),
//! }
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod latency;
mod local;
mod source;
mod spotify;
mod youtube;

// Public exports
pub use error::{Result, SourceError};
pub use latency::{Latency, Operation};
pub use local::{LocalLibrary, LOCAL_PLAYLIST_ID};
pub use source::{ContentSource, LoadRequest, LoadedContent};
pub use spotify::{Acknowledgement, MockSpotify, SpotifyApi};
pub use youtube::{embed_url, extract_video_id, YouTubeResolver};
