//! Melody Player Core
//!
//! Source-agnostic domain types for Melody Player.
//!
//! This crate provides the shapes every other crate agrees on:
//! - **Domain Types**: `Track`, `Playlist`, `SourceKind`
//! - **Search Types**: `SearchResults`, `SearchFacet`, `NamedEntity`
//! - **Video Metadata**: what a video resolver returns for a URL
//!
//! # Example
//!
//! ```rust
//! use melody_core::{Playlist, SourceKind, Track};
//!
//! let track = Track::new("track1", "Acoustic Guitar", "SoundHelix", "Sample Tracks", 238);
//! let playlist = Playlist::new("local", "Local Tracks", vec![track.clone()]);
//!
//! assert_eq!(playlist.tracks[0], track);
//! assert_eq!(SourceKind::default(), SourceKind::Local);
//! ```

#![forbid(unsafe_code)]

pub mod types;

pub use types::{
    slugify, NamedEntity, Playlist, SearchFacet, SearchResults, SourceKind, Track, VideoMetadata,
    VIDEO_TRACK_PREFIX,
};
