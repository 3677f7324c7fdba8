//! Common content source contract
//!
//! Every adapter (local catalog, Spotify mock, YouTube resolver) answers
//! the same load requests so that the playback store never needs to know
//! which concrete adapter it is talking to.

use crate::error::Result;
use async_trait::async_trait;
use melody_core::{Playlist, SourceKind, Track};
use std::fmt;

/// What the caller wants loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    /// A single track by id
    Track(String),

    /// Every track the source has, as one collection
    AllTracks,

    /// A playlist by id
    Playlist(String),

    /// Content addressed by URL
    Url(String),
}

impl fmt::Display for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track(id) => write!(f, "track {id}"),
            Self::AllTracks => write!(f, "all tracks"),
            Self::Playlist(id) => write!(f, "playlist {id}"),
            Self::Url(url) => write!(f, "url {url}"),
        }
    }
}

/// What a source produced for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedContent {
    /// One track, played on its own
    Single(Track),

    /// An ordered collection
    Collection(Playlist),

    /// A resolved video and the track that stands for it
    Video { track: Track, video_id: String },
}

/// Adapter contract shared by all sources
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Which source this adapter represents
    fn kind(&self) -> SourceKind;

    /// Resolve a load request
    ///
    /// # Errors
    /// Returns `SourceError::Unsupported` for request shapes the source
    /// does not serve, or a not-found/validation error for bad input.
    async fn load(&self, request: &LoadRequest) -> Result<LoadedContent>;
}
