//! Error types for content sources

use melody_core::SourceKind;
use thiserror::Error;

/// Errors raised by a content source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// No track with this id in the source
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// No playlist with this id in the source
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Local catalog has no tracks
    #[error("No tracks available in the local library")]
    EmptyCatalog,

    /// URL does not contain an 11-character video id
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    /// Source cannot serve this kind of request
    #[error("{kind} source cannot load {request}")]
    Unsupported { kind: SourceKind, request: String },

    /// Remote service rejected the call
    #[error("Remote service error: {0}")]
    Remote(String),
}

impl SourceError {
    /// Create an unsupported-request error
    pub fn unsupported(kind: SourceKind, request: impl std::fmt::Display) -> Self {
        Self::Unsupported {
            kind,
            request: request.to_string(),
        }
    }

    /// Create a remote service error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }
}

/// Result type for source operations
pub type Result<T> = std::result::Result<T, SourceError>;
