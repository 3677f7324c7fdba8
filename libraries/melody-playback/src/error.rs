//! Error types for playback management

use melody_sources::SourceError;
use thiserror::Error;

/// Playback errors
///
/// Never returned from store actions; the store records them in
/// `PlayerState::error` with an operation label.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Adapter failed or could not find the content
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Remote service answered but did not accept the command
    #[error("Remote service rejected {command}")]
    Rejected { command: &'static str },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
