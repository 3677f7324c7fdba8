//! Source kinds
//!
//! Tags which adapter produced the current track.

use serde::{Deserialize, Serialize};

/// Where a track came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Static local audio catalog
    #[default]
    Local,
    /// Remote Spotify service (mocked)
    Spotify,
    /// YouTube URL resolver
    Youtube,
}

impl SourceKind {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Spotify => "spotify",
            Self::Youtube => "youtube",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "local" => Some(Self::Local),
            "spotify" => Some(Self::Spotify),
            "youtube" => Some(Self::Youtube),
            _ => None,
        }
    }

    /// Whether transport commands go to a remote service
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Spotify)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
