//! Adapter handles injected into the store

use melody_core::SourceKind;
use melody_sources::{
    ContentSource, Latency, LocalLibrary, MockSpotify, SpotifyApi, YouTubeResolver,
};
use std::fmt;
use std::sync::Arc;

/// One content source per kind, plus the remote transport/search API
#[derive(Clone)]
pub struct Adapters {
    pub local: Arc<dyn ContentSource>,
    pub spotify: Arc<dyn ContentSource>,
    pub youtube: Arc<dyn ContentSource>,
    pub remote: Arc<dyn SpotifyApi>,
}

impl Adapters {
    /// Builtin catalog, Spotify mock and YouTube resolver sharing one
    /// latency profile
    pub fn mock(latency: Latency) -> Self {
        let spotify = Arc::new(MockSpotify::with_latency(latency));
        Self {
            local: Arc::new(LocalLibrary::builtin()),
            spotify: spotify.clone(),
            youtube: Arc::new(YouTubeResolver::with_latency(latency)),
            remote: spotify,
        }
    }

    /// Replace the local catalog
    pub fn with_local(mut self, local: Arc<dyn ContentSource>) -> Self {
        self.local = local;
        self
    }

    /// Replace the Spotify content source
    pub fn with_spotify(mut self, spotify: Arc<dyn ContentSource>) -> Self {
        self.spotify = spotify;
        self
    }

    /// Replace the YouTube content source
    pub fn with_youtube(mut self, youtube: Arc<dyn ContentSource>) -> Self {
        self.youtube = youtube;
        self
    }

    /// Replace the remote transport/search API
    pub fn with_remote(mut self, remote: Arc<dyn SpotifyApi>) -> Self {
        self.remote = remote;
        self
    }

    /// Content source for a kind
    pub fn source(&self, kind: SourceKind) -> &Arc<dyn ContentSource> {
        match kind {
            SourceKind::Local => &self.local,
            SourceKind::Spotify => &self.spotify,
            SourceKind::Youtube => &self.youtube,
        }
    }
}

impl Default for Adapters {
    fn default() -> Self {
        Self::mock(Latency::simulated())
    }
}

impl fmt::Debug for Adapters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapters")
            .field("local", &self.local.kind())
            .field("spotify", &self.spotify.kind())
            .field("youtube", &self.youtube.kind())
            .finish_non_exhaustive()
    }
}
