//! Local audio catalog
//!
//! Static in-memory list of tracks bundled with the player. Lookups are
//! synchronous; the catalog also serves as the `Local` content source.

use crate::error::{Result, SourceError};
use crate::source::{ContentSource, LoadRequest, LoadedContent};
use async_trait::async_trait;
use melody_core::{Playlist, SourceKind, Track};
use tracing::debug;

/// Id of the synthetic playlist built from the whole catalog
pub const LOCAL_PLAYLIST_ID: &str = "local";

/// Static catalog of locally bundled tracks
#[derive(Debug, Clone)]
pub struct LocalLibrary {
    /// Tracks in insertion order
    tracks: Vec<Track>,
}

impl LocalLibrary {
    /// Create a catalog from an explicit track list
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The demo catalog shipped with the player
    pub fn builtin() -> Self {
        Self::new(builtin_tracks())
    }

    /// Full catalog, insertion order
    pub fn list_all(&self) -> &[Track] {
        &self.tracks
    }

    /// Exact-match lookup
    pub fn get_by_id(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Case-insensitive substring search over title and artist
    ///
    /// An empty query returns nothing rather than the whole catalog.
    pub fn search(&self, query: &str) -> Vec<Track> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.matches(&needle))
            .cloned()
            .collect()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The whole catalog as the synthetic "Local Tracks" playlist
    pub fn as_playlist(&self) -> Option<Playlist> {
        if self.tracks.is_empty() {
            return None;
        }

        Some(
            Playlist::new(LOCAL_PLAYLIST_ID, "Local Tracks", self.tracks.clone())
                .with_description("Tracks from local audio library"),
        )
    }
}

impl Default for LocalLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl ContentSource for LocalLibrary {
    fn kind(&self) -> SourceKind {
        SourceKind::Local
    }

    async fn load(&self, request: &LoadRequest) -> Result<LoadedContent> {
        debug!(request = %request, "Loading from local library");

        match request {
            LoadRequest::Track(id) => self
                .get_by_id(id)
                .cloned()
                .map(LoadedContent::Single)
                .ok_or_else(|| SourceError::TrackNotFound(id.clone())),
            LoadRequest::AllTracks => self
                .as_playlist()
                .map(LoadedContent::Collection)
                .ok_or(SourceError::EmptyCatalog),
            other => Err(SourceError::unsupported(SourceKind::Local, other)),
        }
    }
}

fn local_track(
    id: &str,
    title: &str,
    album: &str,
    duration: u32,
    photo: &str,
    audio_file: &str,
) -> Track {
    Track::new(id, title, "SoundHelix", album, duration)
        .with_image(format!(
            "https://images.unsplash.com/photo-{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"
        ))
        .with_audio(format!("/audio/{audio_file}"))
}

fn builtin_tracks() -> Vec<Track> {
    vec![
        local_track("track1", "Acoustic Guitar", "Sample Tracks", 238, "1511379938547-c1f69419868d", "sample-audio.mp3"),
        local_track("track2", "Electronic Beat", "Electronic Collection", 247, "1470225620780-dba8ba36b745", "electronic-beat.mp3"),
        local_track("track3", "Ambient Melody", "Ambient Collection", 285, "1478737270239-2f02b77fc618", "ambient-melody.mp3"),
        local_track("track4", "Dance Track", "Dance Collection", 226, "1493225457124-a3eb161ffa5f", "dance-track.mp3"),
        local_track("track5", "Jazz Loop", "Jazz Collection", 250, "1415201364774-f6f0bb35f28f", "jazz-loop.mp3"),
        local_track("track6", "Piano Melody", "Piano Collection", 198, "1520523839897-bd0b52f945a0", "piano-melody.mp3"),
        local_track("track7", "Techno Beat", "Techno Collection", 274, "1571330735066-03aaa9429d89", "techno-beat.mp3"),
        local_track("track8", "Rock Rhythm", "Rock Collection", 230, "1498038432885-c6f3f1b912ee", "rock-rhythm.mp3"),
        local_track("track9", "Chill Vibes", "Chill Collection", 265, "1506157786151-b8491531f063", "chill-vibes.mp3"),
        local_track("track10", "Acoustic Sunset", "Acoustic Collection", 240, "1501612780327-45045538702b", "sample-audio.mp3"),
        local_track("track11", "Electronic Dreams", "Electronic Collection Vol. 2", 310, "1614149162883-504ce4d13909", "electronic-beat.mp3"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_order() {
        let library = LocalLibrary::builtin();
        let ids: Vec<&str> = library.list_all().iter().map(|t| t.id.as_str()).collect();

        assert_eq!(library.len(), 11);
        assert_eq!(ids[0], "track1");
        assert_eq!(ids[10], "track11");
    }

    #[test]
    fn get_by_id_exact_match() {
        let library = LocalLibrary::builtin();

        assert_eq!(library.get_by_id("track6").unwrap().title, "Piano Melody");
        assert!(library.get_by_id("track").is_none());
        assert!(library.get_by_id("TRACK6").is_none());
    }

    #[test]
    fn search_is_case_insensitive() {
        let library = LocalLibrary::builtin();
        let titles: Vec<String> = library
            .search("acoustic")
            .into_iter()
            .map(|t| t.title)
            .collect();

        assert_eq!(titles, vec!["Acoustic Guitar", "Acoustic Sunset"]);
        assert_eq!(library.search("ACOUSTIC").len(), 2);
    }

    #[test]
    fn search_matches_artist() {
        let library = LocalLibrary::builtin();
        assert_eq!(library.search("soundhelix").len(), 11);
    }

    #[test]
    fn empty_query_returns_nothing() {
        let library = LocalLibrary::builtin();
        assert!(library.search("").is_empty());
    }

    #[test]
    fn album_is_not_searched() {
        let library = LocalLibrary::builtin();
        assert!(library.search("collection").is_empty());
    }

    #[test]
    fn empty_catalog_has_no_playlist() {
        let library = LocalLibrary::new(Vec::new());
        assert!(library.is_empty());
        assert!(library.as_playlist().is_none());
    }

    #[tokio::test]
    async fn load_single_track() {
        let library = LocalLibrary::builtin();
        let loaded = library
            .load(&LoadRequest::Track("track3".into()))
            .await
            .unwrap();

        match loaded {
            LoadedContent::Single(track) => assert_eq!(track.title, "Ambient Melody"),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_missing_track() {
        let library = LocalLibrary::builtin();
        let err = library
            .load(&LoadRequest::Track("nope".into()))
            .await
            .unwrap_err();

        assert_eq!(err, SourceError::TrackNotFound("nope".into()));
        assert_eq!(err.to_string(), "Track not found: nope");
    }

    #[tokio::test]
    async fn load_all_tracks_builds_playlist() {
        let library = LocalLibrary::builtin();
        let loaded = library.load(&LoadRequest::AllTracks).await.unwrap();

        match loaded {
            LoadedContent::Collection(playlist) => {
                assert_eq!(playlist.id, LOCAL_PLAYLIST_ID);
                assert_eq!(playlist.name, "Local Tracks");
                assert_eq!(playlist.tracks, library.list_all());
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_all_from_empty_catalog_fails() {
        let library = LocalLibrary::new(Vec::new());
        let err = library.load(&LoadRequest::AllTracks).await.unwrap_err();
        assert_eq!(err, SourceError::EmptyCatalog);
    }

    #[tokio::test]
    async fn urls_are_unsupported() {
        let library = LocalLibrary::builtin();
        let err = library
            .load(&LoadRequest::Url("https://youtu.be/dQw4w9WgXcQ".into()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SourceError::Unsupported {
                kind: SourceKind::Local,
                ..
            }
        ));
    }
}
