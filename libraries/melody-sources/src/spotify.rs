//! Mock Spotify service
//!
//! Stands in for the real Spotify Web API. Every call sleeps for a
//! simulated round-trip, then answers from static data. Transport
//! commands only acknowledge; no audio is controlled.

use crate::error::{Result, SourceError};
use crate::latency::{Latency, Operation};
use crate::source::{ContentSource, LoadRequest, LoadedContent};
use async_trait::async_trait;
use melody_core::{NamedEntity, Playlist, SearchFacet, SearchResults, SourceKind, Track};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Response to a command that has no payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Acknowledgement {
    /// Successful acknowledgement without message
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Successful acknowledgement with a message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// Remote music service API
///
/// Implemented by `MockSpotify`; the playback store only sees this trait,
/// so tests can substitute a failing implementation.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    async fn login(&self) -> Result<Acknowledgement>;

    async fn logout(&self) -> Result<Acknowledgement>;

    /// All playlists of the current user
    async fn get_playlists(&self) -> Result<Vec<Playlist>>;

    /// Playlist by id, `None` if unknown
    async fn get_playlist_by_id(&self, id: &str) -> Result<Option<Playlist>>;

    async fn get_recently_played(&self) -> Result<Vec<Track>>;

    async fn get_saved_tracks(&self) -> Result<Vec<Track>>;

    /// Start playing a track on the remote device
    async fn play_track(&self, track_id: &str) -> Result<Acknowledgement>;

    async fn pause(&self) -> Result<Acknowledgement>;

    async fn resume(&self) -> Result<Acknowledgement>;

    async fn next(&self) -> Result<Acknowledgement>;

    async fn previous(&self) -> Result<Acknowledgement>;

    /// Set remote volume (0-100)
    async fn set_volume(&self, percent: u8) -> Result<Acknowledgement>;

    /// Search the catalog, filling only the requested facets
    async fn search(&self, query: &str, facets: &[SearchFacet]) -> Result<SearchResults>;
}

/// Static-data Spotify stand-in
#[derive(Debug)]
pub struct MockSpotify {
    latency: Latency,
    playlists: Vec<Playlist>,
    recently_played: Vec<Track>,
    saved_tracks: Vec<Track>,
    logged_in: AtomicBool,
}

impl MockSpotify {
    /// Create the mock with its demo library and realistic latency
    pub fn new() -> Self {
        Self::with_latency(Latency::simulated())
    }

    /// Create the mock with a custom latency profile
    pub fn with_latency(latency: Latency) -> Self {
        Self {
            latency,
            playlists: mock_playlists(),
            recently_played: mock_recently_played(),
            saved_tracks: mock_saved_tracks(),
            logged_in: AtomicBool::new(false),
        }
    }

    /// Whether `login` has been called more recently than `logout`
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::Relaxed)
    }

    /// Every known track, deduplicated by id
    ///
    /// Playlists first, then recently played, then saved tracks. The first
    /// occurrence of an id keeps its position.
    pub fn all_tracks(&self) -> Vec<Track> {
        let mut seen = HashSet::new();
        self.playlists
            .iter()
            .flat_map(|p| p.tracks.iter())
            .chain(self.recently_played.iter())
            .chain(self.saved_tracks.iter())
            .filter(|t| seen.insert(t.id.clone()))
            .cloned()
            .collect()
    }

    fn search_now(&self, query: &str, facets: &[SearchFacet]) -> SearchResults {
        let needle = query.to_lowercase();
        let tracks = self.all_tracks();
        let mut results = SearchResults::default();

        if facets.contains(&SearchFacet::Track) {
            results.tracks = tracks.iter().filter(|t| t.matches(&needle)).cloned().collect();
        }

        if facets.contains(&SearchFacet::Artist) {
            results.artists = matching_names(tracks.iter().map(|t| t.artist.as_str()), &needle);
        }

        if facets.contains(&SearchFacet::Album) {
            results.albums = matching_names(tracks.iter().map(|t| t.album.as_str()), &needle);
        }

        results
    }
}

impl Default for MockSpotify {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique names in first-seen order whose lowercase form contains `needle`
fn matching_names<'a>(names: impl Iterator<Item = &'a str>, needle: &str) -> Vec<NamedEntity> {
    let mut seen = HashSet::new();
    names
        .filter(|name| seen.insert(*name))
        .filter(|name| name.to_lowercase().contains(needle))
        .map(NamedEntity::from_name)
        .collect()
}

#[async_trait]
impl SpotifyApi for MockSpotify {
    async fn login(&self) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Login).await;
        self.logged_in.store(true, Ordering::Relaxed);
        info!("Mock Spotify login");
        Ok(Acknowledgement::with_message(
            "Mock authentication successful",
        ))
    }

    async fn logout(&self) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Logout).await;
        self.logged_in.store(false, Ordering::Relaxed);
        info!("Mock Spotify logout");
        Ok(Acknowledgement::with_message("Mock logout successful"))
    }

    async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        self.latency.wait(Operation::Playlists).await;
        debug!(count = self.playlists.len(), "Fetched playlists");
        Ok(self.playlists.clone())
    }

    async fn get_playlist_by_id(&self, id: &str) -> Result<Option<Playlist>> {
        self.latency.wait(Operation::Playlist).await;
        let playlist = self.playlists.iter().find(|p| p.id == id).cloned();
        debug!(playlist_id = %id, found = playlist.is_some(), "Fetched playlist");
        Ok(playlist)
    }

    async fn get_recently_played(&self) -> Result<Vec<Track>> {
        self.latency.wait(Operation::RecentlyPlayed).await;
        Ok(self.recently_played.clone())
    }

    async fn get_saved_tracks(&self) -> Result<Vec<Track>> {
        self.latency.wait(Operation::SavedTracks).await;
        Ok(self.saved_tracks.clone())
    }

    async fn play_track(&self, track_id: &str) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Play).await;
        info!(track_id = %track_id, "Playing track");
        Ok(Acknowledgement::ok())
    }

    async fn pause(&self) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Pause).await;
        info!("Pausing playback");
        Ok(Acknowledgement::ok())
    }

    async fn resume(&self) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Resume).await;
        info!("Resuming playback");
        Ok(Acknowledgement::ok())
    }

    async fn next(&self) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Next).await;
        info!("Skipping to next track");
        Ok(Acknowledgement::ok())
    }

    async fn previous(&self) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Previous).await;
        info!("Going back to previous track");
        Ok(Acknowledgement::ok())
    }

    async fn set_volume(&self, percent: u8) -> Result<Acknowledgement> {
        self.latency.wait(Operation::Volume).await;
        info!(percent, "Setting volume");
        Ok(Acknowledgement::ok())
    }

    async fn search(&self, query: &str, facets: &[SearchFacet]) -> Result<SearchResults> {
        self.latency.wait(Operation::Search).await;
        let results = self.search_now(query, facets);
        debug!(
            query = %query,
            tracks = results.tracks.len(),
            artists = results.artists.len(),
            albums = results.albums.len(),
            "Search complete"
        );
        Ok(results)
    }
}

#[async_trait]
impl ContentSource for MockSpotify {
    fn kind(&self) -> SourceKind {
        SourceKind::Spotify
    }

    async fn load(&self, request: &LoadRequest) -> Result<LoadedContent> {
        match request {
            LoadRequest::Playlist(id) => self
                .get_playlist_by_id(id)
                .await?
                .map(LoadedContent::Collection)
                .ok_or_else(|| SourceError::PlaylistNotFound(id.clone())),
            LoadRequest::Track(id) => {
                self.latency.wait(Operation::TrackLookup).await;
                self.all_tracks()
                    .into_iter()
                    .find(|t| &t.id == id)
                    .map(LoadedContent::Single)
                    .ok_or_else(|| SourceError::TrackNotFound(id.clone()))
            }
            other => Err(SourceError::unsupported(SourceKind::Spotify, other)),
        }
    }
}

fn placeholder_image(label: &str) -> String {
    format!(
        "https://via.placeholder.com/300?text={}",
        label.replace(' ', "+")
    )
}

fn mock_track(id: &str, title: &str, artist: &str, album: &str, duration: u32) -> Track {
    Track::new(id, title, artist, album, duration).with_image(placeholder_image(title))
}

fn mock_playlists() -> Vec<Playlist> {
    vec![
        Playlist::new(
            "playlist1",
            "Top Hits",
            vec![
                mock_track("track1", "Summer Vibes", "DJ Sunshine", "Summer Collection", 215),
                mock_track("track2", "Midnight Dreams", "Luna", "Nocturnal", 187),
                mock_track("track3", "Mountain High", "The Climbers", "Elevation", 243),
            ],
        )
        .with_description("The hottest tracks right now")
        .with_image(placeholder_image("Top Hits")),
        Playlist::new(
            "playlist2",
            "Chill Lounge",
            vec![
                mock_track("track4", "Ocean Waves", "Aqua", "Deep Blue", 302),
                mock_track("track5", "Forest Whispers", "Nature Sounds", "Wilderness", 264),
                mock_track("track6", "Rainy Day", "Cloud Nine", "Weather Patterns", 198),
            ],
        )
        .with_description("Relaxing beats to unwind")
        .with_image(placeholder_image("Chill Lounge")),
    ]
}

fn mock_recently_played() -> Vec<Track> {
    vec![
        mock_track("track7", "City Lights", "Urban Beats", "Metropolis", 221),
        mock_track("track8", "Desert Wind", "Nomad", "Journeys", 275),
    ]
}

fn mock_saved_tracks() -> Vec<Track> {
    vec![
        mock_track("track9", "Starlight", "Cosmic", "Galaxy", 234),
        mock_track("track10", "Mountain Stream", "Nature Sounds", "Wilderness", 312),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spotify() -> MockSpotify {
        MockSpotify::with_latency(Latency::none())
    }

    #[test]
    fn all_tracks_deduplicated_in_order() {
        let ids: Vec<String> = spotify().all_tracks().into_iter().map(|t| t.id).collect();
        let expected: Vec<String> = (1..=10).map(|i| format!("track{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn matching_names_unique_first_seen() {
        let names = ["Nature Sounds", "Aqua", "Nature Sounds", "Cosmic"];
        let found = matching_names(names.into_iter(), "");
        let slugs: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(slugs, vec!["naturesounds", "aqua", "cosmic"]);
    }

    #[test]
    fn placeholder_image_encodes_spaces() {
        assert_eq!(
            placeholder_image("Top Hits"),
            "https://via.placeholder.com/300?text=Top+Hits"
        );
    }

    #[tokio::test]
    async fn login_logout_toggle_session() {
        let api = spotify();
        assert!(!api.is_logged_in());

        let ack = api.login().await.unwrap();
        assert!(ack.success);
        assert!(api.is_logged_in());

        api.logout().await.unwrap();
        assert!(!api.is_logged_in());
    }

    #[tokio::test]
    async fn playlist_lookup() {
        let api = spotify();
        let playlist = api.get_playlist_by_id("playlist2").await.unwrap().unwrap();
        assert_eq!(playlist.name, "Chill Lounge");
        assert_eq!(playlist.len(), 3);

        assert!(api.get_playlist_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn transport_commands_acknowledge() {
        let api = spotify();
        assert!(api.play_track("track1").await.unwrap().success);
        assert!(api.pause().await.unwrap().success);
        assert!(api.resume().await.unwrap().success);
        assert!(api.next().await.unwrap().success);
        assert!(api.previous().await.unwrap().success);
        assert!(api.set_volume(42).await.unwrap().success);
    }

    #[tokio::test]
    async fn search_only_fills_requested_facets() {
        let api = spotify();
        let results = api.search("nature", &[SearchFacet::Artist]).await.unwrap();

        assert!(results.tracks.is_empty());
        assert!(results.albums.is_empty());
        assert_eq!(results.artists, vec![NamedEntity::from_name("Nature Sounds")]);
    }

    #[tokio::test]
    async fn load_unknown_playlist_is_not_found() {
        let api = spotify();
        let err = api
            .load(&LoadRequest::Playlist("missing".into()))
            .await
            .unwrap_err();
        assert_eq!(err, SourceError::PlaylistNotFound("missing".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn track_lookup_waits_for_catalog_round_trip() {
        let latency = Latency::simulated();
        let api = MockSpotify::with_latency(latency);
        let start = tokio::time::Instant::now();

        let loaded = api.load(&LoadRequest::Track("track2".into())).await.unwrap();

        assert_eq!(start.elapsed(), latency.delay(Operation::TrackLookup));
        match loaded {
            LoadedContent::Single(track) => assert_eq!(track.title, "Midnight Dreams"),
            other => panic!("unexpected content: {other:?}"),
        }
    }
}
