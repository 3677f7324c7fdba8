//! Integration tests for the player store
//!
//! Drive the store through its public actions against the mock adapters
//! and hand-written failing fakes.

use async_trait::async_trait;
use melody_core::{Playlist, SearchFacet, SearchResults, SourceKind, Track};
use melody_playback::{Adapters, PlayerConfig, PlayerEvent, PlayerStore};
use melody_sources::{
    Acknowledgement, ContentSource, Latency, LoadRequest, LoadedContent, LocalLibrary,
    SourceError, SpotifyApi,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ===== Test Helpers =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Accept,
    Reject,
    Fail,
}

/// Remote API fake that records transport commands
struct FakeRemote {
    mode: Mode,
    calls: Mutex<Vec<String>>,
}

impl FakeRemote {
    fn new(mode: Mode) -> Arc<Self> {
        Arc::new(Self {
            mode,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: impl Into<String>) -> melody_sources::Result<Acknowledgement> {
        self.calls.lock().unwrap().push(call.into());
        match self.mode {
            Mode::Accept => Ok(Acknowledgement::ok()),
            Mode::Reject => Ok(Acknowledgement {
                success: false,
                message: None,
            }),
            Mode::Fail => Err(SourceError::remote("service unavailable")),
        }
    }
}

#[async_trait]
impl SpotifyApi for FakeRemote {
    async fn login(&self) -> melody_sources::Result<Acknowledgement> {
        self.respond("login")
    }

    async fn logout(&self) -> melody_sources::Result<Acknowledgement> {
        self.respond("logout")
    }

    async fn get_playlists(&self) -> melody_sources::Result<Vec<Playlist>> {
        Ok(Vec::new())
    }

    async fn get_playlist_by_id(&self, _id: &str) -> melody_sources::Result<Option<Playlist>> {
        Ok(None)
    }

    async fn get_recently_played(&self) -> melody_sources::Result<Vec<Track>> {
        Ok(Vec::new())
    }

    async fn get_saved_tracks(&self) -> melody_sources::Result<Vec<Track>> {
        Ok(Vec::new())
    }

    async fn play_track(&self, track_id: &str) -> melody_sources::Result<Acknowledgement> {
        self.respond(format!("play:{track_id}"))
    }

    async fn pause(&self) -> melody_sources::Result<Acknowledgement> {
        self.respond("pause")
    }

    async fn resume(&self) -> melody_sources::Result<Acknowledgement> {
        self.respond("resume")
    }

    async fn next(&self) -> melody_sources::Result<Acknowledgement> {
        self.respond("next")
    }

    async fn previous(&self) -> melody_sources::Result<Acknowledgement> {
        self.respond("previous")
    }

    async fn set_volume(&self, percent: u8) -> melody_sources::Result<Acknowledgement> {
        self.respond(format!("volume:{percent}"))
    }

    async fn search(
        &self,
        _query: &str,
        _facets: &[SearchFacet],
    ) -> melody_sources::Result<SearchResults> {
        match self.mode {
            Mode::Fail => Err(SourceError::remote("service unavailable")),
            _ => Ok(SearchResults::default()),
        }
    }
}

/// Content source that always fails
struct BrokenSource {
    kind: SourceKind,
}

#[async_trait]
impl ContentSource for BrokenSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn load(&self, _request: &LoadRequest) -> melody_sources::Result<LoadedContent> {
        Err(SourceError::remote("connection reset"))
    }
}

fn create_store() -> PlayerStore {
    PlayerStore::new(Adapters::mock(Latency::none()))
}

fn create_store_with_remote(remote: Arc<FakeRemote>) -> PlayerStore {
    PlayerStore::new(Adapters::mock(Latency::none()).with_remote(remote))
}

fn create_test_track(id: &str, title: &str) -> Track {
    Track::new(id, title, "Test Artist", "Test Album", 200)
}

fn queue_ids(store: &PlayerStore) -> Vec<String> {
    store.state().queue.iter().map(|t| t.id.clone()).collect()
}

fn queue_titles(store: &PlayerStore) -> Vec<String> {
    store.state().queue.iter().map(|t| t.title.clone()).collect()
}

fn assert_queue_excludes_current(store: &PlayerStore) {
    if let Some(current) = &store.state().current_track {
        assert!(
            !store.state().queue.iter().any(|t| t == current),
            "queue contains current track {}",
            current.id
        );
    }
}

// ===== Local catalog =====

#[tokio::test]
async fn load_local_tracks_uses_catalog_order() {
    let catalog = vec![
        create_test_track("a", "First"),
        create_test_track("b", "Second"),
        create_test_track("c", "Third"),
    ];
    let adapters =
        Adapters::mock(Latency::none()).with_local(Arc::new(LocalLibrary::new(catalog)));
    let mut store = PlayerStore::new(adapters);

    store.load_local_tracks().await;

    assert_eq!(store.state().current_track_id(), Some("a"));
    assert_eq!(queue_ids(&store), vec!["b", "c"]);
    assert_eq!(store.state().source, SourceKind::Local);
}

#[tokio::test]
async fn load_local_tracks_from_empty_catalog_fails() {
    let adapters = Adapters::mock(Latency::none())
        .with_local(Arc::new(LocalLibrary::new(Vec::new())));
    let mut store = PlayerStore::new(adapters);

    store.load_local_tracks().await;

    let state = store.state();
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load local tracks: No tracks available in the local library")
    );
    assert!(state.current_track.is_none());
}

#[tokio::test]
async fn load_local_track_emits_events() {
    let mut store = create_store();
    store.load_local_track("track2").await;

    assert_eq!(
        store.drain_events(),
        vec![
            PlayerEvent::TrackChanged {
                track_id: "track2".to_string(),
                previous_track_id: None,
            },
            PlayerEvent::StateChanged { is_playing: true },
        ]
    );
    assert!(!store.has_pending_events());
}

// ===== Spotify playlists =====

#[tokio::test]
async fn load_playlist_into_empty_player() {
    let mut store = create_store();
    store.load_playlist("playlist1").await;

    let state = store.state();
    assert_eq!(state.source, SourceKind::Spotify);
    assert_eq!(state.current_track_id(), Some("track1"));
    assert_eq!(queue_ids(&store), vec!["track2", "track3"]);
    assert_eq!(state.current_playlist.as_ref().unwrap().name, "Top Hits");
    assert!(!state.is_playing);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn load_playlist_keeps_same_id_from_another_source() {
    let mut store = create_store();
    store.load_local_track("track3").await;
    store.load_playlist("playlist1").await;

    let state = store.state();
    assert_eq!(state.current_track.as_ref().unwrap().title, "Ambient Melody");
    assert_eq!(
        queue_titles(&store),
        vec!["Summer Vibes", "Midnight Dreams", "Mountain High"]
    );
    assert_eq!(state.queue.len(), 3);
}

#[tokio::test]
async fn load_unknown_playlist_leaves_state_untouched() {
    let mut store = create_store();
    store.load_local_tracks().await;
    let before = store.state().clone();

    store.load_playlist("missing").await;

    let state = store.state();
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load playlist: Playlist not found: missing")
    );
    assert!(!state.loading);
    assert_eq!(state.source, SourceKind::Local);
    assert_eq!(state.current_track, before.current_track);
    assert_eq!(state.queue, before.queue);
}

#[tokio::test]
async fn broken_source_reports_labelled_error() {
    let adapters = Adapters::mock(Latency::none()).with_spotify(Arc::new(BrokenSource {
        kind: SourceKind::Spotify,
    }));
    let mut store = PlayerStore::new(adapters);

    store.load_playlist("playlist1").await;

    assert_eq!(
        store.state().error.as_deref(),
        Some("Failed to load playlist: Remote service error: connection reset")
    );
    assert!(!store.state().loading);
}

// ===== YouTube =====

#[tokio::test]
async fn load_youtube_video_replaces_queue() {
    let mut store = create_store();
    store.load_local_tracks().await;

    store
        .load_youtube_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    let state = store.state();
    assert_eq!(state.source, SourceKind::Youtube);
    assert_eq!(state.current_track_id(), Some("yt-dQw4w9WgXcQ"));
    assert_eq!(state.youtube_video_id.as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(
        state.current_track.as_ref().unwrap().title,
        "Never Gonna Give You Up"
    );
    assert!(state.is_playing);
    assert!(state.queue.is_empty());
    assert!(state.current_playlist.is_none());
}

#[tokio::test]
async fn invalid_youtube_url_surfaces_resolver_error() {
    let mut store = create_store();
    store.load_youtube_video("https://example.com").await;

    let state = store.state();
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load YouTube video: Invalid YouTube URL: https://example.com")
    );
    assert!(!state.loading);
    assert_eq!(state.source, SourceKind::Local);
}

#[tokio::test]
async fn switching_away_from_youtube_clears_video_id() {
    let mut store = create_store();
    store.load_youtube_video("https://youtu.be/fJ9rUzIMcZQ").await;
    store.load_local_track("track1").await;

    assert!(store.state().youtube_video_id.is_none());
    assert_eq!(store.state().source, SourceKind::Local);
}

#[tokio::test]
async fn previous_never_crosses_into_another_source() {
    let mut store = create_store();
    store
        .load_youtube_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;
    store.load_local_track("track1").await;

    store.previous_track().await;

    let state = store.state();
    assert_eq!(state.current_track_id(), Some("track1"));
    assert_eq!(state.source, SourceKind::Local);
    assert!(state.youtube_video_id.is_none());
    assert!(store.history().is_empty());
}

#[tokio::test]
async fn previous_video_restores_embed_id() {
    let mut store = create_store();
    store
        .load_youtube_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;
    store.load_youtube_video("https://youtu.be/fJ9rUzIMcZQ").await;

    store.previous_track().await;
    let state = store.state();
    assert_eq!(state.current_track_id(), Some("yt-dQw4w9WgXcQ"));
    assert_eq!(state.youtube_video_id.as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(queue_ids(&store), vec!["yt-fJ9rUzIMcZQ"]);

    store.next_track().await;
    let state = store.state();
    assert_eq!(state.current_track_id(), Some("yt-fJ9rUzIMcZQ"));
    assert_eq!(state.youtube_video_id.as_deref(), Some("fJ9rUzIMcZQ"));
    assert_eq!(state.source, SourceKind::Youtube);
}

// ===== Remote acknowledgements =====

#[tokio::test]
async fn acknowledgements_only_for_spotify_source() {
    let remote = FakeRemote::new(Mode::Accept);
    let mut store = create_store_with_remote(remote.clone());

    store.load_local_tracks().await;
    store.next_track().await;
    store.toggle_play().await;
    store.set_volume(40).await;
    assert!(remote.calls().is_empty());

    store.load_playlist("playlist2").await;
    store.next_track().await;
    store.toggle_play().await;
    store.set_volume(55).await;

    assert_eq!(
        remote.calls(),
        vec!["play:track4", "next", "pause", "volume:55"]
    );
}

#[tokio::test]
async fn rejected_play_keeps_current_track() {
    let remote = FakeRemote::new(Mode::Reject);
    let mut store = create_store_with_remote(remote);

    store.load_playlist("playlist1").await;
    let track = store.state().queue.iter().next().cloned().unwrap();
    store.play_track(track).await;

    let state = store.state();
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to play track: Remote service rejected play")
    );
    assert_eq!(state.current_track_id(), Some("track1"));
    assert!(!state.is_playing);
}

#[tokio::test]
async fn failed_next_puts_track_back() {
    let remote = FakeRemote::new(Mode::Fail);
    let mut store = create_store_with_remote(remote);

    store.load_playlist("playlist1").await;
    store.next_track().await;

    let state = store.state();
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to play next track: Remote service error: service unavailable")
    );
    assert_eq!(state.current_track_id(), Some("track1"));
    assert_eq!(queue_ids(&store), vec!["track2", "track3"]);
    assert!(!state.loading);
}

#[tokio::test]
async fn failed_volume_keeps_level() {
    let remote = FakeRemote::new(Mode::Fail);
    let mut store = create_store_with_remote(remote);
    store.load_playlist("playlist1").await;

    store.set_volume(10).await;

    assert_eq!(store.state().volume.level(), 80);
    assert!(store
        .state()
        .error
        .as_deref()
        .unwrap()
        .starts_with("Failed to set volume"));
}

#[tokio::test]
async fn next_error_is_cleared_by_following_action() {
    let remote = FakeRemote::new(Mode::Fail);
    let mut store = create_store_with_remote(remote);
    store.load_playlist("playlist1").await;
    store.next_track().await;
    assert!(store.state().error.is_some());

    store.load_local_track("track1").await;
    assert!(store.state().error.is_none());
}

// ===== History =====

#[tokio::test]
async fn previous_without_history_resumes_current() {
    let mut store = create_store();
    store.load_local_tracks().await;
    assert!(!store.state().is_playing);

    store.previous_track().await;

    assert_eq!(store.state().current_track_id(), Some("track1"));
    assert!(store.state().is_playing);
}

#[tokio::test]
async fn previous_on_empty_player_is_noop() {
    let mut store = create_store();
    store.previous_track().await;

    assert!(store.state().current_track.is_none());
    assert!(!store.state().is_playing);
    assert!(!store.has_pending_events());
}

#[tokio::test]
async fn history_is_bounded_by_config() {
    let mut store = PlayerStore::with_config(
        Adapters::mock(Latency::none()),
        PlayerConfig {
            history_size: 2,
            volume: 80,
        },
    );
    store.load_local_tracks().await;
    for _ in 0..4 {
        store.next_track().await;
    }

    let history: Vec<&str> = store.history().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(history, vec!["track3", "track4"]);
    assert_eq!(store.state().current_track_id(), Some("track5"));
}

#[tokio::test]
async fn queue_never_holds_current_track() {
    let mut store = create_store();

    store.load_local_track("track2").await;
    assert_queue_excludes_current(&store);
    store.load_playlist("playlist1").await;
    assert_queue_excludes_current(&store);
    store.next_track().await;
    assert_queue_excludes_current(&store);
    store.previous_track().await;
    assert_queue_excludes_current(&store);
    store.load_local_tracks().await;
    assert_queue_excludes_current(&store);
    store.toggle_shuffle();
    store.next_track().await;
    assert_queue_excludes_current(&store);
}

// ===== Search =====

#[tokio::test]
async fn search_returns_all_facets() {
    let mut store = create_store();
    let results = store.search("wilderness").await;

    assert!(results.tracks.is_empty());
    assert_eq!(results.albums.len(), 1);
    assert_eq!(results.albums[0].id, "wilderness");
    assert!(store.state().error.is_none());
}

#[tokio::test]
async fn failed_search_returns_empty_results() {
    let remote = FakeRemote::new(Mode::Fail);
    let mut store = create_store_with_remote(remote);

    let results = store.search("anything").await;

    assert!(results.is_empty());
    assert_eq!(
        store.state().error.as_deref(),
        Some("Search failed: Remote service error: service unavailable")
    );
    assert!(!store.state().loading);
}

// ===== Simulated latency =====

#[tokio::test(start_paused = true)]
async fn actions_wait_for_simulated_latency() {
    let mut store = PlayerStore::new(Adapters::mock(Latency::simulated()));

    let start = tokio::time::Instant::now();
    store.load_playlist("playlist1").await;
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(800) && elapsed < Duration::from_millis(900));

    let start = tokio::time::Instant::now();
    store.search("summer").await;
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1200) && elapsed < Duration::from_millis(1300));
    assert!(!store.state().loading);
}
