//! Player store - playback state machine
//!
//! Coordinates queue, history, volume, shuffle and source switching on top
//! of the injected adapters. Every action that calls an adapter runs inside
//! a loading scope: `loading` is set and `error` cleared on entry, and
//! `loading` is reset on every exit path. Failures never reach the caller;
//! they are recorded in `PlayerState::error` with an operation label.

use crate::{
    adapters::Adapters,
    error::{PlaybackError, Result},
    events::PlayerEvent,
    history::History,
    types::{PlayerConfig, PlayerPreferences, PlayerState},
    volume::Volume,
};
use melody_core::{SearchFacet, SearchResults, SourceKind, Track};
use melody_sources::{Acknowledgement, LoadRequest, LoadedContent};
use rand::Rng;
use tracing::{debug, error, info};

/// Where playback starts after a collection is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Start {
    /// Always start from the first track of the collection
    First,
    /// Keep the current track; start from the first only if nothing is loaded
    KeepCurrent,
}

/// Payload-free remote transport commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transport {
    Pause,
    Resume,
    Next,
    Previous,
}

impl Transport {
    fn as_str(self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

/// Playback state machine
///
/// Owns the single `PlayerState` of a session. Actions take `&mut self`,
/// so at most one action is in flight at a time.
pub struct PlayerStore {
    state: PlayerState,
    history: History,
    adapters: Adapters,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerStore {
    /// Create a store with default configuration
    pub fn new(adapters: Adapters) -> Self {
        Self::with_config(adapters, PlayerConfig::default())
    }

    /// Create a store with explicit configuration
    pub fn with_config(adapters: Adapters, config: PlayerConfig) -> Self {
        let state = PlayerState {
            volume: Volume::new(config.volume),
            ..PlayerState::default()
        };

        Self {
            state,
            history: History::new(config.history_size),
            adapters,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Load a Spotify playlist into the queue
    ///
    /// Keeps the current track if one is set; otherwise the first playlist
    /// track becomes current.
    pub async fn load_playlist(&mut self, playlist_id: &str) {
        debug!(playlist_id, "Loading playlist");
        self.begin();
        let request = LoadRequest::Playlist(playlist_id.to_string());
        let result = self.load_into(SourceKind::Spotify, request, Start::KeepCurrent).await;
        self.finish("Failed to load playlist", result);
    }

    /// Play a single track from the local catalog, discarding the queue
    pub async fn load_local_track(&mut self, track_id: &str) {
        debug!(track_id, "Loading local track");
        self.begin();
        let request = LoadRequest::Track(track_id.to_string());
        let result = self.load_into(SourceKind::Local, request, Start::First).await;
        self.finish("Failed to load track", result);
    }

    /// Load the whole local catalog as the "Local Tracks" playlist
    pub async fn load_local_tracks(&mut self) {
        debug!("Loading local catalog");
        self.begin();
        let result = self.load_into(SourceKind::Local, LoadRequest::AllTracks, Start::First).await;
        self.finish("Failed to load local tracks", result);
    }

    /// Resolve a YouTube URL and play the video
    pub async fn load_youtube_video(&mut self, url: &str) {
        debug!(url, "Loading YouTube video");
        self.begin();
        let request = LoadRequest::Url(url.to_string());
        let result = self.load_into(SourceKind::Youtube, request, Start::First).await;
        self.finish("Failed to load YouTube video", result);
    }

    // ===== Playback Control =====

    /// Make `track` the current track and start playing
    ///
    /// Sends the remote play command only while the source is Spotify.
    pub async fn play_track(&mut self, track: Track) {
        self.begin();
        let result = self.play(track).await;
        self.finish("Failed to play track", result);
    }

    /// Pause or resume
    ///
    /// Does nothing when no track is loaded.
    pub async fn toggle_play(&mut self) {
        if self.state.current_track.is_none() {
            return;
        }

        self.begin();
        let result = self.flip_playing().await;
        self.finish("Playback control failed", result);
    }

    /// Play the head of the queue
    ///
    /// Does nothing when the queue is empty. If playing fails the track is
    /// put back at the head of the queue.
    pub async fn next_track(&mut self) {
        let Some(track) = self.state.queue.pop_front() else {
            return;
        };
        self.emit_queue_changed();

        self.begin();
        let result = match self.play(track.clone()).await {
            Ok(()) => self.acknowledge_remote(Transport::Next).await,
            Err(e) => {
                self.state.queue.push_front(track);
                self.emit_queue_changed();
                Err(e)
            }
        };
        self.finish("Failed to play next track", result);
    }

    /// Go back to the most recently played track
    ///
    /// The current track returns to the head of the queue. Without history
    /// the current track simply keeps playing. Does nothing when neither a
    /// current track nor history exists.
    pub async fn previous_track(&mut self) {
        if self.state.current_track.is_none() && self.history.is_empty() {
            return;
        }

        self.begin();
        let result = self.step_back().await;
        self.finish("Failed to play previous track", result);
    }

    /// Set the volume (clamped to 0-100)
    pub async fn set_volume(&mut self, level: u8) {
        let volume = Volume::new(level);

        self.begin();
        let result = self.apply_volume(volume).await;
        self.finish("Failed to set volume", result);
    }

    /// Flip the repeat flag
    pub fn toggle_repeat(&mut self) {
        self.state.repeat = !self.state.repeat;
        debug!(repeat = self.state.repeat, "Repeat toggled");
    }

    /// Flip the shuffle flag, shuffling the queue when enabling
    pub fn toggle_shuffle(&mut self) {
        self.toggle_shuffle_with(&mut rand::thread_rng());
    }

    /// Flip the shuffle flag using the given random source
    ///
    /// Disabling never restores the previous order.
    pub fn toggle_shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state.shuffle = !self.state.shuffle;
        debug!(shuffle = self.state.shuffle, "Shuffle toggled");

        if self.state.shuffle && self.state.queue.len() > 1 {
            self.state.queue.shuffle(rng);
            self.emit_queue_changed();
        }
    }

    /// Search the remote service across all facets
    ///
    /// Returns empty results on failure; the error is recorded in state.
    pub async fn search(&mut self, query: &str) -> SearchResults {
        debug!(query, "Searching");
        self.begin();
        let result = self
            .adapters
            .remote
            .search(query, &SearchFacet::ALL)
            .await
            .map_err(PlaybackError::from);
        self.finish("Search failed", result).unwrap_or_default()
    }

    // ===== Preferences =====

    /// Persistable subset of the state
    pub fn preferences(&self) -> PlayerPreferences {
        PlayerPreferences {
            volume: self.state.volume,
            repeat: self.state.repeat,
            shuffle: self.state.shuffle,
        }
    }

    /// Restore persisted preferences
    ///
    /// Sets the flags directly; the queue is not reshuffled.
    pub fn apply_preferences(&mut self, prefs: PlayerPreferences) {
        self.state.repeat = prefs.repeat;
        self.state.shuffle = prefs.shuffle;
        if self.state.volume != prefs.volume {
            self.state.volume = prefs.volume;
            self.emit_volume_changed();
        }
    }

    // ===== State Queries =====

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Whether a track is queued
    pub fn has_next(&self) -> bool {
        !self.state.queue.is_empty()
    }

    /// Whether history has a track to go back to
    pub fn has_previous(&self) -> bool {
        !self.history.is_empty()
    }

    /// Played tracks, oldest first
    pub fn history(&self) -> Vec<&Track> {
        self.history.get_all()
    }

    /// Adapter handles this store talks to
    pub fn adapters(&self) -> &Adapters {
        &self.adapters
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal: action bodies =====

    async fn load_into(&mut self, kind: SourceKind, request: LoadRequest, start: Start) -> Result<()> {
        let content = self.adapters.source(kind).load(&request).await?;
        self.apply_content(kind, content, start)
    }

    /// Apply loaded content
    ///
    /// The source is switched after advancing, so the track displaced from
    /// the old source is dropped along with that source's history.
    fn apply_content(&mut self, kind: SourceKind, content: LoadedContent, start: Start) -> Result<()> {
        match content {
            LoadedContent::Single(track) => {
                self.state.current_playlist = None;
                self.clear_queue();
                self.advance_to(track);
                self.set_source(kind);
                self.state.youtube_video_id = None;
                self.set_playing(true);
            }
            LoadedContent::Video { track, video_id } => {
                self.state.current_playlist = None;
                self.clear_queue();
                self.advance_to(track);
                self.set_source(kind);
                self.state.youtube_video_id = Some(video_id);
                self.set_playing(true);
            }
            LoadedContent::Collection(playlist) => {
                info!(
                    playlist_id = %playlist.id,
                    tracks = playlist.len(),
                    source = %kind,
                    "Playlist loaded"
                );
                self.state.queue.replace(playlist.tracks.iter().cloned());

                match self.state.current_track.clone() {
                    Some(current) if start == Start::KeepCurrent => {
                        self.state.queue.remove(&current);
                    }
                    _ => {
                        if let Some(first) = self.state.queue.pop_front() {
                            self.advance_to(first);
                        }
                    }
                }

                self.set_source(kind);
                self.state.youtube_video_id = None;
                self.state.current_playlist = Some(playlist);
                self.emit_queue_changed();
            }
        }
        Ok(())
    }

    async fn play(&mut self, track: Track) -> Result<()> {
        if self.state.source == SourceKind::Spotify {
            check("play", self.adapters.remote.play_track(&track.id).await)?;
        }

        info!(track_id = %track.id, title = %track.title, "Playing track");
        self.advance_to(track);
        self.sync_video_id();
        self.set_playing(true);
        Ok(())
    }

    async fn flip_playing(&mut self) -> Result<()> {
        if self.state.is_playing {
            self.acknowledge_remote(Transport::Pause).await?;
        } else {
            self.acknowledge_remote(Transport::Resume).await?;
        }
        self.set_playing(!self.state.is_playing);
        Ok(())
    }

    async fn step_back(&mut self) -> Result<()> {
        self.acknowledge_remote(Transport::Previous).await?;

        if let Some(previous) = self.history.pop() {
            if let Some(current) = self.state.current_track.clone() {
                self.state.queue.push_front(current);
                self.emit_queue_changed();
            }
            self.replace_current(previous);
            self.sync_video_id();
        }

        if self.state.current_track.is_some() {
            self.set_playing(true);
        }
        Ok(())
    }

    async fn apply_volume(&mut self, volume: Volume) -> Result<()> {
        if self.state.source == SourceKind::Spotify {
            check("volume", self.adapters.remote.set_volume(volume.level()).await)?;
        }
        self.state.volume = volume;
        self.emit_volume_changed();
        Ok(())
    }

    /// Send a payload-free transport command when the source is Spotify
    async fn acknowledge_remote(&self, command: Transport) -> Result<()> {
        if self.state.source != SourceKind::Spotify {
            return Ok(());
        }

        let remote = &self.adapters.remote;
        let response = match command {
            Transport::Pause => remote.pause().await,
            Transport::Resume => remote.resume().await,
            Transport::Next => remote.next().await,
            Transport::Previous => remote.previous().await,
        };
        check(command.as_str(), response)
    }

    // ===== Internal: state mutation =====

    /// Enter the loading scope
    fn begin(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    /// Leave the loading scope, recording a failure under `label`
    fn finish<T>(&mut self, label: &str, result: Result<T>) -> Option<T> {
        self.state.loading = false;
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                let message = format!("{label}: {e}");
                error!(error = %e, "{label}");
                self.state.error = Some(message.clone());
                self.pending_events.push(PlayerEvent::Error { message });
                None
            }
        }
    }

    /// Make `track` current, remembering the displaced track in history
    fn advance_to(&mut self, track: Track) {
        if let Some(previous) = self.replace_current(track) {
            if self.state.current_track.as_ref() != Some(&previous) {
                self.history.push(previous);
            }
        }
    }

    /// Swap the current track, keeping it out of the queue
    fn replace_current(&mut self, track: Track) -> Option<Track> {
        if self.state.queue.remove(&track) > 0 {
            self.emit_queue_changed();
        }

        let track_id = track.id.clone();
        let previous = self.state.current_track.replace(track);
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id,
            previous_track_id: previous.as_ref().map(|t| t.id.clone()),
        });
        previous
    }

    fn clear_queue(&mut self) {
        if !self.state.queue.is_empty() {
            self.state.queue.clear();
            self.emit_queue_changed();
        }
    }

    /// Switch source, forgetting history recorded under the old one
    fn set_source(&mut self, kind: SourceKind) {
        if self.state.source != kind {
            debug!(from = %self.state.source, to = %kind, "Source changed");
            self.state.source = kind;
            self.history.clear();
            self.pending_events.push(PlayerEvent::SourceChanged { source: kind });
        }
    }

    /// Point the embed id at the current video while on YouTube
    fn sync_video_id(&mut self) {
        if self.state.source == SourceKind::Youtube {
            self.state.youtube_video_id = self
                .state
                .current_track
                .as_ref()
                .and_then(Track::video_id)
                .map(str::to_string);
        }
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.state.is_playing != is_playing {
            self.state.is_playing = is_playing;
            self.pending_events.push(PlayerEvent::StateChanged { is_playing });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.state.queue.len(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.state.volume.level(),
        });
    }
}

/// Turn a remote acknowledgement into a result
fn check(command: &'static str, response: melody_sources::Result<Acknowledgement>) -> Result<()> {
    let ack = response?;
    if ack.success {
        debug!(command, message = ?ack.message, "Remote acknowledged");
        Ok(())
    } else {
        Err(PlaybackError::Rejected { command })
    }
}
