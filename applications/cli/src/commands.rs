//! Command handlers
//!
//! Each invocation builds a fresh store, restores the persisted player
//! preferences, runs one action and writes the preferences back.

use crate::cli::{Command, SettingsAction};
use crate::config::MelodyConfig;
use anyhow::{Context, Result};
use melody_playback::{Adapters, PlayerPreferences, PlayerStore};
use melody_settings::{PreferenceFile, Settings, SettingsStore};
use melody_sources::{embed_url, LocalLibrary};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Result of one command
#[derive(Debug, Clone)]
pub struct Outcome {
    /// JSON printed to stdout
    pub output: Value,

    /// Error recorded by the store, if the action failed
    pub error: Option<String>,
}

impl Outcome {
    fn ok(output: impl Serialize) -> Result<Self> {
        Ok(Self {
            output: serde_json::to_value(output)?,
            error: None,
        })
    }
}

/// Actions that go through the player store
#[derive(Debug, Clone)]
enum PlayerAction {
    Play(String),
    PlayAll,
    Playlist(String),
    Youtube(String),
    Search(String),
    Volume(u8),
    Shuffle,
    Repeat,
}

/// Run a single command against the configured adapters and files
pub async fn run(command: Command, config: &MelodyConfig) -> Result<Outcome> {
    debug!(?command, "Running command");

    let action = match command {
        Command::Tracks => return Outcome::ok(LocalLibrary::builtin().list_all()),
        Command::Find { query } => return Outcome::ok(LocalLibrary::builtin().search(&query)),
        Command::Embed { video_id } => {
            return Outcome::ok(json!({
                "videoId": video_id,
                "embedUrl": embed_url(&video_id, &config.youtube.origin),
            }))
        }
        Command::Settings { action } => return run_settings(action, config),
        Command::Play { id } => PlayerAction::Play(id),
        Command::PlayAll => PlayerAction::PlayAll,
        Command::Playlist { id } => PlayerAction::Playlist(id),
        Command::Youtube { url } => PlayerAction::Youtube(url),
        Command::Search { query } => PlayerAction::Search(query),
        Command::Volume { level } => PlayerAction::Volume(level),
        Command::Shuffle => PlayerAction::Shuffle,
        Command::Repeat => PlayerAction::Repeat,
    };

    run_player(action, config).await
}

async fn run_player(action: PlayerAction, config: &MelodyConfig) -> Result<Outcome> {
    let preferences = PreferenceFile::<PlayerPreferences>::new(&config.storage.preferences_path);
    let mut store = PlayerStore::with_config(Adapters::mock(config.latency), config.player.clone());
    store.apply_preferences(preferences.load().context("Failed to load player preferences")?);
    store.drain_events();

    let mut extra = None;
    match action {
        PlayerAction::Play(id) => store.load_local_track(&id).await,
        PlayerAction::PlayAll => store.load_local_tracks().await,
        PlayerAction::Playlist(id) => store.load_playlist(&id).await,
        PlayerAction::Youtube(url) => {
            store.load_youtube_video(&url).await;
            extra = store
                .state()
                .youtube_video_id
                .as_deref()
                .map(|id| ("embedUrl", json!(embed_url(id, &config.youtube.origin))));
        }
        PlayerAction::Search(query) => {
            let results = store.search(&query).await;
            extra = Some(("results", serde_json::to_value(results)?));
        }
        PlayerAction::Volume(level) => store.set_volume(level).await,
        PlayerAction::Shuffle => store.toggle_shuffle(),
        PlayerAction::Repeat => store.toggle_repeat(),
    }

    preferences
        .save(&store.preferences())
        .context("Failed to save player preferences")?;

    let events = store.drain_events();
    let state = store.state();
    let mut output = json!({
        "state": state,
        "events": events,
    });
    if let Some((key, value)) = extra {
        output[key] = value;
    }

    Ok(Outcome {
        output,
        error: state.error.clone(),
    })
}

fn run_settings(action: SettingsAction, config: &MelodyConfig) -> Result<Outcome> {
    let mut store = SettingsStore::load(&config.storage.settings_path)
        .context("Failed to load settings")?;

    match action {
        SettingsAction::Show => {}
        SettingsAction::Reset => store.reset()?,
        SettingsAction::SetAccent { color } => {
            info!(color = %color, "Changing accent color");
            store.update(Settings {
                accent_color: color,
                ..store.settings().clone()
            })?;
        }
        SettingsAction::DarkMode { enabled } => {
            store.update(Settings {
                dark_mode: enabled,
                ..store.settings().clone()
            })?;
        }
    }

    Outcome::ok(store.settings())
}
