//! User settings and their store

use crate::error::Result;
use crate::file::PreferenceFile;
use melody_core::SourceKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Streaming quality preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    Low,
    #[default]
    Medium,
    High,
}

impl AudioQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// User-facing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub crossfade: bool,

    /// Crossfade length in seconds
    pub crossfade_duration: u32,

    pub dark_mode: bool,

    pub accent_color: String,

    pub default_service: SourceKind,

    pub audio_quality: AudioQuality,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crossfade: false,
            crossfade_duration: 3,
            dark_mode: true,
            accent_color: "pink".to_string(),
            default_service: SourceKind::Spotify,
            audio_quality: AudioQuality::Medium,
        }
    }
}

impl Settings {
    /// Values applied by a reset
    ///
    /// Differs from `Settings::default()`: light mode with a green accent.
    /// Audio quality is carried over from `current`.
    pub fn reset_from(current: &Settings) -> Self {
        Self {
            crossfade: false,
            crossfade_duration: 3,
            dark_mode: false,
            accent_color: "green".to_string(),
            default_service: SourceKind::Spotify,
            audio_quality: current.audio_quality,
        }
    }
}

/// Settings held in memory, optionally backed by a JSON file
#[derive(Debug)]
pub struct SettingsStore {
    settings: Settings,
    file: Option<PreferenceFile<Settings>>,
}

impl SettingsStore {
    /// Load settings from `path`, starting from defaults when it is missing
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let file = PreferenceFile::new(path);
        let settings = file.load()?;
        Ok(Self {
            settings,
            file: Some(file),
        })
    }

    /// Store without a backing file
    pub fn in_memory() -> Self {
        Self {
            settings: Settings::default(),
            file: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace every field at once, then persist
    pub fn update(&mut self, settings: Settings) -> Result<()> {
        self.settings = settings;
        self.persist()
    }

    /// Restore reset values, then persist
    pub fn reset(&mut self) -> Result<()> {
        self.settings = Settings::reset_from(&self.settings);
        info!(accent = %self.settings.accent_color, "Settings reset");
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        match &self.file {
            Some(file) => file.save(&self.settings),
            None => Ok(()),
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
