/// Host configuration
use anyhow::{bail, Context, Result};
use melody_playback::PlayerConfig;
use melody_sources::Latency;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "melody.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MelodyConfig {
    #[serde(default)]
    pub latency: Latency,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub youtube: YouTubeSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,

    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YouTubeSettings {
    /// Origin passed to the embed player
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from(".melody/settings.json")
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from(".melody/player.json")
}

fn default_filter() -> String {
    "melody=info,melody_playback=info".to_string()
}

fn default_origin() -> String {
    "http://localhost:5173".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            preferences_path: default_preferences_path(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for YouTubeSettings {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl MelodyConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `melody.toml` is read if
    /// present. Environment variables override both, e.g.
    /// `MELODY_LATENCY__ENABLED=false`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("MELODY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.latency.scale.is_finite() || self.latency.scale < 0.0 {
            bail!("latency.scale must be a non-negative number");
        }
        if self.player.volume > 100 {
            bail!("player.volume must be between 0 and 100");
        }
        if self.youtube.origin.is_empty() {
            bail!("youtube.origin must not be empty");
        }
        Ok(())
    }
}
