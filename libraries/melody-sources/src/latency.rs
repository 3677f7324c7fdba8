//! Simulated network latency
//!
//! Mock adapters sleep on the tokio timer before answering so that
//! callers see the same suspension points a real API would introduce.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Adapter operations with a simulated round-trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Logout,
    Playlists,
    Playlist,
    /// Single track lookup in a remote catalog
    TrackLookup,
    RecentlyPlayed,
    SavedTracks,
    Play,
    Pause,
    Resume,
    Next,
    Previous,
    Volume,
    Search,
    ResolveVideo,
}

impl Operation {
    /// Unscaled delay for this operation
    pub fn base_delay(self) -> Duration {
        let ms = match self {
            Self::Login => 800,
            Self::Logout => 500,
            Self::Playlists => 1000,
            Self::Playlist | Self::TrackLookup | Self::ResolveVideo => 800,
            Self::RecentlyPlayed => 700,
            Self::SavedTracks => 900,
            Self::Play | Self::Next | Self::Previous => 300,
            Self::Pause | Self::Resume => 200,
            Self::Volume => 100,
            Self::Search => 1200,
        };
        Duration::from_millis(ms)
    }
}

/// Upper bound on the latency multiplier
const MAX_SCALE: f32 = 100.0;

/// Latency profile applied by mock adapters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Latency {
    /// Whether to sleep at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Multiplier applied to every base delay
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_enabled() -> bool {
    true
}

fn default_scale() -> f32 {
    1.0
}

impl Latency {
    /// Realistic delays
    pub const fn simulated() -> Self {
        Self {
            enabled: true,
            scale: 1.0,
        }
    }

    /// No delays at all
    pub const fn none() -> Self {
        Self {
            enabled: false,
            scale: 0.0,
        }
    }

    /// Effective delay for an operation
    ///
    /// Non-finite or negative scales collapse to zero. Scales above 100
    /// are capped.
    pub fn delay(&self, op: Operation) -> Duration {
        if !self.enabled || !self.scale.is_finite() || self.scale <= 0.0 {
            return Duration::ZERO;
        }
        let base_ms = op.base_delay().as_millis() as f64;
        let scaled = base_ms * f64::from(self.scale.min(MAX_SCALE));
        Duration::from_millis(scaled.round() as u64)
    }

    /// Sleep for the operation's delay
    pub async fn wait(&self, op: Operation) {
        let delay = self.delay(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}
