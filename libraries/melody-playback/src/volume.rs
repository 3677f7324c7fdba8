//! Volume level
//!
//! The store keeps volume as an integer percentage (0-100).

use serde::{Deserialize, Serialize};

/// Volume level, always within 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Volume {
    level: u8,
}

impl Volume {
    /// Maximum level
    pub const MAX: u8 = 100;

    /// Create a volume, clamping to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(Self::MAX),
        }
    }

    /// Current level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(80)
    }
}

impl From<u8> for Volume {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.level
    }
}
