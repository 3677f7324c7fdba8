//! Melody Player - Settings
//!
//! User settings (crossfade, theme, default service, audio quality) and the
//! JSON key-value files they and the player preferences are stored in.
//!
//! # Example
//!
//! ```rust
//! use melody_settings::SettingsStore;
//!
//! let mut store = SettingsStore::in_memory();
//! assert_eq!(store.settings().accent_color, "pink");
//!
//! store.reset().unwrap();
//! assert_eq!(store.settings().accent_color, "green");
//! ```

#![forbid(unsafe_code)]

mod error;
mod file;
mod settings;

// Public exports
pub use error::{Result, SettingsError};
pub use file::PreferenceFile;
pub use settings::{AudioQuality, Settings, SettingsStore};
