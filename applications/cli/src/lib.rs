//! Melody Player command-line host
//!
//! Owns one `PlayerStore` per invocation, injects the mock adapters, and
//! persists settings and player preferences between runs.

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command, SettingsAction};
pub use commands::{run, Outcome};
pub use config::MelodyConfig;
