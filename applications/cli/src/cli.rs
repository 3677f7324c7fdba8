//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "melody")]
#[command(about = "Melody Player command-line host", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MELODY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip simulated network latency
    #[arg(long, global = true)]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the local catalog
    Tracks,
    /// Search the local catalog by title or artist
    Find {
        /// Case-insensitive search text
        query: String,
    },
    /// Play one local track
    Play {
        /// Track id (e.g. track1)
        id: String,
    },
    /// Queue the whole local catalog
    PlayAll,
    /// Load a Spotify playlist
    Playlist {
        /// Playlist id (e.g. playlist1)
        id: String,
    },
    /// Resolve and play a YouTube URL
    Youtube {
        /// Watch, short or embed URL
        url: String,
    },
    /// Print the embed URL for a video
    Embed {
        /// 11-character video id
        video_id: String,
    },
    /// Search Spotify tracks, artists and albums
    Search {
        /// Search text
        query: String,
    },
    /// Set and remember the volume
    Volume {
        /// Level, 0-100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
    },
    /// Toggle and remember shuffle
    Shuffle,
    /// Toggle and remember repeat
    Repeat,
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SettingsAction {
    /// Print current settings
    Show,
    /// Restore reset values
    Reset,
    /// Change the accent color
    SetAccent {
        color: String,
    },
    /// Turn dark mode on or off
    DarkMode {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}
