//! Upcoming-tracks queue
//!
//! FIFO of tracks that will play after the current one. The current
//! track itself is never part of the queue.

use crate::shuffle::shuffle_tracks;
use melody_core::Track;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered upcoming tracks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue {
    tracks: VecDeque<Track>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue
    pub fn replace(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks = tracks.into_iter().collect();
    }

    /// Remove every track
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Take the next track to play
    pub fn pop_front(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    /// Put a track back at the head
    pub fn push_front(&mut self, track: Track) {
        self.tracks.push_front(track);
    }

    /// Remove every copy of `track`, returning how many were removed
    ///
    /// Ids are only unique within one source, so entries are matched on
    /// the whole track.
    pub fn remove(&mut self, track: &Track) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| t != track);
        before - self.tracks.len()
    }

    /// Shuffle in place (no-op for fewer than two tracks)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_tracks(self.tracks.make_contiguous(), rng);
    }

    /// Iterate in play order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl FromIterator<Track> for Queue {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}
