//! Queue shuffling
//!
//! Uniform Fisher-Yates permutation of the upcoming tracks.

use melody_core::Track;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle tracks in place
///
/// Slices of length 0 or 1 are left untouched.
pub fn shuffle_tracks<R: Rng + ?Sized>(tracks: &mut [Track], rng: &mut R) {
    if tracks.len() <= 1 {
        return;
    }
    tracks.shuffle(rng);
}
