//! Per-track audio descriptors
//!
//! The descriptor record is supplied by an external catalog collaborator;
//! this crate does not care how it was fetched. Missing fields are never
//! errors: every field has a documented fallback applied at
//! deserialization time.

use serde::{Deserialize, Serialize};

/// Audio descriptors for a single track
///
/// Values outside the declared ranges are accepted as-is; the scoring
/// pipeline clamps where needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioDescriptorSet {
    /// Tempo in beats per minute, typically 40-250
    pub tempo: f64,
    /// Danceability in [0, 1]
    pub danceability: f64,
    /// Energy in [0, 1]
    pub energy: f64,
    /// Valence (musical positiveness) in [0, 1]
    pub valence: f64,
    /// Loudness in dB, typically [-60, 0]
    pub loudness: f64,
    /// Beats per bar, typically 3-7
    pub time_signature: i32,
    /// Pitch class 0-11, or -1 if no key was detected
    pub key: i32,
    /// 0 = minor, 1 = major
    pub mode: i32,
    /// Acousticness in [0, 1]
    pub acousticness: f64,
    /// Instrumentalness in [0, 1]
    pub instrumentalness: f64,
}

impl Default for AudioDescriptorSet {
    fn default() -> Self {
        Self {
            tempo: 0.0,
            danceability: 0.0,
            energy: 0.0,
            valence: 0.0,
            loudness: -60.0,
            time_signature: 4,
            key: 0,
            mode: 1,
            acousticness: 0.0,
            instrumentalness: 0.0,
        }
    }
}
