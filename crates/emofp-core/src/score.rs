//! Dimension score computation
//!
//! Blends raw and normalized descriptor values into five [0, 1] scores
//! using fixed per-dimension weights. Every score is clamped before it
//! reaches the bucketizer.

use crate::config::FingerprintConfig;
use crate::descriptors::AudioDescriptorSet;
use crate::normalize::{clamp, normalize_range};
use serde::{Deserialize, Serialize};

/// The five pre-bucket dimension scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub energy: f64,
    pub valence: f64,
    pub intensity: f64,
    pub complexity: f64,
    pub size: f64,
}

/// Computes dimension scores from audio descriptors
pub struct ScoreCombiner {
    config: FingerprintConfig,
}

impl ScoreCombiner {
    pub fn new(config: &FingerprintConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Compute all five dimension scores for one track
    pub fn combine(&self, d: &AudioDescriptorSet) -> DimensionScores {
        let c = &self.config;

        let tempo_n = normalize_range(d.tempo, c.tempo_min_bpm, c.tempo_max_bpm);
        let loudness_n = normalize_range(d.loudness, c.loudness_min_db, c.loudness_max_db);

        let energy = clamp(
            c.energy_weight_energy * d.energy
                + c.energy_weight_tempo * tempo_n
                + c.energy_weight_danceability * d.danceability,
            0.0,
            1.0,
        );

        let valence = clamp(
            c.valence_weight_valence * d.valence + c.valence_weight_tempo * tempo_n,
            0.0,
            1.0,
        );

        let intensity = clamp(
            c.intensity_weight_energy * d.energy
                + c.intensity_weight_loudness * loudness_n
                + c.intensity_weight_tempo * tempo_n,
            0.0,
            1.0,
        );

        // More acoustic reads as intimate and small, more produced and more
        // vocal reads as large
        let size = clamp(
            c.size_weight_production * (1.0 - d.acousticness)
                + c.size_weight_vocal * (1.0 - d.instrumentalness)
                + c.size_weight_valence * d.valence,
            0.0,
            1.0,
        );

        DimensionScores {
            energy,
            valence,
            intensity,
            complexity: self.complexity_score(d),
            size,
        }
    }

    /// Additive complexity heuristic over meter, mode, and detected key
    fn complexity_score(&self, d: &AudioDescriptorSet) -> f64 {
        let c = &self.config;

        let mut raw = if matches!(d.time_signature, 3 | 4) {
            c.complexity_base_common_meter
        } else {
            c.complexity_base_odd_meter
        };
        if d.mode == 0 {
            raw += c.complexity_minor_mode_bonus;
        }
        if d.key == -1 {
            raw += c.complexity_no_key_bonus;
        }

        clamp(raw, 0.0, 1.0)
    }
}
