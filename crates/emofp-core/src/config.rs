//! Configuration parameters for the fingerprint heuristic
//!
//! Every weight, normalization range, and bucket threshold is an explicit
//! named field so the nonstandard complexity thresholds stay visibly
//! intentional. Defaults match the hand-tuned reference heuristic.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scoring weights and bucket thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    // Descriptor normalization ranges
    pub tempo_min_bpm: f64,
    pub tempo_max_bpm: f64,
    pub loudness_min_db: f64,
    pub loudness_max_db: f64,

    // Energy: blend of raw energy, normalized tempo, danceability
    pub energy_weight_energy: f64,
    pub energy_weight_tempo: f64,
    pub energy_weight_danceability: f64,

    // Valence: blend of raw valence, normalized tempo
    pub valence_weight_valence: f64,
    pub valence_weight_tempo: f64,

    // Intensity: blend of raw energy, normalized loudness, normalized tempo
    pub intensity_weight_energy: f64,
    pub intensity_weight_loudness: f64,
    pub intensity_weight_tempo: f64,

    // Complexity: additive base per meter class plus bonuses
    pub complexity_base_common_meter: f64,
    pub complexity_base_odd_meter: f64,
    pub complexity_minor_mode_bonus: f64,
    pub complexity_no_key_bonus: f64,

    // Size: blend of production level (1 - acousticness), vocal presence
    // (1 - instrumentalness), and raw valence
    pub size_weight_production: f64,
    pub size_weight_vocal: f64,
    pub size_weight_valence: f64,

    // Bucket thresholds for energy, valence, intensity, size
    pub bucket_low_threshold: f64,
    pub bucket_high_threshold: f64,

    // Complexity uses deliberately wider thresholds
    pub complexity_low_threshold: f64,
    pub complexity_high_threshold: f64,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            // Normalization ranges
            tempo_min_bpm: 50.0,
            tempo_max_bpm: 200.0,
            loudness_min_db: -30.0,
            loudness_max_db: 0.0,

            // Energy: 45% energy + 35% tempo + 20% danceability
            energy_weight_energy: 0.45,
            energy_weight_tempo: 0.35,
            energy_weight_danceability: 0.20,

            // Valence: 85% valence + 15% tempo
            valence_weight_valence: 0.85,
            valence_weight_tempo: 0.15,

            // Intensity: 45% energy + 35% loudness + 20% tempo
            intensity_weight_energy: 0.45,
            intensity_weight_loudness: 0.35,
            intensity_weight_tempo: 0.20,

            // Complexity: 3/4 and 4/4 meters are basic, others complex;
            // minor mode and an undetected key push upward
            complexity_base_common_meter: 0.25,
            complexity_base_odd_meter: 0.65,
            complexity_minor_mode_bonus: 0.15,
            complexity_no_key_bonus: 0.10,

            // Size: 55% production + 25% vocal presence + 20% valence
            size_weight_production: 0.55,
            size_weight_vocal: 0.25,
            size_weight_valence: 0.20,

            // Bucket thresholds
            bucket_low_threshold: 0.33,
            bucket_high_threshold: 0.66,
            complexity_low_threshold: 0.40,
            complexity_high_threshold: 0.70,
        }
    }
}

impl FingerprintConfig {
    /// Load configuration from TOML file
    ///
    /// Fields missing from the file keep their defaults, so partial
    /// override files work.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: FingerprintConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML config: {}", e))?;
        log::debug!("Loaded fingerprint config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.bucket_low_threshold)
            || !(0.0..=1.0).contains(&self.bucket_high_threshold)
        {
            anyhow::bail!("Bucket thresholds must be in [0, 1]");
        }
        if self.bucket_low_threshold >= self.bucket_high_threshold {
            anyhow::bail!("bucket_low_threshold must be < bucket_high_threshold");
        }
        if !(0.0..=1.0).contains(&self.complexity_low_threshold)
            || !(0.0..=1.0).contains(&self.complexity_high_threshold)
        {
            anyhow::bail!("Complexity thresholds must be in [0, 1]");
        }
        if self.complexity_low_threshold >= self.complexity_high_threshold {
            anyhow::bail!("complexity_low_threshold must be < complexity_high_threshold");
        }
        Ok(())
    }
}
