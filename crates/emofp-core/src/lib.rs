//! Emofp Core - Emotional Fingerprinting Library
//!
//! This crate converts per-track audio descriptors (tempo, energy, loudness,
//! key, ...) into a five-dimension categorical "emotional fingerprint":
//! energy, valence, intensity, complexity, and size.

pub mod bucket;
pub mod config;
pub mod descriptors;
pub mod engine;
pub mod fingerprint;
pub mod normalize;
pub mod score;

pub use config::FingerprintConfig;
pub use descriptors::AudioDescriptorSet;
pub use engine::FingerprintEngine;
pub use fingerprint::{
    ComplexityLabel, EnergyLabel, Fingerprint, IntensityLabel, SizeLabel, ValenceLabel,
};
pub use score::{DimensionScores, ScoreCombiner};

use rayon::prelude::*;

/// Compute the fingerprint for a single track using the default configuration
pub fn compute_fingerprint(descriptors: &AudioDescriptorSet) -> Fingerprint {
    FingerprintEngine::new(&FingerprintConfig::default()).compute(descriptors)
}

/// Compute fingerprints for many tracks in parallel
///
/// Each track is processed independently; output order matches input order.
pub fn compute_fingerprints(
    descriptors: &[AudioDescriptorSet],
    config: &FingerprintConfig,
) -> Vec<Fingerprint> {
    let engine = FingerprintEngine::new(config);
    descriptors.par_iter().map(|d| engine.compute(d)).collect()
}
