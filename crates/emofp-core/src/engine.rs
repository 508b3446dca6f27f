//! Fingerprint pipeline orchestration
//!
//! Runs normalize -> score -> bucket for all five dimensions and assembles
//! the output record. The pipeline is pure and total: any descriptor record
//! produces a fingerprint, with no I/O and no shared state.

use crate::bucket::bucket3;
use crate::config::FingerprintConfig;
use crate::descriptors::AudioDescriptorSet;
use crate::fingerprint::{
    ComplexityLabel, EnergyLabel, Fingerprint, IntensityLabel, SizeLabel, ValenceLabel,
};
use crate::score::{DimensionScores, ScoreCombiner};

#[cfg(test)]
mod tests;

/// Stateless engine turning audio descriptors into fingerprints
pub struct FingerprintEngine {
    config: FingerprintConfig,
    combiner: ScoreCombiner,
}

impl FingerprintEngine {
    pub fn new(config: &FingerprintConfig) -> Self {
        Self {
            config: config.clone(),
            combiner: ScoreCombiner::new(config),
        }
    }

    /// Compute the fingerprint for one track
    pub fn compute(&self, descriptors: &AudioDescriptorSet) -> Fingerprint {
        self.compute_with_scores(descriptors).0
    }

    /// Compute the fingerprint together with the pre-bucket scores
    pub fn compute_with_scores(
        &self,
        descriptors: &AudioDescriptorSet,
    ) -> (Fingerprint, DimensionScores) {
        let scores = self.combiner.combine(descriptors);
        let c = &self.config;

        let fingerprint = Fingerprint {
            energy: bucket3(
                scores.energy,
                EnergyLabel::ORDERED,
                c.bucket_low_threshold,
                c.bucket_high_threshold,
            ),
            valence: bucket3(
                scores.valence,
                ValenceLabel::ORDERED,
                c.bucket_low_threshold,
                c.bucket_high_threshold,
            ),
            intensity: bucket3(
                scores.intensity,
                IntensityLabel::ORDERED,
                c.bucket_low_threshold,
                c.bucket_high_threshold,
            ),
            // Complexity uses its own wider thresholds
            complexity: bucket3(
                scores.complexity,
                ComplexityLabel::ORDERED,
                c.complexity_low_threshold,
                c.complexity_high_threshold,
            ),
            size: bucket3(
                scores.size,
                SizeLabel::ORDERED,
                c.bucket_low_threshold,
                c.bucket_high_threshold,
            ),
        };

        (fingerprint, scores)
    }
}
