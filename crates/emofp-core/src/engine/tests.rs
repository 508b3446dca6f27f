//! Scenario tests for the fingerprint pipeline

use super::*;
use approx::assert_relative_eq;

fn engine() -> FingerprintEngine {
    FingerprintEngine::new(&FingerprintConfig::default())
}

fn mid_range_track() -> AudioDescriptorSet {
    AudioDescriptorSet {
        tempo: 120.0,
        danceability: 0.5,
        energy: 0.5,
        valence: 0.5,
        loudness: -15.0,
        time_signature: 4,
        key: 0,
        mode: 1,
        acousticness: 0.5,
        instrumentalness: 0.5,
    }
}

#[test]
fn test_mid_range_track() {
    let (fp, scores) = engine().compute_with_scores(&mid_range_track());

    // tempo_n = (120 - 50) / 150, loudness_n = (-15 + 30) / 30
    let tempo_n = 70.0 / 150.0;
    assert_relative_eq!(scores.energy, 0.45 * 0.5 + 0.35 * tempo_n + 0.20 * 0.5);
    assert_relative_eq!(scores.valence, 0.85 * 0.5 + 0.15 * tempo_n);
    assert_relative_eq!(scores.intensity, 0.45 * 0.5 + 0.35 * 0.5 + 0.20 * tempo_n);
    assert_relative_eq!(scores.complexity, 0.25);
    assert_relative_eq!(scores.size, 0.5);

    assert_eq!(fp.energy, EnergyLabel::Medium);
    assert_eq!(fp.valence, ValenceLabel::Neutral);
    assert_eq!(fp.intensity, IntensityLabel::Medium);
    assert_eq!(fp.complexity, ComplexityLabel::Low);
    assert_eq!(fp.size, SizeLabel::Medium);
}

#[test]
fn test_all_fields_missing_uses_fallbacks() {
    // Fallbacks: tempo 0, loudness -60, time_signature 4, key 0, mode 1
    let (fp, scores) = engine().compute_with_scores(&AudioDescriptorSet::default());

    assert_relative_eq!(scores.energy, 0.0);
    assert_relative_eq!(scores.valence, 0.0);
    assert_relative_eq!(scores.intensity, 0.0);
    assert_relative_eq!(scores.complexity, 0.25);
    assert_relative_eq!(scores.size, 0.80);

    assert_eq!(fp.energy, EnergyLabel::Low);
    assert_eq!(fp.valence, ValenceLabel::Negative);
    assert_eq!(fp.intensity, IntensityLabel::Low);
    assert_eq!(fp.complexity, ComplexityLabel::Low);
    assert_eq!(fp.size, SizeLabel::Large);
}

#[test]
fn test_odd_meter_minor_unkeyed_track_is_high_complexity() {
    let descriptors = AudioDescriptorSet {
        time_signature: 5,
        mode: 0,
        key: -1,
        ..AudioDescriptorSet::default()
    };

    let (fp, scores) = engine().compute_with_scores(&descriptors);
    assert_relative_eq!(scores.complexity, 0.90);
    assert_eq!(fp.complexity, ComplexityLabel::High);
}

#[test]
fn test_complexity_uses_its_own_thresholds() {
    // An odd meter alone scores 0.65: below the complexity high threshold
    // (0.70) even though it would clear the generic one (0.66)
    let descriptors = AudioDescriptorSet {
        time_signature: 7,
        ..AudioDescriptorSet::default()
    };

    let (fp, scores) = engine().compute_with_scores(&descriptors);
    assert_relative_eq!(scores.complexity, 0.65);
    assert_eq!(fp.complexity, ComplexityLabel::Medium);
}

#[test]
fn test_deterministic_for_identical_input() {
    let descriptors = mid_range_track();
    let engine = engine();

    let first = engine.compute_with_scores(&descriptors);
    let second = engine.compute_with_scores(&descriptors);

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn test_negative_tempo_degrades_gracefully() {
    let descriptors = AudioDescriptorSet {
        tempo: -90.0,
        ..mid_range_track()
    };

    let (fp, scores) = engine().compute_with_scores(&descriptors);
    // tempo_n clamps to 0; the blend still produces a valid fingerprint
    assert_relative_eq!(scores.energy, 0.45 * 0.5 + 0.20 * 0.5);
    assert_eq!(fp.energy, EnergyLabel::Low);
    assert_eq!(fp.valence, ValenceLabel::Neutral);
}
