//! JSON output formatting

use emofp_core::{DimensionScores, Fingerprint};
use serde::Serialize;

/// Result row for one track
#[derive(Debug, Serialize)]
pub struct TrackResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    pub fingerprint: Fingerprint,
    /// Pre-bucket dimension scores, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<DimensionScores>,
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    tracks: usize,
    results: &'a [TrackResult],
}

/// Print results as a JSON document with track count
pub fn print_json_results(results: &[TrackResult], pretty: bool) {
    let output = BatchOutput {
        tracks: results.len(),
        results,
    };

    let serialized = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };

    match serialized {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emofp_core::{compute_fingerprint, AudioDescriptorSet};

    #[test]
    fn test_track_result_serialization() {
        let result = TrackResult {
            track: Some("demo".to_string()),
            fingerprint: compute_fingerprint(&AudioDescriptorSet::default()),
            scores: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"track\":\"demo\""));
        assert!(json.contains("\"low energy\""));
        // Absent scores are omitted entirely
        assert!(!json.contains("scores"));
    }

    #[test]
    fn test_anonymous_track_omits_tag() {
        let result = TrackResult {
            track: None,
            fingerprint: compute_fingerprint(&AudioDescriptorSet::default()),
            scores: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"track\""));
    }
}
