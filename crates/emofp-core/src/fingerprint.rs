//! The emotional fingerprint output record
//!
//! Five independent categorical dimensions, each drawn from a fixed
//! 3-element ordered label set. A fingerprint is fully determined by the
//! descriptor record it was computed from and is immutable once built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy dimension labels, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyLabel {
    #[serde(rename = "low energy")]
    Low,
    #[serde(rename = "medium energy")]
    Medium,
    #[serde(rename = "high energy")]
    High,
}

impl EnergyLabel {
    /// Ordered label set for bucketing
    pub const ORDERED: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low energy",
            Self::Medium => "medium energy",
            Self::High => "high energy",
        }
    }
}

/// Valence dimension labels, ordered negative to positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValenceLabel {
    #[serde(rename = "negative valence")]
    Negative,
    #[serde(rename = "neutral valence")]
    Neutral,
    #[serde(rename = "positive valence")]
    Positive,
}

impl ValenceLabel {
    /// Ordered label set for bucketing
    pub const ORDERED: [Self; 3] = [Self::Negative, Self::Neutral, Self::Positive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative valence",
            Self::Neutral => "neutral valence",
            Self::Positive => "positive valence",
        }
    }
}

/// Intensity dimension labels, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityLabel {
    #[serde(rename = "low intensity")]
    Low,
    #[serde(rename = "medium intensity")]
    Medium,
    #[serde(rename = "high intensity")]
    High,
}

impl IntensityLabel {
    /// Ordered label set for bucketing
    pub const ORDERED: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low intensity",
            Self::Medium => "medium intensity",
            Self::High => "high intensity",
        }
    }
}

/// Complexity dimension labels, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLabel {
    #[serde(rename = "low complexity")]
    Low,
    #[serde(rename = "medium complexity")]
    Medium,
    #[serde(rename = "high complexity")]
    High,
}

impl ComplexityLabel {
    /// Ordered label set for bucketing
    pub const ORDERED: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low complexity",
            Self::Medium => "medium complexity",
            Self::High => "high complexity",
        }
    }
}

/// Size dimension labels, ordered small to large
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeLabel {
    #[serde(rename = "small size")]
    Small,
    #[serde(rename = "medium size")]
    Medium,
    #[serde(rename = "large size")]
    Large,
}

impl SizeLabel {
    /// Ordered label set for bucketing
    pub const ORDERED: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small size",
            Self::Medium => "medium size",
            Self::Large => "large size",
        }
    }
}

impl fmt::Display for EnergyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ValenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IntensityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five-label categorical summary for one track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub energy: EnergyLabel,
    pub valence: ValenceLabel,
    pub intensity: IntensityLabel,
    pub complexity: ComplexityLabel,
    pub size: SizeLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_serialize_to_exact_strings() {
        let fp = Fingerprint {
            energy: EnergyLabel::High,
            valence: ValenceLabel::Negative,
            intensity: IntensityLabel::Medium,
            complexity: ComplexityLabel::Low,
            size: SizeLabel::Large,
        };

        let json = serde_json::to_string(&fp).unwrap();
        assert!(json.contains("\"high energy\""));
        assert!(json.contains("\"negative valence\""));
        assert!(json.contains("\"medium intensity\""));
        assert!(json.contains("\"low complexity\""));
        assert!(json.contains("\"large size\""));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ValenceLabel::Neutral.to_string(), "neutral valence");
        assert_eq!(SizeLabel::Small.to_string(), "small size");
        assert_eq!(ComplexityLabel::High.as_str(), "high complexity");
    }
}
