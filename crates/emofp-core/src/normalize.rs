//! Numeric normalization utilities
//!
//! Affine rescaling of descriptor values into [0, 1], clamped at the edges.

/// Clamp `x` to the closed interval [`low`, `high`]
///
/// Total over any real `x`; values already in range pass through unchanged.
pub fn clamp(x: f64, low: f64, high: f64) -> f64 {
    x.min(high).max(low)
}

/// Map `x` from the interval [`low`, `high`] into [0, 1], clamped
///
/// A degenerate interval (`high == low`) resolves to 0.0 instead of dividing
/// by zero.
pub fn normalize_range(x: f64, low: f64, high: f64) -> f64 {
    if high == low {
        return 0.0;
    }
    clamp((x - low) / (high - low), 0.0, 1.0)
}
