//! Three-way bucketing of [0, 1] scores
//!
//! Maps a continuous score onto one of three ordered labels using two
//! thresholds. The comparison is half-open on the low side: a score exactly
//! equal to a threshold falls into the higher bucket.

/// Bucket `score` into one of three ordered labels
///
/// Returns `labels[0]` for `score < t1`, `labels[1]` for `t1 <= score < t2`,
/// and `labels[2]` otherwise. Thresholds are passed explicitly at every call
/// site so nonstandard threshold pairs stay visible.
pub fn bucket3<T: Copy>(score: f64, labels: [T; 3], t1: f64, t2: f64) -> T {
    if score < t1 {
        labels[0]
    } else if score < t2 {
        labels[1]
    } else {
        labels[2]
    }
}
