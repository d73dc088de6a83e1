//! Angular ordering of candidate points into a boundary loop.
//!
//! Numerics
//! - Angles are taken from the bounding-box midpoint, so the order depends
//!   only on the point set, not on the order candidates were gathered in.

use crate::geometry::{angle_about, bounding_box_midpoint, similar, Vec2};

/// Sort points anti-clockwise around their bounding-box midpoint and drop
/// near-duplicates.
///
/// - Sort key is `atan2(dy, dx)` from the midpoint, ascending; the sort is
///   stable so equal angles keep input order.
/// - Point `i` is dropped when it is `similar` (max-norm within `eps`) to
///   sorted point `i − 1`; point 0 is compared with the last sorted point.
///   Comparison is against the sorted sequence, not the kept one.
pub fn sort_anticlockwise_and_dedup(points: &[Vec2], eps: f64) -> Vec<Vec2> {
    let Some(mid) = bounding_box_midpoint(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Vec2)> = points.iter().map(|&p| (angle_about(mid, p), p)).collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let sorted: Vec<Vec2> = keyed.into_iter().map(|(_, p)| p).collect();

    let n = sorted.len();
    (0..n)
        .filter(|&i| !similar(sorted[(i + n - 1) % n], sorted[i], eps))
        .map(|i| sorted[i])
        .collect()
}
