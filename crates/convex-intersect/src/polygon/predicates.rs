//! Per-polygon predicates: shoelace area, degeneracy, point containment.
//!
//! Containment assumes anti-clockwise convex input and is not checked; a
//! clockwise loop inverts the answer.

use crate::geometry::{cross, Vec2};

/// Signed area via the shoelace sum `½ Σ p_{i−1} × p_i` over the closed loop.
///
/// Positive for anti-clockwise loops. Zero for fewer than 3 vertices.
pub fn signed_area(polygon: &[Vec2]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let n = polygon.len();
    (0..n)
        .map(|i| cross(polygon[(i + n - 1) % n], polygon[i]))
        .sum::<f64>()
        * 0.5
}

/// At least 3 vertices and a shoelace sum with magnitude above `eps`.
///
/// The threshold applies to the raw sum, i.e. to twice the area.
#[inline]
pub fn is_nondegenerate(polygon: &[Vec2], eps: f64) -> bool {
    polygon.len() >= 3 && (2.0 * signed_area(polygon)).abs() > eps
}

/// Point in (or on, within `eps`) a convex anti-clockwise polygon.
///
/// Outside iff the point lies strictly right of some directed edge, i.e.
/// `(p_i − p_{i−1}) × (point − p_{i−1}) < −eps`.
pub fn contains_point(polygon: &[Vec2], point: Vec2, eps: f64) -> bool {
    let n = polygon.len();
    (0..n).all(|i| {
        let prev = polygon[(i + n - 1) % n];
        cross(polygon[i] - prev, point - prev) >= -eps
    })
}
