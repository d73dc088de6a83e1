//! Directed line segments in parametric form `support + t·direction`, `t ∈ [0, 1]`.
//!
//! Purpose
//! - Edge representation for the polygon intersection: polygon edges are built
//!   on the fly from adjacent vertices and dropped after use.
//! - Exposes the segment crossing both as a clipped point and as the raw
//!   parameter pair for callers that reason about boundary positions.
//!
//! Numerics
//! - Parallel (or nearly parallel, `|det| <= eps`) segments never cross, even
//!   when they overlap collinearly. Zero-length segments have `det = 0` and
//!   therefore never cross anything.

use crate::geometry::Vec2;

/// Directed segment `support + t·direction`, `t ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub support: Vec2,
    pub direction: Vec2,
}

impl Segment {
    /// Segment from `a` to `b`.
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            support: a,
            direction: b - a,
        }
    }

    /// Segment from a support point and an already known direction.
    #[inline]
    pub fn from_support_direction(support: Vec2, direction: Vec2) -> Self {
        Self { support, direction }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.support
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.support + self.direction
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.support + self.direction * t
    }

    /// Raw parameters `(t0, t1)` with `self.point_at(t0) == other.point_at(t1)`.
    ///
    /// No range check: the lines are intersected, not the segments. `None` iff
    /// the directions are parallel within `eps` (`|det| <= eps`).
    pub fn intersection_params(&self, other: &Segment, eps: f64) -> Option<(f64, f64)> {
        let d0 = self.direction;
        let d1 = other.direction;
        let det = d0.y * d1.x - d0.x * d1.y;
        if det.abs() <= eps {
            return None;
        }
        let b = self.support - other.support;
        let t0 = (d1.y * b.x - d1.x * b.y) / det;
        let t1 = (d0.y * b.x - d0.x * b.y) / det;
        Some((t0, t1))
    }

    /// Crossing point of the two segments, if both parameters lie in `[-eps, 1 + eps]`.
    pub fn intersection_point(&self, other: &Segment, eps: f64) -> Option<Vec2> {
        let (t0, t1) = self.intersection_params(other, eps)?;
        let range = -eps..=1.0 + eps;
        if range.contains(&t0) && range.contains(&t1) {
            Some(self.point_at(t0))
        } else {
            None
        }
    }

    /// Exact crossing test (zero tolerance).
    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection_point(other, 0.0).is_some()
    }

    /// `intersects` against each segment, same order and length as `others`.
    pub fn intersects_many(&self, others: &[Segment]) -> Vec<bool> {
        others.iter().map(|o| self.intersects(o)).collect()
    }
}

/// Edges of a closed polygon: `p[i-1] → p[i]` for `i = 0..n`, so the first
/// edge is the closing one (last → first). Empty for an empty slice.
pub fn edges(polygon: &[Vec2]) -> impl Iterator<Item = Segment> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| Segment::new(polygon[(i + n - 1) % n], polygon[i]))
}

/// Crossing point of segments `a→b` and `c→d` within `eps`.
#[inline]
pub fn segment_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2, eps: f64) -> Option<Vec2> {
    Segment::new(a, b).intersection_point(&Segment::new(c, d), eps)
}
