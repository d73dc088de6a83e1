//! Tolerance configuration and the diagnostic result of an intersection.

use crate::cfg::{AREA_EPS, CONTAINMENT_EPS, DEDUP_EPS};
use crate::geometry::Vec2;

/// Intersection configuration (tolerances).
///
/// - `containment_eps`: slack of the vertex-in-polygon test.
/// - `dedup_eps`: max-norm distance under which sorted neighbours merge.
/// - `area_eps`: shoelace threshold for degenerate polygons, both for skipping
///   containment passes and for flagging a near-degenerate result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectCfg {
    pub containment_eps: f64,
    pub dedup_eps: f64,
    pub area_eps: f64,
}

impl Default for IntersectCfg {
    fn default() -> Self {
        Self {
            containment_eps: CONTAINMENT_EPS,
            dedup_eps: DEDUP_EPS,
            area_eps: AREA_EPS,
        }
    }
}

impl IntersectCfg {
    /// `tol` for containment and dedup; area threshold unchanged.
    ///
    /// A non-positive `tol` keeps `DEDUP_EPS` for the dedup step: exact
    /// merging would let rounding noise on crossing points split vertices.
    #[inline]
    pub fn with_tolerance(tol: f64) -> Self {
        Self {
            containment_eps: tol,
            dedup_eps: if tol > 0.0 { tol } else { DEDUP_EPS },
            ..Self::default()
        }
    }
}

/// Intersection boundary plus diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intersection {
    /// Anti-clockwise, duplicate-free boundary.
    pub vertices: Vec<Vec2>,
    /// Number of candidate points before sorting and dedup.
    pub candidates: usize,
    /// More than two vertices but zero area within `area_eps` (near-collinear output).
    pub near_degenerate: bool,
}

impl Intersection {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vec2> {
        self.vertices
    }
}
