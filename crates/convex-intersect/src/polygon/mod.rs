//! Intersection of two convex polygons given as vertex loops.
//!
//! Purpose
//! - Compute the overlap of two convex, anti-clockwise polygons as a new
//!   anti-clockwise vertex loop (possibly empty).
//!
//! Algorithm
//! - Candidates: vertices of each polygon lying in the other (skipped against a
//!   degenerate polygon) plus every edge/edge crossing (full O(n·m) product).
//! - Candidates are sorted by angle around their bounding-box midpoint and
//!   near-duplicates of the sorted predecessor are dropped (circularly).
//!
//! Assumptions and conventions
//! - Convexity and anti-clockwise order are the caller's contract and are not
//!   checked; a clockwise polygon inverts the containment test.
//! - Shared collinear edges are not detected as crossings; the boundary along a
//!   shared edge comes from the containment pass alone.
//! - The operation is total: irregular inputs degrade to empty or degenerate
//!   outputs. A near-collinear result is flagged in `Intersection` and logged.
//!
//! Code cross-refs: `segment::{Segment, edges}`, `cfg`

mod intersect;
mod ordering;
mod predicates;
mod types;

pub use intersect::{intersect, intersect_with_cfg, intersect_with_tolerance};
pub use ordering::sort_anticlockwise_and_dedup;
pub use predicates::{contains_point, is_nondegenerate, signed_area};
pub use types::{IntersectCfg, Intersection};

#[cfg(test)]
mod tests;
