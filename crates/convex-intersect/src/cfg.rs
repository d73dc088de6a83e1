//! Tolerance defaults for polygon intersection.
//!
//! Policy
//! - The three tolerances govern different concerns and are never collapsed
//!   into one: exact boundary membership, near-duplicate vertex merging, and
//!   the area threshold below which a polygon counts as degenerate.
//! - Callers override them through `IntersectCfg`; these are its defaults.

/// Slack for the vertex-in-polygon test (cross product may dip to `-CONTAINMENT_EPS`).
pub const CONTAINMENT_EPS: f64 = 0.0;
/// Max per-coordinate difference under which two sorted neighbours are merged.
pub const DEDUP_EPS: f64 = 1e-7;
/// Shoelace sums with magnitude at or below this mark a polygon degenerate.
pub const AREA_EPS: f64 = 1e-7;
/// Segment crossings are computed exactly (no parallel or range slack).
pub const CROSSING_EPS: f64 = 0.0;
