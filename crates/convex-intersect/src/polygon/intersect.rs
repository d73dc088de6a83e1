//! Candidate gathering and the top-level intersection operation.
//!
//! Crossings are exact (`CROSSING_EPS`); containment and dedup slack come
//! from `IntersectCfg`.

use crate::cfg::CROSSING_EPS;
use crate::geometry::Vec2;
use crate::segment::edges;

use super::ordering::sort_anticlockwise_and_dedup;
use super::predicates::{contains_point, is_nondegenerate};
use super::types::{IntersectCfg, Intersection};

/// Intersection polygon of two convex anti-clockwise polygons (default tolerances).
///
/// Returns an anti-clockwise, duplicate-free vertex loop; empty if the polygons
/// do not overlap or either has fewer than 2 points.
#[inline]
pub fn intersect(polygon1: &[Vec2], polygon2: &[Vec2]) -> Vec<Vec2> {
    intersect_with_cfg(polygon1, polygon2, IntersectCfg::default()).into_vertices()
}

/// As `intersect`, with `tol` used for both the containment and dedup tolerance.
#[inline]
pub fn intersect_with_tolerance(polygon1: &[Vec2], polygon2: &[Vec2], tol: f64) -> Vec<Vec2> {
    intersect_with_cfg(polygon1, polygon2, IntersectCfg::with_tolerance(tol)).into_vertices()
}

/// Full form: explicit tolerances, result with diagnostics.
pub fn intersect_with_cfg(
    polygon1: &[Vec2],
    polygon2: &[Vec2],
    cfg: IntersectCfg,
) -> Intersection {
    if polygon1.len() < 2 || polygon2.len() < 2 {
        return Intersection::default();
    }

    let mut candidates = vertices_inside_other(polygon1, polygon2, cfg);
    candidates.extend(edge_crossings(polygon1, polygon2));

    let vertices = sort_anticlockwise_and_dedup(&candidates, cfg.dedup_eps);
    let near_degenerate = vertices.len() > 2 && !is_nondegenerate(&vertices, cfg.area_eps);
    if near_degenerate {
        tracing::warn!(
            vertices = vertices.len(),
            candidates = candidates.len(),
            ?vertices,
            "near-degenerate intersection"
        );
    } else {
        tracing::debug!(
            vertices = vertices.len(),
            candidates = candidates.len(),
            "intersection"
        );
    }
    Intersection {
        vertices,
        candidates: candidates.len(),
        near_degenerate,
    }
}

/// Vertices of each polygon inside the other. A pass is skipped when the
/// containing polygon is degenerate (containment is meaningless there).
fn vertices_inside_other(polygon1: &[Vec2], polygon2: &[Vec2], cfg: IntersectCfg) -> Vec<Vec2> {
    let mut out = Vec::new();
    let mut collect = |subject: &[Vec2], container: &[Vec2]| {
        if is_nondegenerate(container, cfg.area_eps) {
            out.extend(
                subject
                    .iter()
                    .copied()
                    .filter(|&p| contains_point(container, p, cfg.containment_eps)),
            );
        }
    };
    collect(polygon1, polygon2);
    collect(polygon2, polygon1);
    out
}

/// Crossing points over the full edge cross product (exact, no slack).
fn edge_crossings(polygon1: &[Vec2], polygon2: &[Vec2]) -> Vec<Vec2> {
    edges(polygon1)
        .flat_map(|e1| {
            edges(polygon2).filter_map(move |e2| e1.intersection_point(&e2, CROSSING_EPS))
        })
        .collect()
}
