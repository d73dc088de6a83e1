//! Random convex polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Small, deterministic sampler for convex anti-clockwise vertex loops, used
//!   by the demo command, the property tests and the benches.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull (anti-clockwise), then shift by `center`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use crate::geometry::{cross, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertex count is drawn uniformly from `min_vertices..=max_vertices` (at least 3).
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Angle jitter in units of the base spacing `2π/n`, clamped below one half
    /// so neighbouring angles cannot swap.
    pub angle_jitter: f64,
    /// Radius is `radius * (1 + u)` with `|u| <= radial_jitter`.
    pub radial_jitter: f64,
    pub radius: f64,
    /// Rotate the whole loop by a random angle.
    pub random_phase: bool,
    pub center: Vec2,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            min_vertices: 3,
            max_vertices: 6,
            angle_jitter: 0.3,
            radial_jitter: 0.25,
            radius: 1.0,
            random_phase: true,
            center: Vec2::zeros(),
        }
    }
}
impl RadialCfg {
    /// Exactly `n` sampled vertices (before the hull).
    #[inline]
    pub fn with_vertices(n: usize) -> Self {
        Self {
            min_vertices: n,
            max_vertices: n,
            ..Self::default()
        }
    }
}

/// `(seed, index)` pair addressing one reproducible draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    fn rng(self) -> StdRng {
        // Golden-ratio stride keeps consecutive indices of one seed apart.
        StdRng::seed_from_u64(self.seed ^ self.index.wrapping_mul(0x9e37_79b9_7f4a_7c15))
    }
}

/// Draw a random convex polygon as an anti-clockwise vertex loop.
///
/// `None` only if the hull collapses below 3 vertices.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Vec2>> {
    use std::f64::consts::TAU;

    let mut rng = tok.rng();
    let lo = cfg.min_vertices.max(3);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    let spacing = TAU / n as f64;
    let jitter = cfg.angle_jitter.clamp(0.0, 0.49) * spacing;
    let radial = cfg.radial_jitter.max(0.0);
    let phase = if cfg.random_phase { rng.gen_range(0.0..TAU) } else { 0.0 };
    let pts: Vec<Vec2> = (0..n)
        .map(|k| {
            let th = phase + k as f64 * spacing + rng.gen_range(-1.0..=1.0) * jitter;
            let r = cfg.radius * (1.0 + rng.gen_range(-1.0..=1.0) * radial).max(1e-6);
            cfg.center + Vec2::new(th.cos(), th.sin()) * r
        })
        .collect();
    convex_hull(&pts)
}

/// Two polygons from consecutive tokens `(seed, 2·index)` and `(seed, 2·index + 1)`.
pub fn draw_pair(
    cfg1: RadialCfg,
    cfg2: RadialCfg,
    seed: u64,
    index: u64,
) -> Option<(Vec<Vec2>, Vec<Vec2>)> {
    let i = index.wrapping_mul(2);
    let p1 = draw_polygon_radial(cfg1, ReplayToken { seed, index: i })?;
    let p2 = draw_polygon_radial(
        cfg2,
        ReplayToken {
            seed,
            index: i.wrapping_add(1),
        },
    )?;
    Some((p1, p2))
}

/// Convex hull by monotone chain: anti-clockwise from the leftmost (then lowest)
/// point, collinear and repeated points dropped. `None` below 3 vertices.
pub fn convex_hull(points: &[Vec2]) -> Option<Vec<Vec2>> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        (a.x, a.y)
            .partial_cmp(&(b.x, b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut hull = half_hull(pts.iter().copied());
    hull.extend(half_hull(pts.iter().rev().copied()));
    (hull.len() >= 3).then_some(hull)
}

/// One monotone chain keeping only left turns; the last point is left for the
/// opposite chain to start from.
fn half_hull(points: impl Iterator<Item = Vec2>) -> Vec<Vec2> {
    let mut chain: Vec<Vec2> = Vec::new();
    for p in points {
        while let [.., a, b] = chain.as_slice() {
            if cross(b - a, p - a) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}
