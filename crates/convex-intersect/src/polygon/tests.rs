use super::*;
use crate::geometry::{similar, Vec2};
use crate::rand::{draw_pair, draw_polygon_radial, RadialCfg, ReplayToken};
use nalgebra::vector;
use proptest::prelude::*;

fn square(x0: f64, y0: f64, side: f64) -> Vec<Vec2> {
    vec![
        vector![x0, y0],
        vector![x0 + side, y0],
        vector![x0 + side, y0 + side],
        vector![x0, y0 + side],
    ]
}

/// Every point of `a` has a partner in `b` within `eps` and vice versa.
fn same_point_set(a: &[Vec2], b: &[Vec2], eps: f64) -> bool {
    let covered =
        |xs: &[Vec2], ys: &[Vec2]| xs.iter().all(|x| ys.iter().any(|y| similar(*x, *y, eps)));
    covered(a, b) && covered(b, a)
}

/// Equal up to cyclic rotation, pointwise within `eps`.
fn same_cycle(a: &[Vec2], b: &[Vec2], eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|r| (0..n).all(|i| similar(a[i], b[(i + r) % n], eps)))
}

#[test]
fn overlapping_squares() {
    let a = square(0.0, 0.0, 2.0);
    let b = square(1.0, 1.0, 2.0);
    let out = intersect(&a, &b);
    assert!(same_cycle(&out, &square(1.0, 1.0, 1.0), 1e-12), "{out:?}");
    assert!(signed_area(&out) > 0.0);
}

#[test]
fn nested_polygon_is_returned() {
    let inner = vec![vector![1.0, 1.0], vector![2.0, 1.0], vector![1.5, 2.0]];
    let outer = square(0.0, 0.0, 3.0);
    let out = intersect(&inner, &outer);
    assert_eq!(out, sort_anticlockwise_and_dedup(&inner, 1e-7));
    assert!(same_cycle(&out, &inner, 0.0));
    let swapped = intersect(&outer, &inner);
    assert!(same_cycle(&swapped, &inner, 1e-12));
}

#[test]
fn disjoint_and_too_small_inputs_are_empty() {
    assert!(intersect(&square(0.0, 0.0, 1.0), &square(5.0, 5.0, 1.0)).is_empty());
    let tri = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]];
    assert!(intersect(&[vector![0.0, 0.0]], &tri).is_empty());
    assert!(intersect(&tri, &[]).is_empty());
    let res = intersect_with_cfg(&[], &tri, IntersectCfg::default());
    assert_eq!(res, Intersection::default());
}

#[test]
fn shared_edge_collapses_to_that_edge() {
    // Collinear shared edge: no crossing is reported for it, the endpoints come
    // from containment (on-boundary) and from the adjacent edges meeting it.
    let a = square(0.0, 0.0, 1.0);
    let b = square(1.0, 0.0, 1.0);
    let res = intersect_with_cfg(&a, &b, IntersectCfg::default());
    assert_eq!(res.vertices, vec![vector![1.0, 0.0], vector![1.0, 1.0]]);
    assert!(!res.near_degenerate);
    assert!(res.candidates > 2);
}

#[test]
fn identical_polygons_give_themselves() {
    let a = square(-1.0, -1.0, 2.0);
    let out = intersect(&a, &a);
    assert!(same_cycle(&out, &a, 1e-12), "{out:?}");
}

#[test]
fn corner_touch_dedups_to_nothing() {
    // All candidates coincide at (1, 1); every copy matches its predecessor.
    let a = square(0.0, 0.0, 1.0);
    let b = square(1.0, 1.0, 1.0);
    let res = intersect_with_cfg(&a, &b, IntersectCfg::default());
    assert!(res.candidates > 0);
    assert!(res.is_empty());
}

#[test]
fn degenerate_container_skips_containment() {
    // Segment "polygon" inside a square: its vertices count (square is a real
    // container), the square's vertices are never tested against the segment.
    let seg = vec![vector![0.25, 0.5], vector![0.75, 0.5]];
    let sq = square(0.0, 0.0, 1.0);
    let res = intersect_with_cfg(&seg, &sq, IntersectCfg::default());
    assert_eq!(res.candidates, 2);
    // Sorted from the midpoint (0.5, 0.5): angle 0 before angle π.
    assert_eq!(res.vertices, vec![vector![0.75, 0.5], vector![0.25, 0.5]]);
}

#[test]
fn near_collinear_result_is_flagged() {
    let sliver = vec![vector![0.5, 1.0], vector![1.5, 1.0], vector![1.0, 1.0 + 1e-9]];
    let res = intersect_with_cfg(&square(0.0, 0.0, 2.0), &sliver, IntersectCfg::default());
    assert_eq!(res.vertices.len(), 3);
    assert!(res.near_degenerate);

    let healthy = intersect_with_cfg(
        &square(0.0, 0.0, 2.0),
        &square(1.0, 1.0, 2.0),
        IntersectCfg::default(),
    );
    assert!(!healthy.near_degenerate);
}

#[test]
fn tolerance_applies_to_containment_and_dedup() {
    // b's left edge sits 1e-9 outside a's right edge.
    let a = square(0.0, 0.0, 1.0);
    let b = square(1.0 + 1e-9, 0.25, 0.5);
    assert!(intersect(&a, &b).is_empty());
    let loose = intersect_with_tolerance(&a, &b, 1e-6);
    assert_eq!(loose.len(), 2);
    assert!(loose.iter().all(|p| (p.x - 1.0).abs() < 1e-6));
}

#[test]
fn cfg_defaults_are_distinct() {
    let cfg = IntersectCfg::default();
    assert_eq!(cfg.containment_eps, 0.0);
    assert_eq!(cfg.dedup_eps, 1e-7);
    assert_eq!(cfg.area_eps, 1e-7);
    let t = IntersectCfg::with_tolerance(1e-3);
    assert_eq!((t.containment_eps, t.dedup_eps, t.area_eps), (1e-3, 1e-3, 1e-7));
    let zero = IntersectCfg::with_tolerance(0.0);
    assert_eq!((zero.containment_eps, zero.dedup_eps), (0.0, 1e-7));
}

#[test]
fn zero_tolerance_still_merges_noisy_crossings() {
    // Rotated polygons against themselves: corner crossings carry rounding
    // noise and must merge with the vertices they duplicate.
    for index in 0..50 {
        let p = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 5, index })
            .expect("poly");
        let exact = intersect_with_tolerance(&p, &p, 0.0);
        assert_eq!(exact, intersect(&p, &p));
        assert_eq!(exact.len(), p.len(), "{exact:?}");
    }
}

fn overlapping_pair(seed: u64, index: u64, dx: f64, dy: f64) -> (Vec<Vec2>, Vec<Vec2>) {
    let cfg2 = RadialCfg {
        center: vector![dx, dy],
        ..RadialCfg::default()
    };
    draw_pair(RadialCfg::default(), cfg2, seed, index).expect("pair")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn symmetric_in_arguments(seed in any::<u64>(), index in 0u64..1000, dx in -1.5f64..1.5, dy in -1.5f64..1.5) {
        let (a, b) = overlapping_pair(seed, index, dx, dy);
        let ab = intersect(&a, &b);
        let ba = intersect(&b, &a);
        prop_assert!(same_point_set(&ab, &ba, 1e-6), "{ab:?} vs {ba:?}");
    }

    #[test]
    fn output_is_sorted_fixpoint(seed in any::<u64>(), index in 0u64..1000, dx in -1.5f64..1.5, dy in -1.5f64..1.5) {
        let (a, b) = overlapping_pair(seed, index, dx, dy);
        let out = intersect(&a, &b);
        let again = sort_anticlockwise_and_dedup(&out, 1e-7);
        prop_assert!(same_cycle(&out, &again, 1e-9), "{out:?} vs {again:?}");
    }

    #[test]
    fn output_is_convex_and_inside_both(seed in any::<u64>(), index in 0u64..1000, dx in -1.5f64..1.5, dy in -1.5f64..1.5) {
        let (a, b) = overlapping_pair(seed, index, dx, dy);
        let out = intersect(&a, &b);
        for p in &out {
            prop_assert!(contains_point(&a, *p, 1e-9));
            prop_assert!(contains_point(&b, *p, 1e-9));
        }
        if out.len() >= 3 {
            prop_assert!(signed_area(&out) >= -1e-12);
        }
    }

    #[test]
    fn no_consecutive_duplicates(seed in any::<u64>(), index in 0u64..1000, dx in -1.5f64..1.5, dy in -1.5f64..1.5) {
        let (a, b) = overlapping_pair(seed, index, dx, dy);
        let cfg = IntersectCfg::default();
        let out = intersect_with_cfg(&a, &b, cfg).vertices;
        let n = out.len();
        for i in 0..n {
            prop_assert!(!similar(out[(i + n - 1) % n], out[i], cfg.dedup_eps));
        }
    }

    #[test]
    fn larger_dedup_eps_never_adds_vertices(
        seed in any::<u64>(),
        index in 0u64..1000,
        dx in -1.5f64..1.5,
        dy in -1.5f64..1.5,
        e1 in 0.0f64..0.5,
        e2 in 0.0f64..0.5,
    ) {
        let (a, b) = overlapping_pair(seed, index, dx, dy);
        // Containment slack is left out: widening it can admit extra vertices
        // (see `tolerance_applies_to_containment_and_dedup`).
        let (lo, hi) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
        let count = |eps: f64| {
            let cfg = IntersectCfg { dedup_eps: eps, ..IntersectCfg::default() };
            intersect_with_cfg(&a, &b, cfg).vertices.len()
        };
        prop_assert!(count(hi) <= count(lo));
    }

    #[test]
    fn scaled_copy_contains_inner(seed in any::<u64>(), index in 0u64..1000, cx in -5.0f64..5.0, cy in -5.0f64..5.0) {
        let center = vector![cx, cy];
        let cfg = RadialCfg {
            center,
            ..RadialCfg::with_vertices(6)
        };
        let inner = draw_polygon_radial(cfg, ReplayToken { seed, index }).expect("poly");
        let outer: Vec<Vec2> = inner.iter().map(|p| center + (p - center) * 2.0).collect();
        let out = intersect(&inner, &outer);
        prop_assert_eq!(out, sort_anticlockwise_and_dedup(&inner, 1e-7));
    }

    #[test]
    fn far_apart_pairs_are_empty(seed in any::<u64>(), index in 0u64..1000, dy in -1.0f64..1.0) {
        let (a, b) = overlapping_pair(seed, index, 3.0, dy);
        prop_assert!(intersect(&a, &b).is_empty());
    }
}
