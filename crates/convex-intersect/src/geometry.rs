//! Small 2D helpers shared by `segment` and `polygon`.
//!
//! Points and displacement vectors are both `Vec2` (nalgebra `Vector2<f64>`):
//! subtraction, addition and scalar scaling come for free, the 2D cross
//! product lives here.

use nalgebra::Vector2;

/// Point or displacement vector in R².
pub type Vec2 = Vector2<f64>;

/// Signed area of the parallelogram spanned by `a` and `b` (2D cross product).
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Angle of `p` seen from `center`, in (-π, π].
#[inline]
pub fn angle_about(center: Vec2, p: Vec2) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Midpoint of the axis-aligned bounding box. `None` for an empty slice.
pub fn bounding_box_midpoint(points: &[Vec2]) -> Option<Vec2> {
    let first = points.first()?;
    let (mut lo, mut hi) = (*first, *first);
    for p in &points[1..] {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    Some((lo + hi) * 0.5)
}

/// Max-norm closeness: every coordinate differs by at most `eps`.
#[inline]
pub fn similar(a: Vec2, b: Vec2, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}
