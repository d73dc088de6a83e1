//! Intersection of convex polygons in the plane.
//!
//! Layers
//! - `geometry`: `Vec2` (nalgebra) plus cross product, angles, bounding boxes.
//! - `segment`: parametric segments and their crossings.
//! - `polygon`: containment, ordering and the intersection itself.
//! - `rand`: reproducible random convex polygons for demos, tests and benches.
//!
//! Everything is synchronous and stateless; inputs are never mutated.

pub mod cfg;
pub mod geometry;
pub mod polygon;
pub mod rand;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geometry::{cross, Vec2};
pub use polygon::{
    intersect, intersect_with_cfg, intersect_with_tolerance, IntersectCfg, Intersection,
};
pub use segment::{segment_intersection, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{cross, similar, Vec2};
    pub use crate::polygon::{
        contains_point, intersect, intersect_with_cfg, intersect_with_tolerance, is_nondegenerate,
        signed_area, sort_anticlockwise_and_dedup, IntersectCfg, Intersection,
    };
    pub use crate::rand::{draw_pair, draw_polygon_radial, RadialCfg, ReplayToken};
    pub use crate::segment::{edges, segment_intersection, Segment};
}
