//! Planar convex hulls by divide and conquer.
//!
//! The crate computes the clockwise boundary of the convex hull of a finite
//! 2D point set. Two independent implementations are exposed:
//! - `hull::compute_hull`: divide-and-conquer with tangent-based merging,
//! - `hull::base_case_hull`: exhaustive O(n³) scan, usable as an oracle.
//!
//! All tolerances are threaded explicitly through `hull::HullCfg`; there is
//! no hidden module-level epsilon, so behavior is reproducible per config.

pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Points are plain nalgebra column vectors; alias for readability in callers.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{draw_point_set, ReplayToken, SamplerCfg};
    pub use crate::hull::{
        base_case_hull, compute_hull, is_clockwise, is_collinear, is_counter_clockwise,
        lower_tangent, merge_hulls, signed_area, sort_clockwise, upper_tangent, y_intercept,
        HullCfg, Orientation, Tangent,
    };
    pub use nalgebra::Vector2 as Vec2;
}
