//! Planar convex hull computation (divide and conquer).
//!
//! Purpose
//! - Compute the clockwise boundary of the convex hull of a finite set of
//!   distinct 2D points, with floating-point tolerant orientation tests.
//! - Keep the API minimal and numerically explicit (eps-aware via `HullCfg`).
//!
//! Structure
//! - `predicates`: signed-area orientation tests and vertical-line intercepts.
//! - `sort`: clockwise angular sort about the centroid (the output order).
//! - `naive`: exhaustive O(n³) base case, doubles as a correctness oracle.
//! - `tangent`/`merge`: upper/lower tangent search and the stitch step.
//! - `dnc`: the recursive orchestrator (`compute_hull`).
//! - `rand`: deterministic point-set sampler for benches and tests.
//!
//! Preconditions
//! - Input points are distinct. Duplicates are an unchecked precondition
//!   violation; behavior is left undefined rather than silently deduplicated.

mod dnc;
mod merge;
mod naive;
mod predicates;
pub mod rand;
mod sort;
mod tangent;
mod types;

pub use dnc::compute_hull;
pub use merge::merge_hulls;
pub use naive::base_case_hull;
pub use predicates::{
    is_clockwise, is_collinear, is_counter_clockwise, orientation, signed_area, y_intercept,
    Orientation,
};
pub use sort::sort_clockwise;
pub use tangent::{lower_tangent, upper_tangent};
pub use types::{HullCfg, Tangent};
