//! Divide-and-conquer orchestrator.
//!
//! Control flow only: sort by x, split, recurse, merge. Inputs of at most
//! `BASE_CASE_MAX` points go straight to the exhaustive base case; inner
//! recursion levels additionally normalize their rings to strict convexity so
//! the tangent walks above them always see well-formed rings.

use nalgebra::Vector2;

use super::merge::{merge_hulls, strip_collinear};
use super::naive::base_case_hull;
use super::types::HullCfg;

/// Largest subproblem handled by the exhaustive base case.
const BASE_CASE_MAX: usize = 6;

/// Relative gap below which two x coordinates count as the same column.
const SPLIT_REL_EPS: f64 = 1e-9;

/// True iff `b` is clearly to the right of `a` at floating-point scale.
///
/// The merge step needs the two halves strictly separated in x; a split
/// through a column of (near-)equal x coordinates would put the vertical
/// separator on top of both hulls and starve the tangent search of signal.
#[inline]
fn x_separated(a: f64, b: f64) -> bool {
    b - a > SPLIT_REL_EPS * a.abs().max(b.abs()).max(1.0)
}

/// Clockwise convex hull of a set of distinct points.
///
/// Points are sorted by (x, y), split at the midpoint (shifted so no column
/// straddles the cut), and the sub-hulls are stitched with `merge_hulls`.
/// Inputs of up to 6 points return exactly what `base_case_hull` returns,
/// including collinear boundary points; larger inputs are normalized to the
/// strict hull, so collinear boundary points are dropped there.
pub fn compute_hull(points: &[Vector2<f64>], cfg: HullCfg) -> Vec<Vector2<f64>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        (a.x, a.y)
            .partial_cmp(&(b.x, b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if sorted.len() <= BASE_CASE_MAX {
        return base_case_hull(&sorted, cfg);
    }
    recurse(&sorted, cfg)
}

/// Hull of an x-sorted slice, as a strictly convex clockwise ring.
fn recurse(points: &[Vector2<f64>], cfg: HullCfg) -> Vec<Vector2<f64>> {
    if points.len() <= BASE_CASE_MAX {
        let ring = base_case_hull(points, cfg);
        return strip_collinear(&ring, cfg);
    }

    let n = points.len();
    let mut mid = n / 2;
    while mid < n && !x_separated(points[mid - 1].x, points[mid].x) {
        mid += 1;
    }
    if mid == n {
        // The column at the cut runs to the end; retreat to its start.
        mid = n / 2;
        while mid > 0 && !x_separated(points[mid - 1].x, points[mid].x) {
            mid -= 1;
        }
    }
    if mid == 0 {
        // Everything sits in one x column; no vertical separator exists.
        let ring = base_case_hull(points, cfg);
        return strip_collinear(&ring, cfg);
    }

    let left = recurse(&points[..mid], cfg);
    let right = recurse(&points[mid..], cfg);
    merge_hulls(&left, &right, cfg)
}
