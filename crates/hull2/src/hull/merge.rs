//! Stitching two horizontally separated hulls into one.
//!
//! The merge finds the upper and lower tangents, then removes everything on
//! the facing sides strictly between the touch points: the left ring is
//! walked from the upper-left touch point toward descending angle until the
//! lower-left touch point, the right ring from the upper-right touch point
//! toward ascending angle until the lower-right touch point. What survives is
//! re-sorted and normalized to a strictly convex ring.

use std::collections::HashSet;

use nalgebra::Vector2;

use super::predicates::is_collinear;
use super::sort::sort_clockwise;
use super::tangent::{tangent_indices, TangentKind};
use super::types::{point_key, HullCfg};

/// Drop ring vertices that are collinear with their two ring neighbors.
///
/// The input must be a convex ring in clockwise order; collinear runs on an
/// edge collapse to their endpoints in a single pass. A fully collinear ring
/// (every triple flat) keeps only its two lexicographic extremes. Rings
/// shorter than 3 are returned unchanged.
pub(super) fn strip_collinear(ring: &[Vector2<f64>], cfg: HullCfg) -> Vec<Vector2<f64>> {
    let n = ring.len();
    if n < 3 {
        return ring.to_vec();
    }
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let next = ring[(i + 1) % n];
        if !is_collinear(prev, ring[i], next, cfg) {
            out.push(ring[i]);
        }
    }
    if out.len() >= 2 {
        return out;
    }
    let mut lo = ring[0];
    let mut hi = ring[0];
    for &p in ring {
        if (p.x, p.y) < (lo.x, lo.y) {
            lo = p;
        }
        if (p.x, p.y) > (hi.x, hi.y) {
            hi = p;
        }
    }
    vec![lo, hi]
}

fn all_collinear(points: &[Vector2<f64>], cfg: HullCfg) -> bool {
    if points.len() < 3 {
        return true;
    }
    let (a, b) = (points[0], points[1]);
    points[2..].iter().all(|&p| is_collinear(a, b, p, cfg))
}

/// Clockwise hull of the union of two horizontally separated clockwise hulls.
///
/// Preconditions (supplied by the orchestrator, not verified here): both
/// rings are strictly convex, share no point, and the left ring lies entirely
/// left of the right ring.
pub fn merge_hulls(
    left: &[Vector2<f64>],
    right: &[Vector2<f64>],
    cfg: HullCfg,
) -> Vec<Vector2<f64>> {
    // Two segments (or points) on one line have no two-sided tangent pair;
    // their union hull is the combined segment.
    if left.len() <= 2 && right.len() <= 2 {
        let mut all: Vec<Vector2<f64>> = left.iter().chain(right).copied().collect();
        if all_collinear(&all, cfg) {
            sort_clockwise(&mut all);
            return strip_collinear(&all, cfg);
        }
    }

    let (upper_l, upper_r) = tangent_indices(left, right, TangentKind::Upper);
    let (lower_l, lower_r) = tangent_indices(left, right, TangentKind::Lower);
    let nl = left.len();
    let nr = right.len();

    let mut removed: HashSet<(u64, u64)> = HashSet::new();
    // Left ring: the facing (east) side runs from the upper touch point
    // toward descending angle down to the lower touch point. When the touch
    // points coincide the left hull contributes exactly that vertex, and the
    // walk removes the whole remainder of the ring.
    let mut i = (upper_l + nl - 1) % nl;
    while i != lower_l {
        removed.insert(point_key(left[i]));
        i = (i + nl - 1) % nl;
    }
    // Right ring: the facing (west) side runs from the upper touch point
    // toward ascending angle down to the lower touch point.
    let mut i = (upper_r + 1) % nr;
    while i != lower_r {
        removed.insert(point_key(right[i]));
        i = (i + 1) % nr;
    }

    let mut out: Vec<Vector2<f64>> = left
        .iter()
        .chain(right)
        .copied()
        .filter(|&p| !removed.contains(&point_key(p)))
        .collect();
    sort_clockwise(&mut out);
    strip_collinear(&out, cfg)
}
