//! Upper and lower tangent search between two horizontally separated hulls.
//!
//! Both hulls are rings in the crate's clockwise order (ascending angle about
//! their own centroid), the left ring entirely left of the right ring. The
//! search maximizes (upper) or minimizes (lower) the y-intercept of the
//! candidate line at the vertical separator halfway between the hulls'
//! facing extremes, walking each ring with explicit modular indexing.

use nalgebra::Vector2;

use super::predicates::y_intercept;
use super::types::Tangent;

/// Which of the two stitch lines is being searched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TangentKind {
    Upper,
    Lower,
}

/// Index of the first ring vertex with strictly maximal key.
fn extreme_index(ring: &[Vector2<f64>], key: impl Fn(Vector2<f64>) -> f64) -> usize {
    let mut best = 0;
    for i in 1..ring.len() {
        if key(ring[i]) > key(ring[best]) {
            best = i;
        }
    }
    best
}

/// Tangent touch points as indices into the two rings.
///
/// Starting from the facing extremes (rightmost left vertex, leftmost right
/// vertex), each ring pointer walks one direction only: for the upper tangent
/// the left pointer advances in ring order and the right pointer retreats,
/// both chasing a strictly better intercept at the separator; the lower
/// tangent mirrors the directions and seeks the minimum. A pointer stops at
/// the first non-improving candidate, and the search ends when a full pass
/// moves neither pointer. The intercept accumulator begins at the height of
/// the initial extreme pair, so improvement is relative to an actual line
/// through both hulls rather than an absolute reference height.
///
/// Panics if either ring is empty.
pub(super) fn tangent_indices(
    left: &[Vector2<f64>],
    right: &[Vector2<f64>],
    kind: TangentKind,
) -> (usize, usize) {
    assert!(
        !left.is_empty() && !right.is_empty(),
        "tangent_indices: empty hull ring"
    );
    let nl = left.len();
    let nr = right.len();
    let mut l = extreme_index(left, |p| p.x);
    let mut r = extreme_index(right, |p| -p.x);
    let x_sep = (left[l].x + right[r].x) / 2.0;
    let mut best = y_intercept(left[l], right[r], x_sep);
    let improves = |v: f64, best: f64| match kind {
        TangentKind::Upper => v > best,
        TangentKind::Lower => v < best,
    };

    loop {
        let (prev_l, prev_r) = (l, r);
        loop {
            let c = match kind {
                TangentKind::Upper => (l + 1) % nl,
                TangentKind::Lower => (l + nl - 1) % nl,
            };
            let v = y_intercept(left[c], right[r], x_sep);
            if improves(v, best) {
                l = c;
                best = v;
            } else {
                break;
            }
        }
        loop {
            let c = match kind {
                TangentKind::Upper => (r + nr - 1) % nr,
                TangentKind::Lower => (r + 1) % nr,
            };
            let v = y_intercept(left[l], right[c], x_sep);
            if improves(v, best) {
                r = c;
                best = v;
            } else {
                break;
            }
        }
        if l == prev_l && r == prev_r {
            return (l, r);
        }
    }
}

/// Upper tangent between two horizontally separated clockwise hulls.
pub fn upper_tangent(left: &[Vector2<f64>], right: &[Vector2<f64>]) -> Tangent {
    let (l, r) = tangent_indices(left, right, TangentKind::Upper);
    Tangent::new(left[l], right[r])
}

/// Lower tangent between two horizontally separated clockwise hulls.
pub fn lower_tangent(left: &[Vector2<f64>], right: &[Vector2<f64>]) -> Tangent {
    let (l, r) = tangent_indices(left, right, TangentKind::Lower);
    Tangent::new(left[l], right[r])
}
