//! Exhaustive O(n³) hull (the divide-and-conquer base case).
//!
//! For every ordered pair (a, b) the remaining points are bucketed by
//! orientation of (a, x, b); the pair is a hull edge iff no two points fall on
//! opposite sides. Intentionally cubic: only run on small inputs (the
//! recursion threshold is 6), and independently implementable, which makes it
//! the cross-check oracle for the divide-and-conquer path.

use std::collections::HashSet;

use nalgebra::Vector2;

use super::predicates::{orientation, Orientation};
use super::sort::sort_clockwise;
use super::types::{point_key, HullCfg};

/// Hull members in insertion order with O(1) coordinate-keyed membership.
#[derive(Default)]
struct PointSet {
    points: Vec<Vector2<f64>>,
    seen: HashSet<(u64, u64)>,
}

impl PointSet {
    fn insert(&mut self, p: Vector2<f64>) {
        if self.seen.insert(point_key(p)) {
            self.points.push(p);
        }
    }

    #[inline]
    fn contains(&self, p: Vector2<f64>) -> bool {
        self.seen.contains(&point_key(p))
    }
}

/// Clockwise convex hull by exhaustive edge search.
///
/// Any input size is accepted, but callers should keep n small (the
/// orchestrator caps it at 6). With ≤3 points, or a fully collinear input,
/// every point is on the hull and all are returned. Distinct input points are
/// an unchecked precondition.
pub fn base_case_hull(points: &[Vector2<f64>], cfg: HullCfg) -> Vec<Vector2<f64>> {
    if points.len() <= 3 {
        let mut out = points.to_vec();
        sort_clockwise(&mut out);
        return out;
    }

    let mut hull = PointSet::default();
    for (i, &a) in points.iter().enumerate() {
        for (j, &b) in points.iter().enumerate() {
            if i == j || (hull.contains(a) && hull.contains(b)) {
                continue;
            }

            let mut clockwise = 0usize;
            let mut counter_clockwise = 0usize;
            let mut collinear: Vec<Vector2<f64>> = Vec::new();

            for (k, &x) in points.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                // Which side of the a-b line does x lie on?
                match orientation(a, x, b, cfg) {
                    Orientation::Clockwise => clockwise += 1,
                    Orientation::CounterClockwise => counter_clockwise += 1,
                    Orientation::Collinear => collinear.push(x),
                }
            }

            // (a, b) is a hull edge iff the rest does not straddle the line;
            // collinear points sit on the boundary and join the hull too.
            let straddles = clockwise > 0 && counter_clockwise > 0;
            let nonempty = clockwise > 0 || counter_clockwise > 0 || !collinear.is_empty();
            if !straddles && nonempty {
                hull.insert(a);
                hull.insert(b);
                for x in collinear.drain(..) {
                    hull.insert(x);
                }
            }
        }
    }

    let mut out = hull.points;
    sort_clockwise(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn three_points_are_their_own_hull() {
        let cfg = HullCfg::default();
        let points = vec![vector![5.0, 20.0], vector![10.0, 10.0], vector![15.0, 17.0]];
        let hull = base_case_hull(&points, cfg);
        assert_eq!(hull.len(), 3);
    }

    #[test]
    fn square_with_center_drops_center() {
        let cfg = HullCfg::default();
        let points = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![1.0, 1.0],
        ];
        let hull = base_case_hull(&points, cfg);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&vector![1.0, 1.0]));
    }

    #[test]
    fn collinear_points_all_kept() {
        let cfg = HullCfg::default();
        let points: Vec<_> = (0..5).map(|i| vector![i as f64, i as f64]).collect();
        let hull = base_case_hull(&points, cfg);
        assert_eq!(hull.len(), 5);
    }

    #[test]
    fn duplicate_edges_do_not_duplicate_points() {
        let cfg = HullCfg::default();
        // Each vertex of the triangle is reachable via two edges.
        let points = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 3.0],
            vector![2.0, 1.0],
        ];
        let hull = base_case_hull(&points, cfg);
        assert_eq!(hull.len(), 3);
        for i in 0..hull.len() {
            for j in (i + 1)..hull.len() {
                assert_ne!(hull[i], hull[j]);
            }
        }
    }
}
