//! Clockwise angular sort about the centroid.
//!
//! Every hull produced by this crate is reported in this order, so the sort
//! is the single place that fixes the output convention.

use nalgebra::Vector2;

/// Sort `points` in place by ascending clockwise angle from the +x axis about
/// the arithmetic-mean centroid, angles normalized into [0, 2π). Ties break
/// by ascending x, then ascending y. Slices shorter than 2 are left unchanged
/// (nothing to order, and the centroid of an empty slice is undefined).
pub fn sort_clockwise(points: &mut [Vector2<f64>]) {
    if points.len() < 2 {
        return;
    }
    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;

    let key = |p: &Vector2<f64>| {
        let angle = (p.y - cy).atan2(p.x - cx);
        let normalized = (angle + std::f64::consts::TAU) % std::f64::consts::TAU;
        (normalized, p.x, p.y)
    };
    points.sort_by(|a, b| {
        key(a)
            .partial_cmp(&key(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::{is_clockwise, HullCfg};
    use nalgebra::vector;

    #[test]
    fn short_slices_untouched() {
        let mut none: Vec<Vector2<f64>> = vec![];
        sort_clockwise(&mut none);
        assert!(none.is_empty());

        let mut one = vec![vector![3.0, 4.0]];
        sort_clockwise(&mut one);
        assert_eq!(one, vec![vector![3.0, 4.0]]);
    }

    #[test]
    fn unit_square_comes_out_clockwise() {
        let cfg = HullCfg::default();
        let mut points = vec![
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![0.0, 0.0],
            vector![1.0, 1.0],
        ];
        sort_clockwise(&mut points);
        // Every consecutive triple (wrapping) must turn clockwise.
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            let c = points[(i + 2) % points.len()];
            assert!(is_clockwise(a, b, c, cfg), "triple {a:?} {b:?} {c:?}");
        }
    }

    #[test]
    fn ties_break_by_x_then_y() {
        // Collinear points share angles 0 and π about the centroid (1.5, 0);
        // within each angle class the order is ascending x.
        let mut points = vec![
            vector![3.0, 0.0],
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 0.0],
        ];
        sort_clockwise(&mut points);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 0.0, 1.0]);
    }
}
