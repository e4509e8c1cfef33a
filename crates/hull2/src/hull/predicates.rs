//! Signed-area orientation predicates and vertical-line intercepts.
//!
//! All three orientation classes are derived from one signed area, thresholded
//! by `HullCfg::eps_area`. For any triple with finite coordinates exactly one
//! of clockwise / counter-clockwise / collinear holds; `orientation` enforces
//! that partition and treats an escape (non-finite area) as a fatal defect.

use nalgebra::Vector2;

use super::types::HullCfg;

/// Slope used for segments with equal x coordinates.
///
/// Intentional approximation: a steep finite slope instead of true
/// vertical-line handling keeps `y_intercept` total without a special case.
const VERTICAL_SLOPE: f64 = 1e5;

/// Orientation of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Signed area of the triangle (a, b, c).
///
/// Negative for a clockwise triple, positive for counter-clockwise, zero for
/// collinear points (up to floating-point error).
#[inline]
pub fn signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    ((c.x - b.x) * (b.y - a.y) - (b.x - a.x) * (c.y - b.y)) / 2.0
}

/// True iff (a, b, c) is a clockwise triple within tolerance.
#[inline]
pub fn is_clockwise(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, cfg: HullCfg) -> bool {
    signed_area(a, b, c) < -cfg.eps_area
}

/// True iff (a, b, c) is a counter-clockwise triple within tolerance.
#[inline]
pub fn is_counter_clockwise(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    cfg: HullCfg,
) -> bool {
    signed_area(a, b, c) > cfg.eps_area
}

/// True iff (a, b, c) are collinear within tolerance.
#[inline]
pub fn is_collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, cfg: HullCfg) -> bool {
    signed_area(a, b, c).abs() <= cfg.eps_area
}

/// Classify a triple into exactly one orientation class.
///
/// Panics if the signed area is not finite (NaN/inf coordinates): that is an
/// internal-invariant violation, surfaced as a defect rather than swallowed.
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, cfg: HullCfg) -> Orientation {
    let area = signed_area(a, b, c);
    if area < -cfg.eps_area {
        Orientation::Clockwise
    } else if area > cfg.eps_area {
        Orientation::CounterClockwise
    } else if area.abs() <= cfg.eps_area {
        Orientation::Collinear
    } else {
        // Only reachable when `area` is NaN; the three branches otherwise
        // partition the reals.
        panic!("orientation: unclassifiable triple {a:?}, {b:?}, {c:?} (signed area {area})");
    }
}

/// Y coordinate of the line through `p` and `q` at the vertical line `x`.
///
/// Segments with `p.x == q.x` use the `VERTICAL_SLOPE` sentinel instead of
/// dividing by zero; see the constant's note.
#[inline]
pub fn y_intercept(p: Vector2<f64>, q: Vector2<f64>, x: f64) -> f64 {
    let dx = q.x - p.x;
    let slope = if dx != 0.0 { (q.y - p.y) / dx } else { VERTICAL_SLOPE };
    p.y + (x - p.x) * slope
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn signed_area_signs() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![1.0, 1.0];
        // Convention: (0,0) -> (1,0) -> (1,1) counts as clockwise.
        assert!(signed_area(a, b, c) < 0.0);
        assert!(signed_area(a, c, b) > 0.0);
        assert_eq!(signed_area(a, b, vector![2.0, 0.0]), 0.0);
    }

    #[test]
    fn orientation_partition() {
        let cfg = HullCfg::default();
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![1.0, 1.0];
        assert!(is_clockwise(a, b, c, cfg));
        assert!(!is_clockwise(a, c, b, cfg));
        assert!(is_counter_clockwise(a, c, b, cfg));
        assert!(!is_counter_clockwise(a, b, c, cfg));
        assert_eq!(orientation(a, b, c, cfg), Orientation::Clockwise);
        assert_eq!(orientation(a, c, b, cfg), Orientation::CounterClockwise);
        assert_eq!(
            orientation(a, b, vector![-3.0, 0.0], cfg),
            Orientation::Collinear
        );
    }

    #[test]
    fn orientation_randomized_exactly_one_class() {
        let cfg = HullCfg::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut draw = move || {
            vector![
                rng.gen_range(-100i64..100) as f64,
                rng.gen_range(-100i64..100) as f64
            ]
        };
        for _ in 0..200 {
            let (a, b, c) = (draw(), draw(), draw());
            let classes = [
                is_clockwise(a, b, c, cfg),
                is_counter_clockwise(a, b, c, cfg),
                is_collinear(a, b, c, cfg),
            ];
            assert_eq!(classes.iter().filter(|&&x| x).count(), 1);
        }
    }

    #[test]
    #[should_panic(expected = "unclassifiable")]
    fn orientation_rejects_nan() {
        let cfg = HullCfg::default();
        orientation(
            vector![f64::NAN, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            cfg,
        );
    }

    #[test]
    fn y_intercept_interpolates() {
        let p = vector![0.0, 0.0];
        let q = vector![20.0, 40.0];
        for x in 0..=40 {
            let y = y_intercept(p, q, x as f64);
            assert!((y - 2.0 * x as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn y_intercept_vertical_sentinel() {
        let p = vector![3.0, 0.0];
        let q = vector![3.0, 10.0];
        // Steep sentinel slope, not an error.
        assert_eq!(y_intercept(p, q, 3.0), 0.0);
        assert_eq!(y_intercept(p, q, 4.0), 1e5);
    }
}
