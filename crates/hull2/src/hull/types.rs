//! Basic types and tolerances shared by the hull algorithms.
//!
//! - `HullCfg`: centralizes the collinearity epsilon so tolerance is an
//!   explicit parameter everywhere, never module-level state.
//! - `Tangent`: one endpoint per hull, the stitch line used by the merge.

use nalgebra::Vector2;

/// Hull computation configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Signed areas with |area| <= eps_area are treated as collinear.
    pub eps_area: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_area: f64::EPSILON,
        }
    }
}

/// Tangent line between two horizontally separated hulls.
///
/// `left` lies on the left hull, `right` on the right hull; the segment
/// between them touches both hulls without crossing either.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangent {
    pub left: Vector2<f64>,
    pub right: Vector2<f64>,
}

impl Tangent {
    #[inline]
    pub fn new(left: Vector2<f64>, right: Vector2<f64>) -> Self {
        Self { left, right }
    }
}

/// Exact-coordinate key for set membership on points.
///
/// Point equality is exact coordinate equality, so the bit patterns are a
/// faithful hash key. Inputs with both +0.0 and -0.0 would land in different
/// buckets; the distinct-points precondition rules that out for the cases we
/// care about.
#[inline]
pub(crate) fn point_key(p: Vector2<f64>) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}
