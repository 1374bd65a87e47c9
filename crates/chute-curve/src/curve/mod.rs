//! Curve trait and the closed-form variants.

mod linear;
mod exponential;
mod parabolic;
mod circular;
mod shape;

use chute_core::error::{ChuteError, Result};
use chute_core::Tolerance;
use rayon::prelude::*;

use crate::boundary::Boundary;

pub use linear::Linear;
pub use exponential::Exponential;
pub use parabolic::Parabolic;
pub use circular::Circular;
pub use shape::{CurveKind, CurveShape};

/// A planar descent profile `y(x)` over `[0, w]`.
///
/// `curvature` is the raw second derivative `d(slope)/dx`, which is what
/// the motion model consumes; it carries no `(1 + m²)^{3/2}` normalization.
pub trait Curve: Send + Sync {
    /// Height of the curve at horizontal position `x`.
    fn height(&self, x: f64) -> Result<f64>;

    /// First derivative `dy/dx` at `x`.
    fn slope(&self, x: f64) -> Result<f64>;

    /// Second derivative `d²y/dx²` at `x`.
    fn curvature(&self, x: f64) -> Result<f64>;

    /// The boundary values the curve was fitted to.
    fn boundary(&self) -> Boundary;

    fn heights(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.par_iter().map(|&x| self.height(x)).collect()
    }

    fn slopes(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.par_iter().map(|&x| self.slope(x)).collect()
    }

    fn curvatures(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.par_iter().map(|&x| self.curvature(x)).collect()
    }

    /// Whether `y(0)` and `y(w)` hit `h` and `0` within the default boundary tolerance.
    fn is_valid_curve(&self) -> bool {
        self.is_valid_curve_with(Tolerance::default())
    }

    /// Whether both boundary conditions hold within `tol`.
    fn is_valid_curve_with(&self, tol: Tolerance) -> bool {
        check_boundary(self, tol).is_ok()
    }
}

/// Check both boundary conditions of `curve` against `tol`.
///
/// The stored `(h, w)` must themselves be positive, since direct
/// constructors do not check them.
pub fn check_boundary<C: Curve + ?Sized>(curve: &C, tol: Tolerance) -> Result<()> {
    let boundary = curve.boundary();
    let Boundary { h, w } = Boundary::new(boundary.h, boundary.w)?;

    let start = curve.height(0.0)?;
    if !tol.boundary_eq(start, h) {
        return Err(ChuteError::InvalidCurve(format!(
            "height at x = 0 is {}, expected h = {} (tolerance {})",
            start, h, tol.boundary
        )));
    }

    let end = curve.height(w)?;
    if !tol.boundary_eq(end, 0.0) {
        return Err(ChuteError::InvalidCurve(format!(
            "height at x = w = {} is {}, expected 0 (tolerance {})",
            w, end, tol.boundary
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tighter_tolerance_rejects_near_miss() {
        // starts 5e-3 above h: inside the default tolerance, outside a strict one
        let line = Linear::new(-1.0, 1.005, 1.0, 1.0);
        assert!(line.is_valid_curve());
        assert!(!line.is_valid_curve_with(Tolerance::strict()));
        assert!(matches!(
            check_boundary(&line, Tolerance::strict()),
            Err(ChuteError::InvalidCurve(_))
        ));
    }

    #[test]
    fn test_unchecked_boundary_fails_validation() {
        let line = Linear::new(1.0, -1.0, -1.0, 0.0);
        assert!(!line.is_valid_curve());
        assert!(matches!(
            check_boundary(&line, Tolerance::default()),
            Err(ChuteError::InvalidParameter(_))
        ));
    }
}
