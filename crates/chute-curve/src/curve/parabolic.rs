//! Parabolic profile.

use chute_core::error::{ChuteError, Result};
use chute_core::traits::Validate;
use chute_core::Tolerance;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{check_boundary, Curve};
use crate::boundary::Boundary;
use crate::generate::FreeParamRange;

/// `y = a·x² + b·x + c`, with the leading coefficient `a` as the free parameter.
///
/// A negative `a` large enough to lift the curve above `h` is accepted here;
/// the motion model reports the resulting energy deficit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parabolic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub boundary: Boundary,
}

impl Parabolic {
    /// Draw range for `a·w`.
    pub const DEFAULT_RANGE: FreeParamRange = FreeParamRange::new(0.0, 10.0);

    /// Build from raw parameters without checking them; run `validate` before trusting the result.
    pub fn new(a: f64, b: f64, c: f64, h: f64, w: f64) -> Self {
        Self {
            a,
            b,
            c,
            boundary: Boundary { h, w },
        }
    }

    /// Solve `b = -a·w - h/w` and `c = h`.
    pub fn from_a(a: f64, h: f64, w: f64) -> Result<Self> {
        let boundary = Boundary::new(h, w)?;
        if !a.is_finite() {
            return Err(ChuteError::InvalidParameter(format!(
                "parabola coefficient must be finite, got a = {}",
                a
            )));
        }

        let b = -a * w - h / w;
        let c = h;

        let curve = Self { a, b, c, boundary };
        curve.validate()?;
        tracing::debug!(a, b, c, h, w, "solved parabolic curve");
        Ok(curve)
    }

    /// Draw `a = u / w` with `u` from `range` and solve the rest.
    pub fn generate<R: Rng>(h: f64, w: f64, range: FreeParamRange, rng: &mut R) -> Result<Self> {
        let a = range.draw(rng)? / w;
        Self::from_a(a, h, w)
    }
}

impl Curve for Parabolic {
    fn height(&self, x: f64) -> Result<f64> {
        Ok(self.a * x * x + self.b * x + self.c)
    }

    fn slope(&self, x: f64) -> Result<f64> {
        Ok(2.0 * self.a * x + self.b)
    }

    fn curvature(&self, _x: f64) -> Result<f64> {
        Ok(2.0 * self.a)
    }

    fn boundary(&self) -> Boundary {
        self.boundary
    }
}

impl Validate for Parabolic {
    fn validate(&self) -> Result<()> {
        check_boundary(self, Tolerance::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parabolic_boundary_any_sign() {
        for &a in &[-3.0, 0.0, 0.7, 12.0] {
            let curve = Parabolic::from_a(a, 1.0, 2.0).unwrap();
            assert!((curve.height(0.0).unwrap() - 1.0).abs() < 1e-12, "a={}", a);
            assert!(curve.height(2.0).unwrap().abs() < 1e-12, "a={}", a);
        }
    }

    #[test]
    fn test_parabolic_zero_a_is_line() {
        let curve = Parabolic::from_a(0.0, 1.0, 1.0).unwrap();
        assert!((curve.slope(0.5).unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(curve.curvature(0.5).unwrap(), 0.0);
    }

    #[test]
    fn test_parabolic_vertex_slope() {
        let curve = Parabolic::from_a(2.0, 1.0, 1.0).unwrap();
        // b = -2 - 1 = -3, vertex at x = 0.75
        assert!((curve.b + 3.0).abs() < 1e-12);
        assert!(curve.slope(0.75).unwrap().abs() < 1e-12);
        assert!((curve.curvature(0.1).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_parabolic_rejects_nan() {
        assert!(matches!(
            Parabolic::from_a(f64::NAN, 1.0, 1.0),
            Err(ChuteError::InvalidParameter(_))
        ));
    }
}
