//! Exponential decay profile.

use chute_core::error::{ChuteError, Result};
use chute_core::traits::Validate;
use chute_core::Tolerance;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{check_boundary, Curve};
use crate::boundary::Boundary;
use crate::generate::FreeParamRange;

/// `y = a·exp(-b·x) + c`, with decay rate `b > 0` as the free parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exponential {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub boundary: Boundary,
}

impl Exponential {
    /// Draw range for `b·w`.
    pub const DEFAULT_RANGE: FreeParamRange = FreeParamRange::new(0.01, 100.0);

    /// Build from raw parameters without checking them; run `validate` before trusting the result.
    pub fn new(a: f64, b: f64, c: f64, h: f64, w: f64) -> Self {
        Self {
            a,
            b,
            c,
            boundary: Boundary { h, w },
        }
    }

    /// Solve `a` and `c` from `y(0) = h`, `y(w) = 0`:
    /// `a = h / (1 - exp(-b·w))`, `c = -h / (exp(b·w) - 1)`.
    pub fn from_b(b: f64, h: f64, w: f64) -> Result<Self> {
        let boundary = Boundary::new(h, w)?;
        if !(b.is_finite() && b > 0.0) {
            return Err(ChuteError::InvalidParameter(format!(
                "exponential decay rate must be positive, got b = {}",
                b
            )));
        }

        let bw = b * w;
        let a = h / -(-bw).exp_m1();
        let c = -h / bw.exp_m1();

        let curve = Self { a, b, c, boundary };
        curve.validate()?;
        tracing::debug!(a, b, c, h, w, "solved exponential curve");
        Ok(curve)
    }

    /// Draw `b = u / w` with `u` from `range` and solve the rest.
    pub fn generate<R: Rng>(h: f64, w: f64, range: FreeParamRange, rng: &mut R) -> Result<Self> {
        let b = range.draw(rng)? / w;
        Self::from_b(b, h, w)
    }
}

impl Curve for Exponential {
    fn height(&self, x: f64) -> Result<f64> {
        Ok(self.a * (-self.b * x).exp() + self.c)
    }

    fn slope(&self, x: f64) -> Result<f64> {
        Ok(-self.a * self.b * (-self.b * x).exp())
    }

    fn curvature(&self, x: f64) -> Result<f64> {
        Ok(self.a * self.b * self.b * (-self.b * x).exp())
    }

    fn boundary(&self) -> Boundary {
        self.boundary
    }
}

impl Validate for Exponential {
    fn validate(&self) -> Result<()> {
        check_boundary(self, Tolerance::default())
    }
}
