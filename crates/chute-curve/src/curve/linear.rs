//! Straight ramp.

use chute_core::error::Result;
use chute_core::traits::Validate;
use chute_core::Tolerance;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{check_boundary, Curve};
use crate::boundary::Boundary;
use crate::generate::FreeParamRange;

/// `y = a·x + b`. The boundary fixes both coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    pub a: f64,
    pub b: f64,
    pub boundary: Boundary,
}

impl Linear {
    /// Unused by `generate`; present so every variant offers one.
    pub const DEFAULT_RANGE: FreeParamRange = FreeParamRange::new(0.0, 0.0);

    /// Build from raw parameters without checking them; run `validate` before trusting the result.
    pub fn new(a: f64, b: f64, h: f64, w: f64) -> Self {
        Self {
            a,
            b,
            boundary: Boundary { h, w },
        }
    }

    /// The straight line from `(0, h)` to `(w, 0)`: `a = -h/w`, `b = h`.
    pub fn from_boundary(h: f64, w: f64) -> Result<Self> {
        let boundary = Boundary::new(h, w)?;
        let curve = Self {
            a: -h / w,
            b: h,
            boundary,
        };
        curve.validate()?;
        tracing::debug!(a = curve.a, b = curve.b, h, w, "solved linear curve");
        Ok(curve)
    }

    /// The line has no free parameter, so nothing is drawn from `range` or `rng`.
    pub fn generate<R: Rng>(h: f64, w: f64, _range: FreeParamRange, _rng: &mut R) -> Result<Self> {
        Self::from_boundary(h, w)
    }
}

impl Curve for Linear {
    fn height(&self, x: f64) -> Result<f64> {
        Ok(self.a * x + self.b)
    }

    fn slope(&self, _x: f64) -> Result<f64> {
        Ok(self.a)
    }

    fn curvature(&self, _x: f64) -> Result<f64> {
        Ok(0.0)
    }

    fn boundary(&self) -> Boundary {
        self.boundary
    }
}

impl Validate for Linear {
    fn validate(&self) -> Result<()> {
        check_boundary(self, Tolerance::default())
    }
}
