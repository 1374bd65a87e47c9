//! Circular arc profile.

use chute_core::error::{ChuteError, Result};
use chute_core::traits::Validate;
use chute_core::Tolerance;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{check_boundary, Curve};
use crate::boundary::Boundary;
use crate::generate::FreeParamRange;

/// Radicands this far below zero, relative to `R²`, are rounding noise.
const RADICAND_EPS: f64 = 1e-12;

/// Lower arc `y = y0 - sqrt(R² - (x - x0)²)` through `(0, h)` and `(w, 0)`.
///
/// The free parameter `a >= h/w` sets how deep the arc dips: the centre lies
/// on the perpendicular bisector of the chord at `((w + a·h)/2, (h + a·w)/2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circular {
    /// Squared radius `R²`.
    pub r2: f64,
    pub x0: f64,
    pub y0: f64,
    pub boundary: Boundary,
}

impl Circular {
    /// Draw range for `a / (h/w)`; 1 is the steepest admissible arc.
    pub const DEFAULT_RANGE: FreeParamRange = FreeParamRange::new(1.0, 3.0);

    /// Build from raw parameters without checking them; run `validate` before trusting the result.
    pub fn new(r2: f64, x0: f64, y0: f64, h: f64, w: f64) -> Self {
        Self {
            r2,
            x0,
            y0,
            boundary: Boundary { h, w },
        }
    }

    /// Solve `x0 = (w + a·h)/2`, `y0 = (h + a·w)/2`, `R² = (1 + a²)(h² + w²)/4`.
    ///
    /// At `a = h/w` the arc is vertical at `x = 0`, so the slope there is undefined.
    pub fn from_a(a: f64, h: f64, w: f64) -> Result<Self> {
        let boundary = Boundary::new(h, w)?;
        if !a.is_finite() || a < boundary.aspect() {
            return Err(ChuteError::InvalidParameter(format!(
                "circular shape factor must be at least h/w = {}, got a = {}",
                boundary.aspect(),
                a
            )));
        }

        let x0 = (w + a * h) / 2.0;
        let y0 = (h + a * w) / 2.0;
        let r2 = (1.0 + a * a) * (h * h + w * w) / 4.0;

        let curve = Self { r2, x0, y0, boundary };
        curve.validate()?;
        tracing::debug!(a, r2, x0, y0, h, w, "solved circular curve");
        Ok(curve)
    }

    /// Draw `a = u·h/w` with `u` from `range` and solve the rest.
    pub fn generate<R: Rng>(h: f64, w: f64, range: FreeParamRange, rng: &mut R) -> Result<Self> {
        let a = range.draw(rng)? * h / w;
        Self::from_a(a, h, w)
    }

    pub fn radius(&self) -> f64 {
        self.r2.sqrt()
    }

    /// `R² - (x - x0)²`, with rounding noise below zero snapped to zero.
    fn radicand(&self, x: f64) -> Result<(f64, f64)> {
        let dx = x - self.x0;
        let r = self.r2 - dx * dx;
        if r >= 0.0 {
            Ok((dx, r))
        } else if r >= -RADICAND_EPS * self.r2 {
            Ok((dx, 0.0))
        } else {
            Err(ChuteError::Domain(format!(
                "x = {} lies outside the arc (R² - (x - x0)² = {})",
                x, r
            )))
        }
    }

    /// Like `radicand`, but the tangent must not be vertical.
    fn open_radicand(&self, x: f64) -> Result<(f64, f64)> {
        let (dx, r) = self.radicand(x)?;
        if r > 0.0 {
            Ok((dx, r))
        } else {
            Err(ChuteError::Domain(format!(
                "arc is vertical at x = {}, slope undefined",
                x
            )))
        }
    }
}

impl Curve for Circular {
    fn height(&self, x: f64) -> Result<f64> {
        let (_, r) = self.radicand(x)?;
        Ok(self.y0 - r.sqrt())
    }

    fn slope(&self, x: f64) -> Result<f64> {
        let (dx, r) = self.open_radicand(x)?;
        Ok(dx / r.sqrt())
    }

    fn curvature(&self, x: f64) -> Result<f64> {
        let (_, r) = self.open_radicand(x)?;
        Ok(self.r2 / r.powf(1.5))
    }

    fn boundary(&self) -> Boundary {
        self.boundary
    }
}

impl Validate for Circular {
    fn validate(&self) -> Result<()> {
        check_boundary(self, Tolerance::default())
    }
}
