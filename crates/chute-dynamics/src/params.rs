//! Physical parameters shared by motion models.

use chute_core::error::{ChuteError, Result};
use chute_core::traits::Validate;
use chute_core::Tolerance;
use chute_curve::curve::check_boundary;
use chute_curve::Curve;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Gravitational acceleration, positive downwards
    pub gravity: f64,
    pub tolerance: Tolerance,
}

impl SimParams {
    pub const STANDARD_GRAVITY: f64 = 9.8;

    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Parse and validate parameters from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| ChuteError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Check a curve's boundary conditions against the configured tolerance.
    pub fn check_curve(&self, curve: &dyn Curve) -> Result<()> {
        check_boundary(curve, self.tolerance)
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: Self::STANDARD_GRAVITY,
            tolerance: Tolerance::default(),
        }
    }
}

impl Validate for SimParams {
    fn validate(&self) -> Result<()> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ChuteError::InvalidParameter(format!(
                "gravity must be positive, got g = {}",
                self.gravity
            )));
        }
        if !(self.tolerance.boundary >= 0.0 && self.tolerance.energy >= 0.0) {
            return Err(ChuteError::InvalidParameter(format!(
                "tolerances must be non-negative, got {:?}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
