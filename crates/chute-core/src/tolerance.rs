/// Tolerances used when checking curves and energy balances.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Allowed absolute miss of a curve's boundary heights
    pub boundary: f64,
    /// Energy drops above `-energy` are rounded up to zero
    pub energy: f64,
}

impl Tolerance {
    pub const BOUNDARY: f64 = 1e-2;
    pub const ENERGY: f64 = 1e-9;

    pub fn new(boundary: f64, energy: f64) -> Self {
        Self { boundary, energy }
    }

    pub fn strict() -> Self {
        Self {
            boundary: 1e-9,
            energy: 1e-12,
        }
    }

    /// Check that `value` hits `target` within the boundary tolerance.
    pub fn boundary_eq(self, value: f64, target: f64) -> bool {
        approx::abs_diff_eq!(value, target, epsilon = self.boundary)
    }

    /// Clamp a tiny negative energy drop caused by rounding to zero.
    ///
    /// Returns `None` when the drop is negative beyond tolerance.
    pub fn energy_drop(self, drop: f64) -> Option<f64> {
        if drop >= 0.0 {
            Some(drop)
        } else if drop >= -self.energy {
            Some(0.0)
        } else {
            None
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::BOUNDARY, Self::ENERGY)
    }
}
