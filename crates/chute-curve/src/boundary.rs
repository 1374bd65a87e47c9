use chute_core::error::{ChuteError, Result};
use serde::{Deserialize, Serialize};

/// Start height `h` at `x = 0` and horizontal span `w`; every curve ends at height 0 at `x = w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub h: f64,
    pub w: f64,
}

impl Boundary {
    /// Both `h` and `w` must be finite and positive.
    pub fn new(h: f64, w: f64) -> Result<Self> {
        if !(h.is_finite() && h > 0.0) {
            return Err(ChuteError::InvalidParameter(format!(
                "start height must be positive, got h = {}",
                h
            )));
        }
        if !(w.is_finite() && w > 0.0) {
            return Err(ChuteError::InvalidParameter(format!(
                "span must be positive, got w = {}",
                w
            )));
        }
        Ok(Self { h, w })
    }

    /// Mean gradient `h / w` of the drop.
    pub fn aspect(self) -> f64 {
        self.h / self.w
    }
}
