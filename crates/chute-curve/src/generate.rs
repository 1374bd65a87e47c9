//! Free-parameter draws for curve generation.
//!
//! Each variant scales the drawn value by its own span convention before
//! solving for the remaining parameters; see the variant's `generate`.

use chute_core::error::{ChuteError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed interval a free parameter is drawn from uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeParamRange {
    pub low: f64,
    pub high: f64,
}

impl FreeParamRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn draw<R: Rng>(&self, rng: &mut R) -> Result<f64> {
        if !(self.low.is_finite() && self.high.is_finite()) || self.low > self.high {
            return Err(ChuteError::InvalidParameter(format!(
                "free parameter range [{}, {}] is empty or unbounded",
                self.low, self.high
            )));
        }
        Ok(rng.random_range(self.low..=self.high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = FreeParamRange::new(-2.0, 5.0);
        for _ in 0..1000 {
            let v = range.draw(&mut rng).unwrap();
            assert!((-2.0..=5.0).contains(&v), "draw out of range: {}", v);
        }
    }

    #[test]
    fn test_draw_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let v = FreeParamRange::new(3.0, 3.0).draw(&mut rng).unwrap();
        assert_eq!(v, 3.0);
    }

    #[test]
    fn test_draw_rejects_inverted_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(FreeParamRange::new(2.0, 1.0).draw(&mut rng).is_err());
        assert!(FreeParamRange::new(0.0, f64::INFINITY).draw(&mut rng).is_err());
    }
}
