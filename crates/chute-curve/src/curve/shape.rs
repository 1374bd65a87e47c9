use std::fmt;
use std::str::FromStr;

use chute_core::error::{ChuteError, Result};
use chute_core::traits::Validate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Circular, Curve, Exponential, Linear, Parabolic};
use crate::boundary::Boundary;

/// Names of the curve variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Linear,
    Exponential,
    Parabolic,
    Circular,
}

impl CurveKind {
    pub const ALL: [CurveKind; 4] = [
        CurveKind::Linear,
        CurveKind::Exponential,
        CurveKind::Parabolic,
        CurveKind::Circular,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::Exponential => "exponential",
            CurveKind::Parabolic => "parabolic",
            CurveKind::Circular => "circular",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = ChuteError;

    fn from_str(s: &str) -> Result<Self> {
        CurveKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChuteError::InvalidParameter(format!("unknown curve kind: {}", s)))
    }
}

/// Any curve variant, tagged by `"kind"` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveShape {
    Linear(Linear),
    Exponential(Exponential),
    Parabolic(Parabolic),
    Circular(Circular),
}

impl CurveShape {
    /// Draw a curve of `kind` using that variant's default free-parameter range.
    pub fn generate<R: Rng>(kind: CurveKind, h: f64, w: f64, rng: &mut R) -> Result<Self> {
        Ok(match kind {
            CurveKind::Linear => {
                CurveShape::Linear(Linear::generate(h, w, Linear::DEFAULT_RANGE, rng)?)
            }
            CurveKind::Exponential => CurveShape::Exponential(Exponential::generate(
                h,
                w,
                Exponential::DEFAULT_RANGE,
                rng,
            )?),
            CurveKind::Parabolic => CurveShape::Parabolic(Parabolic::generate(
                h,
                w,
                Parabolic::DEFAULT_RANGE,
                rng,
            )?),
            CurveKind::Circular => {
                CurveShape::Circular(Circular::generate(h, w, Circular::DEFAULT_RANGE, rng)?)
            }
        })
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            CurveShape::Linear(_) => CurveKind::Linear,
            CurveShape::Exponential(_) => CurveKind::Exponential,
            CurveShape::Parabolic(_) => CurveKind::Parabolic,
            CurveShape::Circular(_) => CurveKind::Circular,
        }
    }

    pub fn as_curve(&self) -> &dyn Curve {
        match self {
            CurveShape::Linear(c) => c,
            CurveShape::Exponential(c) => c,
            CurveShape::Parabolic(c) => c,
            CurveShape::Circular(c) => c,
        }
    }
}

impl Curve for CurveShape {
    fn height(&self, x: f64) -> Result<f64> {
        self.as_curve().height(x)
    }

    fn slope(&self, x: f64) -> Result<f64> {
        self.as_curve().slope(x)
    }

    fn curvature(&self, x: f64) -> Result<f64> {
        self.as_curve().curvature(x)
    }

    fn boundary(&self) -> Boundary {
        self.as_curve().boundary()
    }
}

impl Validate for CurveShape {
    fn validate(&self) -> Result<()> {
        match self {
            CurveShape::Linear(c) => c.validate(),
            CurveShape::Exponential(c) => c.validate(),
            CurveShape::Parabolic(c) => c.validate(),
            CurveShape::Circular(c) => c.validate(),
        }
    }
}

impl From<Linear> for CurveShape {
    fn from(c: Linear) -> Self {
        CurveShape::Linear(c)
    }
}

impl From<Exponential> for CurveShape {
    fn from(c: Exponential) -> Self {
        CurveShape::Exponential(c)
    }
}

impl From<Parabolic> for CurveShape {
    fn from(c: Parabolic) -> Self {
        CurveShape::Parabolic(c)
    }
}

impl From<Circular> for CurveShape {
    fn from(c: Circular) -> Self {
        CurveShape::Circular(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_kind_parse_round_trip() {
        for kind in CurveKind::ALL {
            assert_eq!(kind.to_string().parse::<CurveKind>().unwrap(), kind);
        }
        assert!("spiral".parse::<CurveKind>().is_err());
    }

    #[test]
    fn test_generate_every_kind() {
        let mut rng = StdRng::seed_from_u64(2024);
        for kind in CurveKind::ALL {
            let shape = CurveShape::generate(kind, 1.0, 1.0, &mut rng).unwrap();
            assert_eq!(shape.kind(), kind);
            assert!(shape.is_valid_curve(), "{} not valid", kind);
            shape.validate().unwrap();
        }
    }

    #[test]
    fn test_shape_delegates() {
        let line = Linear::from_boundary(1.0, 1.0).unwrap();
        let shape = CurveShape::from(line.clone());
        assert_eq!(shape.height(0.25).unwrap(), line.height(0.25).unwrap());
        assert_eq!(shape.boundary(), line.boundary());
    }
}
