//! Sampled height profiles for plotting collaborators.

use chute_core::error::Result;
use chute_math::{dvec2, linspace, Point2};

use crate::curve::Curve;

pub const DEFAULT_PROFILE_SAMPLES: usize = 100;

/// Sample `samples` points `(x, y(x))` evenly over `[0, w]`.
pub fn sample_profile(curve: &dyn Curve, samples: usize) -> Result<Vec<Point2>> {
    let xs = linspace(0.0, curve.boundary().w, samples);
    let ys = curve.heights(&xs)?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| dvec2(x, y)).collect())
}
