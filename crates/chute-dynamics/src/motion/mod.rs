//! Motion models: velocity and acceleration of a ball held on a curve.

mod frictionless;

use chute_core::error::Result;
use chute_curve::Curve;
use chute_math::Vector2;

use crate::ball::Ball;

pub use frictionless::FrictionlessMotion;

/// Subdivisions used for traversal-time quadrature when the caller has no preference.
pub const DEFAULT_TIME_STEPS: usize = 10_000;

/// A physical model for a ball constrained to a curve.
///
/// Implementations hold configuration only; every call is a pure function
/// of the ball state and curve passed in.
pub trait Motion: Send + Sync {
    /// Velocity the model assigns to `ball` at its current position.
    fn velocity(&self, ball: &Ball, curve: &dyn Curve) -> Result<Vector2>;

    /// Constraint-following acceleration of `ball`.
    fn acceleration(&self, ball: &Ball, curve: &dyn Curve) -> Result<Vector2>;

    /// Time to traverse the whole curve from rest, by quadrature over `steps` subintervals.
    fn total_time(&self, curve: &dyn Curve, steps: usize) -> Result<f64>;
}
