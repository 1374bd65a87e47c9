//! chute dynamics: a ball held on a curve under gravity.

pub mod ball;
pub mod integrator;
pub mod motion;
pub mod params;

pub use ball::Ball;
pub use integrator::UpdateMode;
pub use motion::{FrictionlessMotion, Motion, DEFAULT_TIME_STEPS};
pub use params::SimParams;
