//! chute curves: closed-form descent profiles pinned to `y(0) = h`, `y(w) = 0`.

pub mod boundary;
pub mod curve;
pub mod generate;
pub mod profile;

pub use boundary::Boundary;
pub use curve::{Circular, Curve, CurveKind, CurveShape, Exponential, Linear, Parabolic};
pub use generate::FreeParamRange;
pub use profile::{sample_profile, DEFAULT_PROFILE_SAMPLES};
