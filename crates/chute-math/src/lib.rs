pub mod quadrature;
pub mod sampling;

pub use glam::{dvec2, DVec2};
pub use quadrature::right_riemann;
pub use sampling::{linspace, right_nodes};

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
