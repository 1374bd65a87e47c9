use chute_core::error::Result;
use chute_curve::Curve;
use chute_math::{dvec2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::integrator::{self, UpdateMode};
use crate::motion::Motion;

/// Position and velocity of the sliding point mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Point2,
    pub velocity: Vector2,
}

impl Ball {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            position: dvec2(x, y),
            velocity: dvec2(vx, vy),
        }
    }

    pub fn at_rest(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// A ball at rest on `curve` at horizontal position `x`.
    pub fn on_curve(curve: &dyn Curve, x: f64) -> Result<Self> {
        Ok(Self::at_rest(x, curve.height(x)?))
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// The state after one step; `self` is left untouched.
    pub fn step(
        &self,
        curve: &dyn Curve,
        motion: &dyn Motion,
        dt: f64,
        mode: UpdateMode,
    ) -> Result<Ball> {
        integrator::step(*self, curve, motion, dt, mode)
    }

    /// Advance in place. On error the ball keeps its previous state.
    pub fn update(
        &mut self,
        curve: &dyn Curve,
        motion: &dyn Motion,
        dt: f64,
        mode: UpdateMode,
    ) -> Result<()> {
        *self = self.step(curve, motion, dt, mode)?;
        Ok(())
    }

    /// Like [`Ball::update`], with the mode given by name (`"acc"` or `"vel"`).
    pub fn update_named(
        &mut self,
        curve: &dyn Curve,
        motion: &dyn Motion,
        dt: f64,
        mode: &str,
    ) -> Result<()> {
        let mode: UpdateMode = mode.parse()?;
        self.update(curve, motion, dt, mode)
    }

    /// Whether the ball has started rolling back towards the start.
    pub fn is_rolling_back(&self) -> bool {
        self.velocity.x < 0.0
    }

    pub fn reached_goal(&self, goal_x: f64) -> bool {
        self.position.x >= goal_x
    }
}
