use chute_core::error::{ChuteError, Result};
use chute_core::traits::Validate;
use chute_core::Tolerance;
use chute_curve::{Boundary, Curve};
use chute_math::{dvec2, right_nodes, right_riemann, Vector2};

use super::Motion;
use crate::ball::Ball;
use crate::params::SimParams;

/// Frictionless sliding with conservation of mechanical energy.
///
/// The ball never detaches from the curve and has no rotational inertia,
/// so its speed at height `y` is `sqrt(2g(h - y))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionlessMotion {
    gravity: f64,
    tolerance: Tolerance,
}

impl FrictionlessMotion {
    pub fn new(gravity: f64) -> Result<Self> {
        Self::from_params(&SimParams::new(gravity))
    }

    pub fn from_params(params: &SimParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            gravity: params.gravity,
            tolerance: params.tolerance,
        })
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Height lost since the start, `h - y`.
    fn energy_drop(&self, h: f64, y: f64) -> Result<f64> {
        self.tolerance.energy_drop(h - y).ok_or_else(|| {
            ChuteError::Numeric(format!(
                "ball at y = {} is above its start height h = {}",
                y, h
            ))
        })
    }
}

impl Motion for FrictionlessMotion {
    fn velocity(&self, ball: &Ball, curve: &dyn Curve) -> Result<Vector2> {
        let drop = self.energy_drop(curve.boundary().h, ball.position.y)?;
        let speed = (2.0 * self.gravity * drop).sqrt();

        let m = curve.slope(ball.position.x)?;
        let deno = (1.0 + m * m).sqrt();
        Ok(dvec2(speed / deno, speed * m / deno))
    }

    fn acceleration(&self, ball: &Ball, curve: &dyn Curve) -> Result<Vector2> {
        let x = ball.position.x;
        let vx = ball.velocity.x;
        let g = self.gravity;

        let m = curve.slope(x)?;
        let curv_term = curve.curvature(x)? * vx * vx;
        let deno = 1.0 + m * m;

        Ok(dvec2(
            -(curv_term + g) * m / deno,
            (curv_term - g * m * m) / deno,
        ))
    }

    fn total_time(&self, curve: &dyn Curve, steps: usize) -> Result<f64> {
        let Boundary { h, w } = curve.boundary();
        // the integrand is singular at x = 0, so nodes start at dx
        let (xs, dx) = right_nodes(0.0, w, steps)?;
        let ys = curve.heights(&xs)?;
        let ms = curve.slopes(&xs)?;

        let integrand = xs
            .iter()
            .zip(ys.iter().zip(&ms))
            .map(|(&x, (&y, &m))| {
                let drop = h - y;
                if drop <= 0.0 {
                    return Err(ChuteError::Numeric(format!(
                        "curve at x = {} reaches y = {}, not below start height h = {}",
                        x, y, h
                    )));
                }
                Ok(((1.0 + m * m) / (2.0 * self.gravity * drop)).sqrt())
            })
            .collect::<Result<Vec<f64>>>()?;

        let time = right_riemann(&integrand, dx);
        tracing::debug!(steps, time, "integrated traversal time");
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chute_curve::{Circular, Linear, Parabolic};

    fn line() -> Linear {
        Linear::from_boundary(1.0, 1.0).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        assert!(matches!(
            FrictionlessMotion::new(0.0),
            Err(ChuteError::InvalidParameter(_))
        ));
        assert!(FrictionlessMotion::new(f64::NAN).is_err());
    }

    #[test]
    fn test_velocity_along_tangent() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        let ball = Ball::new(0.5, 0.5, 0.0, 0.0);
        let v = motion.velocity(&ball, &line()).unwrap();
        let speed = (2.0 * 9.8 * 0.5f64).sqrt();
        assert!((v.length() - speed).abs() < 1e-12);
        assert!((v.x - speed / 2f64.sqrt()).abs() < 1e-12);
        assert!((v.x + v.y).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_zero_at_start() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        let v = motion.velocity(&Ball::at_rest(0.0, 1.0), &line()).unwrap();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y.abs(), 0.0);
    }

    #[test]
    fn test_velocity_above_start_is_numeric_error() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        let ball = Ball::at_rest(0.0, 1.5);
        assert!(matches!(
            motion.velocity(&ball, &line()),
            Err(ChuteError::Numeric(_))
        ));
    }

    #[test]
    fn test_acceleration_on_line_is_tangential_gravity() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        let ball = Ball::new(0.3, 0.7, 1.0, -1.0);
        let a = motion.acceleration(&ball, &line()).unwrap();
        assert!((a.x - 4.9).abs() < 1e-12);
        assert!((a.y + 4.9).abs() < 1e-12);
    }

    #[test]
    fn test_acceleration_centripetal_at_arc_bottom() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        let arc = Circular::from_a(1.0, 1.0, 2.0).unwrap();
        let y = arc.height(arc.x0).unwrap();
        let ball = Ball::new(arc.x0, y, 2.0, 0.0);
        let a = motion.acceleration(&ball, &arc).unwrap();
        assert!(a.x.abs() < 1e-12);
        assert!((a.y - 4.0 / arc.radius()).abs() < 1e-9);
    }

    #[test]
    fn test_total_time_linear_converges() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        let coarse = motion.total_time(&line(), 5_000).unwrap();
        let fine = motion.total_time(&line(), 10_000).unwrap();
        assert!(((coarse - fine) / fine).abs() < 0.01, "coarse={} fine={}", coarse, fine);

        // closed form for the incline: sqrt(2L / (g sin θ)) = sqrt(4 / g)
        let exact = (4.0 / 9.8f64).sqrt();
        assert!(((fine - exact) / exact).abs() < 0.015, "fine={} exact={}", fine, exact);
    }

    #[test]
    fn test_total_time_rejects_zero_steps() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        assert!(matches!(
            motion.total_time(&line(), 0),
            Err(ChuteError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_total_time_rising_curve_is_numeric_error() {
        let motion = FrictionlessMotion::new(9.8).unwrap();
        // a = -3 lifts the parabola above h right after the start
        let hump = Parabolic::from_a(-3.0, 1.0, 1.0).unwrap();
        assert!(matches!(
            motion.total_time(&hump, 1_000),
            Err(ChuteError::Numeric(_))
        ));
    }
}
