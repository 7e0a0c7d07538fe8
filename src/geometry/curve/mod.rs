mod bspline;
mod circle;
mod nurbs;

pub use bspline::BSplineCurve;
pub use circle::Circle2;
pub use nurbs::NurbsCurve;

use crate::error::{Constraint, CurveError, Result};
use crate::math::Point2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Maps a normalized parameter `s` in `[0, 1]` into the domain.
    ///
    /// `s == 1` maps exactly onto `t_max`.
    #[must_use]
    pub fn lerp(&self, s: f64) -> f64 {
        if s >= 1.0 {
            self.t_max
        } else {
            self.t_min + (self.t_max - self.t_min) * s
        }
    }

    /// Fails with `CurveError::ParameterOutOfRange` if `t` lies outside the domain.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is below `t_min`, above `t_max`, or NaN.
    pub fn check(&self, t: f64) -> Result<()> {
        if t >= self.t_min && t <= self.t_max {
            Ok(())
        } else {
            Err(CurveError::ParameterOutOfRange {
                u: t,
                min: self.t_min,
                max: self.t_max,
            }
            .into())
        }
    }
}

/// Trait for parametric curves in the plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

/// Checks the degree against the control polygon and that every point is finite.
fn check_control_polygon(degree: usize, points: &[Point2]) -> Result<()> {
    if degree == 0 {
        return Err(Constraint::ZeroDegree.into());
    }
    if points.len() <= degree {
        return Err(Constraint::DegreeTooHigh {
            degree,
            points: points.len(),
        }
        .into());
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(Constraint::NonFinitePoint { index }.into());
    }
    Ok(())
}
