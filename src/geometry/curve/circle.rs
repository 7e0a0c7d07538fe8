use crate::error::{CurveError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A full circle in the plane, used for wheels.
///
/// `P(t) = center + radius * (cos(t), sin(t))` over `[0, 2*pi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2 {
    center: Point2,
    radius: f64,
}

impl Circle2 {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Degenerate` if the radius is not positive or
    /// the center is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius >= TOLERANCE) {
            return Err(CurveError::Degenerate("circle radius must be positive".into()).into());
        }
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(CurveError::Degenerate("circle center must be finite".into()).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the lower-left and upper-right corners of the enclosing square.
    #[must_use]
    pub fn extent(&self) -> (Point2, Point2) {
        let r = Vector2::new(self.radius, self.radius);
        (self.center - r, self.center + r)
    }
}

impl Curve for Circle2 {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.center + Vector2::new(t.cos(), t.sin()) * self.radius)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
