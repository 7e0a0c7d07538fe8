use crate::error::Result;
use crate::geometry::{basis, knot};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{check_control_polygon, Curve, CurveDomain};

/// A planar non-rational B-spline curve: `C(u) = Σ N_i(u) P_i`.
///
/// Equivalent to a [`super::NurbsCurve`] whose weights are all equal.
#[derive(Debug, Clone, PartialEq)]
pub struct BSplineCurve {
    degree: usize,
    control_points: Vec<Point2>,
    knots: Vec<f64>,
}

impl BSplineCurve {
    /// Creates a B-spline curve from an explicit knot vector.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveDefinition` if the degree, control
    /// points, or knot vector are inconsistent.
    pub fn new(degree: usize, control_points: Vec<Point2>, knots: Vec<f64>) -> Result<Self> {
        check_control_polygon(degree, &control_points)?;
        knot::validate(degree, &knots, control_points.len())?;
        Ok(Self {
            degree,
            control_points,
            knots,
        })
    }

    /// Creates a B-spline curve over a clamped uniform knot vector.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidParameter` if there are not more control
    /// points than `degree`.
    pub fn clamped(degree: usize, control_points: Vec<Point2>) -> Result<Self> {
        let knots = knot::clamped_uniform(degree, control_points.len())?;
        Self::new(degree, control_points, knots)
    }

    /// Returns the knot vector.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }
}

impl Curve for BSplineCurve {
    fn evaluate(&self, u: f64) -> Result<Point2> {
        self.domain().check(u)?;
        let n = basis::basis_functions(self.degree, &self.knots, self.control_points.len(), u);
        let sum = n
            .iter()
            .zip(&self.control_points)
            .fold(Vector2::zeros(), |acc, (ni, p)| acc + p.coords * *ni);
        Ok(Point2::from(sum))
    }

    fn domain(&self) -> CurveDomain {
        let (t_min, t_max) = knot::domain(self.degree, &self.knots, self.control_points.len());
        CurveDomain::new(t_min, t_max)
    }

    fn is_closed(&self) -> bool {
        let first = self.control_points[0];
        let last = self.control_points[self.control_points.len() - 1];
        (first - last).norm() < TOLERANCE
    }
}
