use crate::error::{Constraint, Result};
use crate::geometry::{basis, knot};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{check_control_polygon, Curve, CurveDomain};

/// A planar NURBS (Non-Uniform Rational B-Spline) curve.
///
/// `C(u) = Σ R_i(u) P_i` with `R_i(u) = w_i N_i(u) / Σ_j w_j N_j(u)`, where
/// `N_i` are the degree-`p` B-spline basis functions over the knot vector.
///
/// A `NurbsCurve` is an immutable, validated snapshot of its inputs: every
/// constructor checks the definition once so evaluation never revisits it.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve {
    degree: usize,
    control_points: Vec<Point2>,
    weights: Vec<f64>,
    knots: Vec<f64>,
}

impl NurbsCurve {
    /// Creates a NURBS curve from an explicit knot vector.
    ///
    /// # Arguments
    ///
    /// * `degree` - Polynomial degree (at least 1, below the point count)
    /// * `control_points` - Ordered control polygon
    /// * `weights` - One strictly positive weight per control point
    /// * `knots` - Non-decreasing knot vector of length `n + degree + 1`
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveDefinition` naming the violated
    /// [`Constraint`].
    pub fn new(
        degree: usize,
        control_points: Vec<Point2>,
        weights: Vec<f64>,
        knots: Vec<f64>,
    ) -> Result<Self> {
        check_control_polygon(degree, &control_points)?;
        if weights.len() != control_points.len() {
            return Err(Constraint::WeightCount {
                points: control_points.len(),
                weights: weights.len(),
            }
            .into());
        }
        knot::validate(degree, &knots, control_points.len())?;
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(Constraint::NonPositiveWeight { index, value }.into());
        }

        Ok(Self {
            degree,
            control_points,
            weights,
            knots,
        })
    }

    /// Creates a NURBS curve over a clamped uniform knot vector.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidParameter` if there are not more control
    /// points than `degree`, or `CurveError::InvalidCurveDefinition` for any
    /// other invalid input.
    pub fn clamped(degree: usize, control_points: Vec<Point2>, weights: Vec<f64>) -> Result<Self> {
        let knots = knot::clamped_uniform(degree, control_points.len())?;
        Self::new(degree, control_points, weights, knots)
    }

    /// Returns the polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    /// Returns the control point weights.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the knot vector.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the first control point.
    #[must_use]
    pub fn first_control_point(&self) -> Point2 {
        self.control_points[0]
    }

    /// Returns the last control point.
    #[must_use]
    pub fn last_control_point(&self) -> Point2 {
        self.control_points[self.control_points.len() - 1]
    }

    /// Evaluates every rational basis function `R_i(u)`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ParameterOutOfRange` outside the domain, or
    /// `CurveError::DegenerateEvaluation` if the weighted sum vanishes.
    pub fn rational_basis(&self, u: f64) -> Result<Vec<f64>> {
        self.domain().check(u)?;
        basis::rational_basis(self.degree, &self.knots, &self.weights, u)
    }
}

impl Curve for NurbsCurve {
    fn evaluate(&self, u: f64) -> Result<Point2> {
        let r = self.rational_basis(u)?;
        let sum = r
            .iter()
            .zip(&self.control_points)
            .fold(Vector2::zeros(), |acc, (ri, p)| acc + p.coords * *ri);
        Ok(Point2::from(sum))
    }

    fn domain(&self) -> CurveDomain {
        let (t_min, t_max) = knot::domain(self.degree, &self.knots, self.control_points.len());
        CurveDomain::new(t_min, t_max)
    }

    fn is_closed(&self) -> bool {
        (self.first_control_point() - self.last_control_point()).norm() < TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CurveError, SilhouetteError};
    use approx::assert_abs_diff_eq;

    fn intro_points() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(4.0, 4.0),
        ]
    }

    fn constraint_of(err: SilhouetteError) -> Constraint {
        match err {
            SilhouetteError::Curve(CurveError::InvalidCurveDefinition(c)) => c,
            other => panic!("expected an invalid curve definition, got {other:?}"),
        }
    }

    #[test]
    fn interpolates_end_points() {
        let curve = NurbsCurve::clamped(3, intro_points(), vec![3.0, 4.0, 2.0, 5.0]).unwrap();
        let start = curve.evaluate(0.0).unwrap();
        let end = curve.evaluate(1.0).unwrap();
        assert!((start - Point2::new(0.0, 0.0)).norm() < 1e-12);
        assert!((end - Point2::new(4.0, 4.0)).norm() < 1e-12);
    }

    #[test]
    fn cubic_bezier_midpoint_with_unit_weights() {
        let curve = NurbsCurve::clamped(3, intro_points(), vec![1.0; 4]).unwrap();
        let mid = curve.evaluate(0.5).unwrap();
        // (P0 + 3 P1 + 3 P2 + P3) / 8
        assert_abs_diff_eq!(mid.x, (0.0 + 3.0 + 6.0 + 4.0) / 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, (0.0 + 6.0 + 0.0 + 4.0) / 8.0, epsilon = 1e-12);
    }

    #[test]
    fn quadratic_rational_arc_lies_on_unit_circle() {
        let w = std::f64::consts::FRAC_1_SQRT_2;
        let curve = NurbsCurve::clamped(
            2,
            vec![
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            vec![1.0, w, 1.0],
        )
        .unwrap();
        for step in 0..=20 {
            let p = curve.evaluate(f64::from(step) / 20.0).unwrap();
            assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn explicit_knots_are_kept() {
        let knots = vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        let curve = NurbsCurve::new(3, intro_points(), vec![1.0; 4], knots.clone()).unwrap();
        assert_eq!(curve.knots(), knots.as_slice());
        assert_eq!(curve.degree(), 3);
        assert_eq!(curve.weights().len(), 4);
        assert_eq!(curve.control_points().len(), 4);
    }

    #[test]
    fn non_unit_domain_is_respected() {
        let knots = vec![2.0, 2.0, 2.0, 2.0, 6.0, 6.0, 6.0, 6.0];
        let curve = NurbsCurve::new(3, intro_points(), vec![1.0; 4], knots).unwrap();
        assert_eq!(curve.domain(), CurveDomain::new(2.0, 6.0));
        let end = curve.evaluate(6.0).unwrap();
        assert!((end - Point2::new(4.0, 4.0)).norm() < 1e-12);
        assert!(curve.evaluate(1.0).is_err());
    }

    #[test]
    fn out_of_domain_parameter_is_rejected() {
        let curve = NurbsCurve::clamped(3, intro_points(), vec![1.0; 4]).unwrap();
        let err = curve.evaluate(1.5).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::Curve(CurveError::ParameterOutOfRange { .. })
        ));
        assert!(curve.evaluate(f64::NAN).is_err());
    }

    #[test]
    fn zero_weight_is_rejected() {
        let err = NurbsCurve::clamped(3, intro_points(), vec![1.0, 1.0, 0.0, 1.0]).unwrap_err();
        assert_eq!(
            constraint_of(err),
            Constraint::NonPositiveWeight {
                index: 2,
                value: 0.0
            }
        );
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        assert!(NurbsCurve::clamped(3, intro_points(), vec![1.0, -2.0, 1.0, 1.0]).is_err());
        assert!(NurbsCurve::clamped(3, intro_points(), vec![1.0, f64::NAN, 1.0, 1.0]).is_err());
    }

    #[test]
    fn weight_count_mismatch_is_rejected() {
        let err = NurbsCurve::clamped(3, intro_points(), vec![1.0; 3]).unwrap_err();
        assert_eq!(
            constraint_of(err),
            Constraint::WeightCount {
                points: 4,
                weights: 3
            }
        );
    }

    #[test]
    fn wrong_knot_count_is_rejected() {
        let err = NurbsCurve::new(3, intro_points(), vec![1.0; 4], vec![0.0, 0.0, 1.0, 1.0])
            .unwrap_err();
        assert_eq!(
            constraint_of(err),
            Constraint::KnotCount {
                expected: 8,
                actual: 4
            }
        );
    }

    #[test]
    fn non_finite_point_is_rejected() {
        let mut points = intro_points();
        points[1] = Point2::new(f64::INFINITY, 0.0);
        let err = NurbsCurve::clamped(3, points, vec![1.0; 4]).unwrap_err();
        assert_eq!(constraint_of(err), Constraint::NonFinitePoint { index: 1 });
    }

    #[test]
    fn degree_too_high_for_explicit_knots() {
        let err = NurbsCurve::new(
            3,
            intro_points()[..3].to_vec(),
            vec![1.0; 3],
            vec![0.0; 7],
        )
        .unwrap_err();
        assert_eq!(
            constraint_of(err),
            Constraint::DegreeTooHigh {
                degree: 3,
                points: 3
            }
        );
    }

    #[test]
    fn closed_when_end_points_coincide() {
        let mut points = intro_points();
        points[3] = points[0];
        let curve = NurbsCurve::clamped(3, points, vec![1.0; 4]).unwrap();
        assert!(curve.is_closed());
        let open = NurbsCurve::clamped(3, intro_points(), vec![1.0; 4]).unwrap();
        assert!(!open.is_closed());
    }
}
