use crate::error::{Constraint, CurveError, Result};

/// Generates a clamped (open) uniform knot vector.
///
/// The result has `point_count + degree + 1` entries: `degree + 1` zeros,
/// `point_count - degree - 1` evenly spaced interior knots strictly inside
/// `(0, 1)`, then `degree + 1` ones. Clamping makes the curve interpolate its
/// first and last control points.
///
/// # Errors
///
/// Returns `CurveError::InvalidParameter` if `point_count <= degree` or
/// `degree == 0`.
#[allow(clippy::cast_precision_loss)]
pub fn clamped_uniform(degree: usize, point_count: usize) -> Result<Vec<f64>> {
    if degree == 0 || point_count <= degree {
        return Err(CurveError::InvalidParameter {
            degree,
            point_count,
        }
        .into());
    }

    let spans = (point_count - degree) as f64;
    let mut knots = Vec::with_capacity(point_count + degree + 1);
    knots.extend(std::iter::repeat_n(0.0, degree + 1));
    knots.extend((1..point_count - degree).map(|i| i as f64 / spans));
    knots.extend(std::iter::repeat_n(1.0, degree + 1));
    Ok(knots)
}

/// Returns the valid parameter domain `[knots[degree], knots[point_count]]`.
///
/// Callers must pass a knot vector of length `point_count + degree + 1`.
#[must_use]
pub(crate) fn domain(degree: usize, knots: &[f64], point_count: usize) -> (f64, f64) {
    (knots[degree], knots[point_count])
}

/// Checks that a knot vector fits `degree` and `point_count`.
///
/// # Errors
///
/// Returns the violated [`Constraint`]: wrong length, a decreasing or
/// non-finite knot, or an empty parameter domain.
pub fn validate(degree: usize, knots: &[f64], point_count: usize) -> Result<()> {
    let expected = point_count + degree + 1;
    if knots.len() != expected {
        return Err(Constraint::KnotCount {
            expected,
            actual: knots.len(),
        }
        .into());
    }
    if let Some(index) = knots.iter().position(|k| !k.is_finite()) {
        return Err(Constraint::DecreasingKnot { index }.into());
    }
    if let Some(index) = knots.windows(2).position(|w| w[1] < w[0]) {
        return Err(Constraint::DecreasingKnot { index: index + 1 }.into());
    }
    let (start, end) = domain(degree, knots, point_count);
    if end <= start {
        return Err(Constraint::EmptyDomain { start, end }.into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SilhouetteError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bezier_case_has_no_interior_knots() {
        let knots = clamped_uniform(3, 4).unwrap();
        assert_eq!(knots, vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn interior_knots_are_evenly_spaced() {
        let knots = clamped_uniform(3, 7).unwrap();
        assert_eq!(knots.len(), 11);
        let interior = &knots[4..7];
        assert_abs_diff_eq!(interior[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(interior[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interior[2], 0.75, epsilon = 1e-12);
        assert!(knots[..4].iter().all(|&k| k == 0.0));
        assert!(knots[7..].iter().all(|&k| k == 1.0));
    }

    #[test]
    fn interior_knots_lie_strictly_inside() {
        let knots = clamped_uniform(2, 12).unwrap();
        for &k in &knots[3..12] {
            assert!(k > 0.0 && k < 1.0);
        }
        validate(2, &knots, 12).unwrap();
    }

    #[test]
    fn too_few_points_is_invalid_parameter() {
        let err = clamped_uniform(3, 3).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::Curve(CurveError::InvalidParameter {
                degree: 3,
                point_count: 3
            })
        ));
    }

    #[test]
    fn zero_degree_is_invalid_parameter() {
        assert!(clamped_uniform(0, 4).is_err());
    }

    #[test]
    fn domain_of_clamped_vector_is_unit_interval() {
        let knots = clamped_uniform(3, 11).unwrap();
        assert_eq!(domain(3, &knots, 11), (0.0, 1.0));
    }

    #[test]
    fn validate_rejects_wrong_length() {
        let err = validate(3, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0], 4).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::Curve(CurveError::InvalidCurveDefinition(Constraint::KnotCount {
                expected: 8,
                actual: 6
            }))
        ));
    }

    #[test]
    fn validate_rejects_decreasing_knot() {
        let knots = [0.0, 0.0, 0.0, 0.0, 0.6, 0.4, 1.0, 1.0, 1.0, 1.0];
        let err = validate(3, &knots, 6).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::Curve(CurveError::InvalidCurveDefinition(
                Constraint::DecreasingKnot { index: 5 }
            ))
        ));
    }

    #[test]
    fn validate_rejects_empty_domain() {
        let knots = [0.0; 8];
        let err = validate(3, &knots, 4).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::Curve(CurveError::InvalidCurveDefinition(
                Constraint::EmptyDomain { .. }
            ))
        ));
    }
}
