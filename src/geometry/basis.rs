//! B-spline and rational basis functions.
//!
//! Non-rational basis values come from the Cox–de Boor recursion evaluated
//! bottom-up: the order-0 indicator functions are raised one degree at a time
//! in place, so a call costs `O(knots × degree)` and allocates once.

use crate::error::{CurveError, Result};

/// Index of the last non-empty knot span inside the domain.
///
/// `u` at the right end of the domain is assigned to this span so that the
/// right-open convention of the order-0 functions does not zero out the
/// final control point.
fn last_span(degree: usize, knots: &[f64], point_count: usize) -> usize {
    (degree..point_count)
        .rev()
        .find(|&i| knots[i] < knots[i + 1])
        .unwrap_or(degree)
}

/// Evaluates every non-rational basis function `N_{i,degree}(u)`.
///
/// Returns one value per control point. Terms of the form `0/0` arising
/// from repeated knots are taken as zero. For `u` equal to the end of the
/// domain the last non-empty span is closed on the right.
///
/// The knot vector must already be validated for `degree` and
/// `point_count` (see [`super::knot::validate`]).
#[must_use]
pub fn basis_functions(degree: usize, knots: &[f64], point_count: usize, u: f64) -> Vec<f64> {
    let span_count = knots.len() - 1;
    let mut n = vec![0.0; span_count];

    if u >= knots[point_count] {
        n[last_span(degree, knots, point_count)] = 1.0;
    } else {
        for (i, value) in n.iter_mut().enumerate() {
            if knots[i] <= u && u < knots[i + 1] {
                *value = 1.0;
            }
        }
    }

    for k in 1..=degree {
        for i in 0..span_count - k {
            let left_den = knots[i + k] - knots[i];
            let left = if left_den > 0.0 {
                (u - knots[i]) / left_den * n[i]
            } else {
                0.0
            };
            let right_den = knots[i + k + 1] - knots[i + 1];
            let right = if right_den > 0.0 {
                (knots[i + k + 1] - u) / right_den * n[i + 1]
            } else {
                0.0
            };
            n[i] = left + right;
        }
    }

    n.truncate(point_count);
    n
}

/// Evaluates the rational basis `R_i(u) = w_i N_i(u) / Σ_j w_j N_j(u)`.
///
/// # Errors
///
/// Returns `CurveError::DegenerateEvaluation` if the weighted sum is zero,
/// subnormal, or not finite at `u`.
pub fn rational_basis(degree: usize, knots: &[f64], weights: &[f64], u: f64) -> Result<Vec<f64>> {
    let mut r = basis_functions(degree, knots, weights.len(), u);
    for (value, w) in r.iter_mut().zip(weights) {
        *value *= w;
    }
    let denominator: f64 = r.iter().sum();
    if !denominator.is_finite() || denominator < f64::MIN_POSITIVE {
        return Err(CurveError::DegenerateEvaluation { u }.into());
    }
    for value in &mut r {
        *value /= denominator;
    }
    Ok(r)
}
