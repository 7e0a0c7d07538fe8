mod request;
mod tessellate_curve;

pub use request::{EvaluationRequest, Samples};
pub use tessellate_curve::TessellateCurve;

use crate::error::{Constraint, Result};
use crate::math::Point2;

/// Parametric step used when none is given.
pub const DEFAULT_DELTA: f64 = 0.01;

/// Upper bound on the number of samples a single curve may produce.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Parameters controlling how densely a curve is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleParams {
    /// Parametric step between consecutive samples, in `(0, 1]`.
    pub delta: f64,
}

impl SampleParams {
    /// Creates sampling parameters with the given step.
    #[must_use]
    pub fn new(delta: f64) -> Self {
        Self { delta }
    }

    /// Checks that `delta` lies in `(0, 1]` and yields at most
    /// [`MAX_SAMPLES`] samples.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveDefinition` with
    /// [`Constraint::DeltaOutOfRange`] or [`Constraint::TooManySamples`].
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        let in_range = self.delta > 0.0 && self.delta <= 1.0;
        if !in_range {
            return Err(Constraint::DeltaOutOfRange { delta: self.delta }.into());
        }
        // floor(1 / delta) + 1 samples, plus a possible clamped end sample.
        if 1.0 / self.delta + STEP_SLACK > (MAX_SAMPLES - 2) as f64 {
            return Err(Constraint::TooManySamples {
                delta: self.delta,
                max: MAX_SAMPLES,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Returns the first vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last vertex, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Slack for `1 / delta` so steps like `0.1` still reach the end of `[0, 1]`.
const STEP_SLACK: f64 = 1e-9;

/// Returns the normalized sample parameters `0, delta, 2*delta, ..., 1`.
///
/// The count is `floor(1 / delta) + 1`. When `1 / delta` is not an integer
/// a final `1.0` is appended, so the last parameter is always exactly one.
///
/// # Errors
///
/// Returns an error if `delta` is outside `(0, 1]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn sample_parameters(params: SampleParams) -> Result<Vec<f64>> {
    params.validate()?;
    let steps = (1.0 / params.delta + STEP_SLACK).floor() as usize;
    let mut ts: Vec<f64> = (0..=steps)
        .map(|k| (k as f64 * params.delta).min(1.0))
        .collect();
    match ts.last_mut() {
        Some(last) if 1.0 - *last <= STEP_SLACK => *last = 1.0,
        _ => ts.push(1.0),
    }
    Ok(ts)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CurveError, SilhouetteError};

    #[test]
    fn default_delta_gives_101_parameters() {
        let ts = sample_parameters(SampleParams::default()).unwrap();
        assert_eq!(ts.len(), 101);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[100], 1.0);
    }

    #[test]
    fn tenth_step_lands_on_one() {
        let ts = sample_parameters(SampleParams::new(0.1)).unwrap();
        assert_eq!(ts.len(), 11);
        assert_eq!(*ts.last().unwrap(), 1.0);
    }

    #[test]
    fn uneven_step_appends_clamped_end() {
        let ts = sample_parameters(SampleParams::new(0.3)).unwrap();
        assert_eq!(ts.len(), 5);
        assert!((ts[3] - 0.9).abs() < 1e-12);
        assert_eq!(ts[4], 1.0);
    }

    #[test]
    fn parameters_are_strictly_increasing() {
        let ts = sample_parameters(SampleParams::new(0.07)).unwrap();
        assert!(ts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn whole_domain_step() {
        let ts = sample_parameters(SampleParams::new(1.0)).unwrap();
        assert_eq!(ts, vec![0.0, 1.0]);
    }

    #[test]
    fn invalid_delta_is_rejected() {
        for delta in [0.0, -0.1, 1.5, f64::NAN] {
            assert!(sample_parameters(SampleParams::new(delta)).is_err());
        }
    }

    #[test]
    fn tiny_delta_is_rejected_before_allocating() {
        for delta in [f64::MIN_POSITIVE, 1e-300, 1e-9] {
            let err = sample_parameters(SampleParams::new(delta)).unwrap_err();
            assert!(matches!(
                err,
                SilhouetteError::Curve(CurveError::InvalidCurveDefinition(
                    Constraint::TooManySamples { max: MAX_SAMPLES, .. }
                ))
            ));
        }
    }

    #[test]
    fn finest_allowed_delta_stays_under_the_cap() {
        let ts = sample_parameters(SampleParams::new(1e-6)).unwrap();
        assert!(ts.len() <= MAX_SAMPLES);
        assert_eq!(*ts.last().unwrap(), 1.0);
    }

    #[test]
    fn polyline_accessors() {
        let mut line = Polyline::default();
        assert!(line.is_empty());
        assert!(line.first().is_none());
        line.points.push(Point2::new(1.0, 2.0));
        line.points.push(Point2::new(3.0, 4.0));
        assert_eq!(line.len(), 2);
        assert_eq!(line.last(), Some(&Point2::new(3.0, 4.0)));
    }
}
