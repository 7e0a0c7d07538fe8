use tracing::debug;

use crate::error::Result;
use crate::geometry::Curve;

use super::{sample_parameters, Polyline, SampleParams};

/// Samples a curve into a polyline at a fixed parametric step.
///
/// The step is taken in normalized parameter space and mapped onto the
/// curve's domain, so the first and last vertices are exactly the curve's
/// values at the two ends of its domain. Evaluation is all-or-nothing: the
/// first failing sample aborts the whole polyline.
pub struct TessellateCurve<'a, C: Curve> {
    curve: &'a C,
    params: SampleParams,
}

impl<'a, C: Curve> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, params: SampleParams) -> Self {
        Self { curve, params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is outside `(0, 1]` or any sample fails
    /// to evaluate.
    pub fn execute(&self) -> Result<Polyline> {
        let domain = self.curve.domain();
        let points = sample_parameters(self.params)?
            .into_iter()
            .map(|s| self.curve.evaluate(domain.lerp(s)))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            delta = self.params.delta,
            samples = points.len(),
            "tessellated curve"
        );
        Ok(Polyline { points })
    }
}
