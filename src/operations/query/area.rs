use crate::error::Result;
use crate::geometry::NurbsCurve;
use crate::math::polygon_2d::signed_area_2d;
use crate::operations::creation::closed_fill;
use crate::tessellation::{SampleParams, TessellateCurve};

/// Computes the area enclosed by a body curve's fill polygon.
///
/// The curve is sampled and closed through its end control points, then the
/// absolute shoelace area is taken. The accuracy depends on the sample step.
pub struct FillArea<'a> {
    curve: &'a NurbsCurve,
    params: SampleParams,
}

impl<'a> FillArea<'a> {
    /// Creates a new `FillArea` query with default sampling.
    #[must_use]
    pub fn new(curve: &'a NurbsCurve) -> Self {
        Self {
            curve,
            params: SampleParams::default(),
        }
    }

    /// Sets custom sampling parameters for higher accuracy.
    #[must_use]
    pub fn with_params(mut self, params: SampleParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the enclosed area.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be sampled.
    pub fn execute(&self) -> Result<f64> {
        let outline = TessellateCurve::new(self.curve, self.params).execute()?;
        let ring = closed_fill(
            &outline.points,
            self.curve.first_control_point(),
            self.curve.last_control_point(),
        );
        Ok(signed_area_2d(&ring).abs())
    }
}
