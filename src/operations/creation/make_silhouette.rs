use tracing::debug;

use crate::error::Result;
use crate::geometry::{Circle2, NurbsCurve};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;
use crate::operations::query::{Aabb2, BoundingBox};
use crate::tessellation::{Polyline, SampleParams, TessellateCurve};

use super::closed_fill;

/// A horizontal ground segment drawn under the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundLine {
    /// Left end of the segment.
    pub x_start: f64,
    /// Right end of the segment.
    pub x_end: f64,
    /// Height of the ground.
    pub y: f64,
}

impl GroundLine {
    /// Creates a new ground line.
    #[must_use]
    pub fn new(x_start: f64, x_end: f64, y: f64) -> Self {
        Self { x_start, x_end, y }
    }

    /// Returns the two end points of the segment.
    #[must_use]
    pub fn endpoints(&self) -> [Point2; 2] {
        [
            Point2::new(self.x_start, self.y),
            Point2::new(self.x_end, self.y),
        ]
    }
}

/// Everything a renderer needs to draw one car silhouette.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    /// The sampled body outline.
    pub outline: Polyline,
    /// The closed fill polygon (see [`closed_fill`]).
    pub fill: Vec<Point2>,
    /// Wheel circles.
    pub tires: Vec<Circle2>,
    /// Optional ground segment.
    pub ground: Option<GroundLine>,
}

impl Silhouette {
    /// Returns the bounding box of the whole scene.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2> {
        BoundingBox::new(self).execute()
    }

    /// Returns the area enclosed by the fill polygon.
    #[must_use]
    pub fn fill_area(&self) -> f64 {
        signed_area_2d(&self.fill).abs()
    }
}

/// Builds a [`Silhouette`] from a body curve and its wheels.
pub struct MakeSilhouette<'a> {
    curve: &'a NurbsCurve,
    tires: Vec<Circle2>,
    ground: Option<GroundLine>,
    params: SampleParams,
}

impl<'a> MakeSilhouette<'a> {
    /// Creates a new `MakeSilhouette` operation with default sampling.
    #[must_use]
    pub fn new(curve: &'a NurbsCurve, tires: Vec<Circle2>, ground: Option<GroundLine>) -> Self {
        Self {
            curve,
            tires,
            ground,
            params: SampleParams::default(),
        }
    }

    /// Sets custom sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: SampleParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the body curve cannot be sampled.
    pub fn execute(self) -> Result<Silhouette> {
        let outline = TessellateCurve::new(self.curve, self.params).execute()?;
        let fill = closed_fill(
            &outline.points,
            self.curve.first_control_point(),
            self.curve.last_control_point(),
        );
        debug!(
            outline = outline.len(),
            tires = self.tires.len(),
            "built silhouette"
        );
        Ok(Silhouette {
            outline,
            fill,
            tires: self.tires,
            ground: self.ground,
        })
    }
}
