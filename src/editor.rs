//! Slider-driven editing of a car body.
//!
//! The editor owns the mutable control points and weights. Every refresh
//! takes an immutable [`NurbsCurve`] snapshot of that state and evaluates it
//! synchronously; a failed refresh leaves the last good [`Frame`] in place.

use tracing::{debug, warn};

use crate::catalog::{CarModel, BODY_DEGREE};
use crate::error::{EditorError, Result};
use crate::geometry::{Circle2, NurbsCurve};
use crate::math::Point2;
use crate::operations::creation::{GroundLine, MakeSilhouette, Silhouette};
use crate::tessellation::SampleParams;

/// Ranges that edited values are clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRanges {
    /// How far a control point may move from its preset position, per axis.
    pub point_offset: f64,
    /// Smallest allowed weight.
    pub weight_min: f64,
    /// Largest allowed weight.
    pub weight_max: f64,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            point_offset: 1.0,
            weight_min: 0.1,
            weight_max: 150.0,
        }
    }
}

/// Clamps without panicking on inverted bounds; NaN collapses to `lo`.
fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// The result of one successful refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The curve snapshot the frame was evaluated from.
    pub curve: NurbsCurve,
    /// The evaluated scene.
    pub silhouette: Silhouette,
}

/// Mutable editing state for one car body.
#[derive(Debug, Clone)]
pub struct ShapeEditor {
    model_name: String,
    initial_points: Vec<Point2>,
    initial_weights: Vec<f64>,
    points: Vec<Point2>,
    weights: Vec<f64>,
    tires: Vec<Circle2>,
    ground: Option<GroundLine>,
    ranges: SliderRanges,
    params: SampleParams,
    frame: Option<Frame>,
}

impl ShapeEditor {
    /// Starts editing from a preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset's tires are invalid.
    pub fn new(model: &CarModel, ranges: SliderRanges, params: SampleParams) -> Result<Self> {
        let points = model.points();
        let weights = model.normalized_weights();
        Ok(Self {
            model_name: model.name.clone(),
            initial_points: points.clone(),
            initial_weights: weights.clone(),
            points,
            weights,
            tires: model.tires()?,
            ground: model.ground(),
            ranges,
            params,
            frame: None,
        })
    }

    /// Returns the name of the preset being edited.
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the current control points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the current weights.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(EditorError::IndexOutOfRange {
                index,
                len: self.points.len(),
            }
            .into())
        }
    }

    /// Moves control point `index`, clamped to the slider range around its
    /// preset position. Returns the stored position.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::IndexOutOfRange` for a bad index.
    pub fn set_point(&mut self, index: usize, x: f64, y: f64) -> Result<Point2> {
        self.check_index(index)?;
        let origin = self.initial_points[index];
        let d = self.ranges.point_offset;
        let p = Point2::new(
            clamp(x, origin.x - d, origin.x + d),
            clamp(y, origin.y - d, origin.y + d),
        );
        self.points[index] = p;
        Ok(p)
    }

    /// Sets weight `index`, clamped to the slider range. Returns the stored
    /// weight.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::IndexOutOfRange` for a bad index.
    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<f64> {
        self.check_index(index)?;
        let w = clamp(weight, self.ranges.weight_min, self.ranges.weight_max);
        self.weights[index] = w;
        Ok(w)
    }

    /// Restores the preset points and weights.
    pub fn reset(&mut self) {
        self.points.clone_from(&self.initial_points);
        self.weights.clone_from(&self.initial_weights);
    }

    /// Takes an immutable curve snapshot of the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the current state is not a valid curve.
    pub fn snapshot(&self) -> Result<NurbsCurve> {
        NurbsCurve::clamped(BODY_DEGREE, self.points.clone(), self.weights.clone())
    }

    /// Re-evaluates the current state.
    ///
    /// On success the new frame replaces the previous one. On failure the
    /// previous frame is kept and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot is invalid or fails to evaluate.
    pub fn refresh(&mut self) -> Result<&Frame> {
        let built = self.snapshot().and_then(|curve| {
            let silhouette = MakeSilhouette::new(&curve, self.tires.clone(), self.ground)
                .with_params(self.params)
                .execute()?;
            Ok(Frame { curve, silhouette })
        });
        match built {
            Ok(frame) => {
                debug!(model = %self.model_name, "refreshed silhouette");
                let frame: &Frame = self.frame.insert(frame);
                Ok(frame)
            }
            Err(err) => {
                warn!(model = %self.model_name, error = %err, "keeping previous silhouette");
                Err(err)
            }
        }
    }

    /// Returns the last successfully evaluated frame.
    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Formats the weights the way the weight read-out shows them.
    #[must_use]
    pub fn weight_label(&self) -> String {
        let values: Vec<String> = self.weights.iter().map(|w| format!("{w:.1}")).collect();
        format!("Weights: {}", values.join(", "))
    }
}
