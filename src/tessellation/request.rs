use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{knot, NurbsCurve};
use crate::math::{pair_from_point, point_from_pair};

use super::{SampleParams, TessellateCurve, DEFAULT_DELTA};

fn default_delta() -> f64 {
    DEFAULT_DELTA
}

/// A self-contained curve evaluation request in plain arrays.
///
/// Mirrors the array-of-pairs shape that callers decode from JSON:
///
/// ```json
/// { "degree": 3, "controlPoints": [[0, 0], [1, 2], [2, 0], [4, 4]],
///   "weights": [1, 1, 1, 1], "delta": 0.01 }
/// ```
///
/// `knotVector` is optional; when absent a clamped uniform vector is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub degree: usize,
    pub control_points: Vec<[f64; 2]>,
    pub weights: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knot_vector: Option<Vec<f64>>,
    #[serde(default = "default_delta")]
    pub delta: f64,
}

/// The sampled polyline produced by an [`EvaluationRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    pub samples: Vec<[f64; 2]>,
}

impl EvaluationRequest {
    /// Builds the validated curve this request describes.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidParameter` when generating knots for too
    /// few points, or `CurveError::InvalidCurveDefinition` for any other
    /// invalid input.
    pub fn curve(&self) -> Result<NurbsCurve> {
        let points = self
            .control_points
            .iter()
            .copied()
            .map(point_from_pair)
            .collect();
        let knots = match &self.knot_vector {
            Some(knots) => knots.clone(),
            None => knot::clamped_uniform(self.degree, self.control_points.len())?,
        };
        NurbsCurve::new(self.degree, points, self.weights.clone(), knots)
    }

    /// Evaluates the request into samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve definition or `delta` is invalid, or if
    /// evaluation degenerates.
    pub fn evaluate(&self) -> Result<Samples> {
        let params = SampleParams::new(self.delta);
        params.validate()?;
        let curve = self.curve()?;
        let polyline = TessellateCurve::new(&curve, params).execute()?;
        Ok(Samples {
            samples: polyline.points.iter().map(pair_from_point).collect(),
        })
    }
}
