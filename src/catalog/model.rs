use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Circle2, NurbsCurve};
use crate::math::{point_from_pair, Point2};
use crate::operations::creation::{GroundLine, MakeSilhouette, Silhouette};
use crate::tessellation::SampleParams;

/// Degree of every car body curve.
pub const BODY_DEGREE: usize = 3;

/// Wheel radius used when a model does not give one.
pub const DEFAULT_TIRE_RADIUS: f64 = 0.9;

fn default_tire_radius() -> f64 {
    DEFAULT_TIRE_RADIUS
}

/// A car body preset: the initial shape a respondent starts editing from.
///
/// Field names follow the JSON layout of the preset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarModel {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(rename = "ctrlpts")]
    pub control_points: Vec<[f64; 2]>,
    #[serde(default)]
    pub weights: Vec<f64>,
    #[serde(rename = "tire_coords", default)]
    pub tire_centers: Vec<[f64; 2]>,
    #[serde(default = "default_tire_radius")]
    pub tire_radius: f64,
    /// `[x_start, x_end, y]`.
    #[serde(default)]
    pub ground_line: Option<[f64; 3]>,
    #[serde(rename = "bg_image", default)]
    pub background_image: Option<String>,
}

impl CarModel {
    /// Returns `true` if `query` names this model or one of its aliases,
    /// ignoring case and surrounding whitespace.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        std::iter::once(&self.name)
            .chain(&self.aliases)
            .any(|name| name.eq_ignore_ascii_case(query))
    }

    /// Returns the control points as points.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.control_points.iter().copied().map(point_from_pair).collect()
    }

    /// Returns one weight per control point.
    ///
    /// Missing weights repeat the last given weight (or `1.0` if none were
    /// given); surplus weights are dropped.
    #[must_use]
    pub fn normalized_weights(&self) -> Vec<f64> {
        let n = self.control_points.len();
        let fill = self.weights.last().copied().unwrap_or(1.0);
        let mut weights: Vec<f64> = self.weights.iter().copied().take(n).collect();
        weights.resize(n, fill);
        weights
    }

    /// Builds the body curve at the given degree over clamped uniform knots.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset does not form a valid curve.
    pub fn curve(&self, degree: usize) -> Result<NurbsCurve> {
        NurbsCurve::clamped(degree, self.points(), self.normalized_weights())
    }

    /// Builds the wheel circles.
    ///
    /// # Errors
    ///
    /// Returns an error if the tire radius is not positive.
    pub fn tires(&self) -> Result<Vec<Circle2>> {
        self.tire_centers
            .iter()
            .map(|&c| Circle2::new(point_from_pair(c), self.tire_radius))
            .collect()
    }

    /// Returns the ground segment, if the preset has one.
    #[must_use]
    pub fn ground(&self) -> Option<GroundLine> {
        self.ground_line
            .map(|[x_start, x_end, y]| GroundLine::new(x_start, x_end, y))
    }

    /// Builds the full silhouette of the unedited preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset does not form a valid curve or the
    /// sampling step is invalid.
    pub fn silhouette(&self, params: SampleParams) -> Result<Silhouette> {
        let curve = self.curve(BODY_DEGREE)?;
        MakeSilhouette::new(&curve, self.tires()?, self.ground())
            .with_params(params)
            .execute()
    }
}
