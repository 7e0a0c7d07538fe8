use thiserror::Error;

/// Top-level error type for the silhouette kernel.
#[derive(Debug, Error)]
pub enum SilhouetteError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors raised while building or evaluating a curve.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("invalid parameter: degree {degree} needs more than {point_count} control points")]
    InvalidParameter { degree: usize, point_count: usize },

    #[error("invalid curve definition: {0}")]
    InvalidCurveDefinition(#[from] Constraint),

    #[error("degenerate evaluation at u = {u}: rational basis denominator vanished")]
    DegenerateEvaluation { u: f64 },

    #[error("parameter u = {u} is out of range [{min}, {max}]")]
    ParameterOutOfRange { u: f64, min: f64, max: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// The curve-definition constraint that an input violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Constraint {
    #[error("{points} control points but {weights} weights")]
    WeightCount { points: usize, weights: usize },

    #[error("knot vector has {actual} knots, expected {expected}")]
    KnotCount { expected: usize, actual: usize },

    #[error("weight {index} = {value} must be positive and finite")]
    NonPositiveWeight { index: usize, value: f64 },

    #[error("control point {index} is not finite")]
    NonFinitePoint { index: usize },

    #[error("knot {index} decreases or is not finite")]
    DecreasingKnot { index: usize },

    #[error("degree {degree} must be below the control point count {points}")]
    DegreeTooHigh { degree: usize, points: usize },

    #[error("degree must be at least 1")]
    ZeroDegree,

    #[error("parameter domain [{start}, {end}] is empty")]
    EmptyDomain { start: f64, end: f64 },

    #[error("delta = {delta} must lie in (0, 1]")]
    DeltaOutOfRange { delta: f64 },

    #[error("delta = {delta} would need more than {max} samples")]
    TooManySamples { delta: f64, max: usize },
}

/// Errors related to the car model catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown car model: {0}")]
    UnknownModel(String),

    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors related to interactive shape editing.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("control point index {index} out of range (shape has {len} points)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to design record persistence.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed design record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`SilhouetteError`].
pub type Result<T> = std::result::Result<T, SilhouetteError>;

impl From<Constraint> for SilhouetteError {
    fn from(constraint: Constraint) -> Self {
        Self::Curve(CurveError::InvalidCurveDefinition(constraint))
    }
}
