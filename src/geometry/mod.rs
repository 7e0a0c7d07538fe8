pub mod basis;
pub mod curve;
pub mod knot;

pub use curve::{BSplineCurve, Circle2, Curve, CurveDomain, NurbsCurve};
