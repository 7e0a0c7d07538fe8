pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts an `[x, y]` pair into a point.
#[must_use]
pub fn point_from_pair(pair: [f64; 2]) -> Point2 {
    Point2::new(pair[0], pair[1])
}

/// Converts a point into an `[x, y]` pair.
#[must_use]
pub fn pair_from_point(point: &Point2) -> [f64; 2] {
    [point.x, point.y]
}
