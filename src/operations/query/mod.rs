mod area;
mod bounding_box;

pub use area::FillArea;
pub use bounding_box::{Aabb2, BoundingBox};
