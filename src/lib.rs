//! NURBS kernel for interactive car-silhouette design.
//!
//! A body is a clamped rational B-spline over weighted control points. The
//! kernel builds and samples that curve, derives the closed fill polygon of
//! the silhouette, and carries the presets, editing state and saved-design
//! format that sit around it.

pub mod catalog;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod record;
pub mod tessellation;

pub use error::{Result, SilhouetteError};
