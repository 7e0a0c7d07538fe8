mod closed_fill;
mod make_silhouette;

pub use closed_fill::closed_fill;
pub use make_silhouette::{GroundLine, MakeSilhouette, Silhouette};
