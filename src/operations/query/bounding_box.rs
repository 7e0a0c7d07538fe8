use crate::math::Point2;
use crate::operations::creation::Silhouette;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Returns the smallest box containing every point, or `None` if empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            aabb.include(p);
        }
        Some(aabb)
    }

    /// Grows the box to contain `p`.
    pub fn include(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns `true` if `p` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Computes the axis-aligned bounding box of a silhouette scene.
///
/// Covers the outline, the fill ring, every tire's full disc, and the
/// ground segment.
pub struct BoundingBox<'a> {
    silhouette: &'a Silhouette,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(silhouette: &'a Silhouette) -> Self {
        Self { silhouette }
    }

    /// Executes the query, returning `None` for an empty scene.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb2> {
        let s = self.silhouette;
        let mut points: Vec<Point2> = s.outline.points.iter().chain(&s.fill).copied().collect();
        for tire in &s.tires {
            let (min, max) = tire.extent();
            points.push(min);
            points.push(max);
        }
        if let Some(ground) = &s.ground {
            points.extend(ground.endpoints());
        }
        Aabb2::from_points(&points)
    }
}
