use crate::math::Point2;

/// Builds the vertex ring of the filled silhouette polygon.
///
/// The ring is the sampled outline in order, then `last_control`, then
/// `first_control`. It is implicitly closed from `first_control` back to
/// `samples[0]`, so no vertex is repeated.
#[must_use]
pub fn closed_fill(samples: &[Point2], first_control: Point2, last_control: Point2) -> Vec<Point2> {
    let mut ring = Vec::with_capacity(samples.len() + 2);
    ring.extend_from_slice(samples);
    ring.push(last_control);
    ring.push(first_control);
    ring
}
