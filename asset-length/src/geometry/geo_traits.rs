use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::primitives::Segment;

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of a collision.
    fn distance_to(&self, other: &T) -> f64;

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Trait for types that can determine where `T` lies relative to `Self`.
///
/// Due to floating point arithmetic precision, points which are computed to lie on a boundary
/// (e.g. the result of an intersection) can end up marginally on either side of it.
/// Anything within `tolerance` of the boundary is therefore reported as [GeoPosition::Boundary].
pub trait Locate<T> {
    fn locate(&self, other: &T, tolerance: f64) -> GeoPosition;
}

/// Trait for shapes that can be decomposed into the [`Segment`]s along their outline.
/// Degenerate (zero-length) segments are skipped.
pub trait Segments {
    fn segments(&self) -> impl Iterator<Item = Segment> + '_;
}
