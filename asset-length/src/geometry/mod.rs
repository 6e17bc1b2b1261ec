/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Containment test of a line inside a polygon
pub mod containment;

/// Splitting of lines at the boundary of a polygon
pub mod split;

/// Geodesic measurement and conversions between geometry shapes
pub mod measure;

#[doc(inline)]
pub use containment::line_within_polygon;
#[doc(inline)]
pub use measure::{geodesic_length, outer_ring_as_line};
#[doc(inline)]
pub use split::split_by_boundary;
