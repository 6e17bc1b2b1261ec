//! Measures the real-world length of infrastructure assets
//! (pipes, roadways, sidewalks, park frontages, ...) that lies inside the footprint of a work area.

/// Entities describing assets, work areas and measured lengths
pub mod entities;

/// Geometric primitives and the base algorithms the length computation relies on
pub mod geometry;

/// Importing external (serializable) geometries into and exporting lengths out of this library
pub mod io;

/// The work-area-clipped length computation
pub mod length;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use length::{AssetLengthCalculator, compute_asset_length};
