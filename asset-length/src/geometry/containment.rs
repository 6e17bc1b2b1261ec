use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord, LineString, Polygon};
use itertools::Itertools;
use log::trace;
use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{DistanceTo, Locate, Segments};
use crate::geometry::split::split_by_boundary;
use crate::util::ClipConfig;

impl Locate<Coord> for Polygon {
    fn locate(&self, coord: &Coord, tolerance: f64) -> GeoPosition {
        let sq_tolerance = tolerance * tolerance;
        if self
            .segments()
            .any(|s| s.sq_distance_to(coord) <= sq_tolerance)
        {
            return GeoPosition::Boundary;
        }
        match self.coordinate_position(coord) {
            CoordPos::Inside => GeoPosition::Interior,
            CoordPos::OnBoundary => GeoPosition::Boundary,
            CoordPos::Outside => GeoPosition::Exterior,
        }
    }
}

impl Locate<LineString> for Polygon {
    /// Position of a line which does not cross or touch the boundary anywhere but at its ends.
    /// Sampled at the midpoint of its longest segment, furthest from any boundary contact.
    fn locate(&self, line: &LineString, tolerance: f64) -> GeoPosition {
        let longest = line
            .segments()
            .max_by_key(|s| OrderedFloat(s.length()));
        match longest {
            Some(longest) => self.locate(&longest.midpoint(), tolerance),
            None => match line.0.first() {
                Some(coord) => self.locate(coord, tolerance),
                None => GeoPosition::Exterior,
            },
        }
    }
}

/// Tests whether `line` lies fully inside `polygon`.
///
/// The line is cut wherever it meets any ring of the polygon.
/// Every resulting piece then lies entirely on one side of the boundary.
/// The line is contained iff no piece lies in the exterior and at least one lies in the interior.
/// A line running exclusively along the boundary is therefore *not* contained,
/// and neither is a line passing through a hole.
pub fn line_within_polygon(line: &LineString, polygon: &Polygon, config: &ClipConfig) -> bool {
    let positions = split_by_boundary(line, polygon, config)
        .iter()
        .map(|piece| polygon.locate(piece, config.boundary_tolerance))
        .collect_vec();

    trace!("{} pieces located at {positions:?}", positions.len());

    positions.iter().all(|p| *p != GeoPosition::Exterior)
        && positions.iter().any(|p| *p == GeoPosition::Interior)
}
