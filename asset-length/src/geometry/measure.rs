use geo::{HaversineLength, LineString, Polygon};

/// Great-circle length of `line` in meters,
/// with coordinates interpreted as (longitude, latitude) in degrees.
/// Uses the haversine formula with the mean earth radius of 6 371 008.8 m.
pub fn geodesic_length(line: &LineString) -> f64 {
    line.haversine_length()
}

/// The outer ring of `polygon` as a closed line
pub fn outer_ring_as_line(polygon: &Polygon) -> LineString {
    let mut ring = polygon.exterior().clone();
    ring.close();
    ring
}
