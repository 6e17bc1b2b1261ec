use float_cmp::approx_eq;
use geo::LineString;
use log::error;

use crate::entities::Length;
use crate::geometry::geodesic_length;

//Various checks to verify correctness of the computations
//Used in debug_assert!() blocks

pub fn length_is_valid(length: &Length) -> bool {
    match length.value.is_finite() && length.value >= 0.0 {
        true => true,
        false => {
            error!("invalid length: {length:?}");
            false
        }
    }
}

/// The pieces of a split line should add up to the length of the original line
pub fn pieces_cover_line(line: &LineString, pieces: &[LineString]) -> bool {
    let line_length = geodesic_length(line);
    let pieces_length: f64 = pieces.iter().map(geodesic_length).sum();

    let tolerance = 1e-3 * line_length.max(1.0);
    match approx_eq!(f64, line_length, pieces_length, epsilon = tolerance) {
        true => true,
        false => {
            error!("pieces cover {pieces_length} m of a {line_length} m line");
            false
        }
    }
}

/// Clipping to a single part can never yield more than the unclipped length of the line
pub fn clipped_within_bounds(line: &LineString, clipped: f64) -> bool {
    let line_length = geodesic_length(line);
    match clipped >= 0.0 && clipped <= line_length * (1.0 + 1e-3) {
        true => true,
        false => {
            error!("clipped {clipped} m out of a {line_length} m line");
            false
        }
    }
}
