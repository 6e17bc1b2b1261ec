use geo::{LineString, Polygon};
use log::debug;

use crate::geometry::geodesic_length;
use crate::length::clipper;
use crate::util::ClipConfig;

/// [`clipper::clip`], substituting the full unclipped length of `line`
/// when clipping finds no overlap at all.
///
/// Lines lying exactly on a boundary, or lost to precision limits of the containment test,
/// would otherwise silently report 0 m.
/// Note that a line entirely outside the work area therefore also reports its full length.
pub fn with_fallback(line: &LineString, parts: &[&Polygon], config: &ClipConfig) -> f64 {
    match clipper::clip(line, parts, config) {
        0.0 => {
            let full = geodesic_length(line);
            debug!("[FALLBACK] no overlap with work area, using unclipped length of {full:.3} m");
            full
        }
        clipped => clipped,
    }
}
