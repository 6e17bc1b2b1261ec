use geo::{LineString, Polygon};
use itertools::Itertools;

use crate::geometry::{geodesic_length, line_within_polygon, split_by_boundary};
use crate::util::{ClipConfig, assertions};

/// Summed geodesic length (in meters) of the portions of `line` inside the `parts` of a work area.
///
/// Contributions of all parts are accumulated:
/// a line can enter a multi-part work area in several disjoint places.
/// Parts are not deduplicated, a portion inside two overlapping parts is counted twice.
pub fn clip(line: &LineString, parts: &[&Polygon], config: &ClipConfig) -> f64 {
    let mut total = 0.0;
    for part in parts {
        let contribution = match line_within_polygon(line, part, config) {
            true => geodesic_length(line),
            false => inside_pieces(line, part, config)
                .iter()
                .map(geodesic_length)
                .sum(),
        };
        debug_assert!(assertions::clipped_within_bounds(line, contribution));
        total += contribution;
    }
    total
}

/// The portions of `line` which lie inside any of the `parts`, as measured by [`clip`].
pub fn clipped_pieces(
    line: &LineString,
    parts: &[&Polygon],
    config: &ClipConfig,
) -> Vec<LineString> {
    parts
        .iter()
        .flat_map(|part| match line_within_polygon(line, part, config) {
            true => vec![line.clone()],
            false => inside_pieces(line, part, config),
        })
        .collect_vec()
}

fn inside_pieces(line: &LineString, part: &Polygon, config: &ClipConfig) -> Vec<LineString> {
    split_by_boundary(line, part, config)
        .into_iter()
        .filter(|piece| line_within_polygon(piece, part, config))
        .collect_vec()
}
