use std::mem;

use geo::{Coord, LineString, Polygon};
use itertools::Itertools;
use log::trace;
use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::Segments;
use crate::geometry::primitives::Segment;
use crate::util::{ClipConfig, assertions};

/// Splits `line` into sub-lines at every point where it meets the boundary of `polygon`,
/// its exterior ring as well as its holes.
///
/// Crossings, touches and both ends of collinear overlaps all act as cut points.
/// Cut points closer than [`ClipConfig::boundary_tolerance`] to each other or to a vertex are merged.
/// Zero-length pieces are never emitted, so chaining the pieces reproduces the original line.
/// A line with fewer than two distinct coordinates yields no pieces.
pub fn split_by_boundary(
    line: &LineString,
    polygon: &Polygon,
    config: &ClipConfig,
) -> Vec<LineString> {
    let boundary = polygon.segments().collect_vec();

    let mut pieces = vec![];
    let mut current: Vec<Coord> = match line.0.first() {
        Some(first) => vec![*first],
        None => return pieces,
    };

    for segment in line.segments() {
        for t in cut_params(&segment, &boundary, config) {
            cut(&mut pieces, &mut current, segment.point_at(t));
        }
        push_distinct(&mut current, segment.end);
    }
    if current.len() >= 2 {
        pieces.push(LineString::new(current));
    }

    debug_assert!(assertions::pieces_cover_line(line, &pieces));
    trace!(
        "split line of {} coords into {} pieces",
        line.0.len(),
        pieces.len()
    );
    pieces
}

/// Sorted, de-duplicated parameters along `segment` at which it meets any `boundary` segment
fn cut_params(segment: &Segment, boundary: &[Segment], config: &ClipConfig) -> Vec<f64> {
    let param_tolerance = config.boundary_tolerance / segment.length();

    boundary
        .iter()
        .flat_map(|b| {
            segment
                .intersect(b, config.parallel_tolerance)
                .split_params()
        })
        .map(|t| match t {
            t if t <= param_tolerance => 0.0,
            t if t >= 1.0 - param_tolerance => 1.0,
            t => t,
        })
        .sorted_by_key(|t| OrderedFloat(*t))
        .dedup_by(|a, b| (b - a).abs() <= param_tolerance)
        .collect_vec()
}

/// Ends the current piece at `at` and starts a new one from there
fn cut(pieces: &mut Vec<LineString>, current: &mut Vec<Coord>, at: Coord) {
    push_distinct(current, at);
    let finished = mem::replace(current, vec![at]);
    if finished.len() >= 2 {
        pieces.push(LineString::new(finished));
    }
}

fn push_distinct(coords: &mut Vec<Coord>, c: Coord) {
    if coords.last() != Some(&c) {
        coords.push(c);
    }
}
