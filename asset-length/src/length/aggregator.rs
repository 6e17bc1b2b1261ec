use geo::LineString;

use crate::entities::{Length, WorkArea};
use crate::length::{clipper, decomposer, fallback};
use crate::util::ClipConfig;

pub fn of_single_line(line: &LineString, work_area: &WorkArea, config: &ClipConfig) -> Length {
    let parts = decomposer::parts(work_area);
    Length::meters(fallback::with_fallback(line, &parts, config))
}

pub fn of_lines<'a>(
    lines: impl IntoIterator<Item = &'a LineString>,
    work_area: &WorkArea,
    config: &ClipConfig,
) -> Length {
    let parts = decomposer::parts(work_area);
    lines
        .into_iter()
        .map(|l| Length::meters(fallback::with_fallback(l, &parts, config)))
        .sum()
}

/// Unlike [`of_lines`], no fallback is applied:
/// road sections outside the work area contribute nothing.
pub fn of_road_sections(
    road_sections: &[LineString],
    work_area: &WorkArea,
    config: &ClipConfig,
) -> Length {
    let parts = decomposer::parts(work_area);
    road_sections
        .iter()
        .map(|rs| Length::meters(clipper::clip(rs, &parts, config)))
        .sum()
}
