use geo::LineString;
use log::debug;

use crate::entities::{AssetGeometry, Length, WorkArea};
use crate::geometry::outer_ring_as_line;
use crate::length::aggregator;
use crate::util::ClipConfig;

/// Routes `asset` to the length strategy matching its kind of geometry.
/// Kinds without a measurable linear extent measure 0 m.
pub fn length(asset: &AssetGeometry, work_area: &WorkArea, config: &ClipConfig) -> Length {
    match asset {
        AssetGeometry::LineString(line) => aggregator::of_single_line(line, work_area, config),
        AssetGeometry::MultiLineString(lines) => aggregator::of_lines(lines, work_area, config),
        AssetGeometry::Polygon {
            road_sections: Some(road_sections),
            ..
        } => aggregator::of_road_sections(road_sections, work_area, config),
        AssetGeometry::Polygon {
            polygon,
            road_sections: None,
        } => aggregator::of_single_line(&outer_ring_as_line(polygon), work_area, config),
        AssetGeometry::Point(_) | AssetGeometry::Unsupported(_) => {
            debug!("{} asset has no linear extent, measuring 0 m", asset.kind());
            Length::zero()
        }
    }
}

/// The lines which are measured for `asset`
pub fn measured_lines(asset: &AssetGeometry) -> Vec<LineString> {
    match asset {
        AssetGeometry::LineString(line) => vec![line.clone()],
        AssetGeometry::MultiLineString(lines) => lines.0.clone(),
        AssetGeometry::Polygon {
            road_sections: Some(road_sections),
            ..
        } => road_sections.clone(),
        AssetGeometry::Polygon {
            polygon,
            road_sections: None,
        } => vec![outer_ring_as_line(polygon)],
        AssetGeometry::Point(_) | AssetGeometry::Unsupported(_) => vec![],
    }
}
