use anyhow::{Context, Result, bail, ensure};
use geo::{Coord, LineString, MultiLineString, MultiPolygon, Point, Polygon};
use itertools::Itertools;
use log::{debug, warn};

use crate::entities::{AssetGeometry, WorkArea};
use crate::io::ext_repr::{ExtAsset, ExtGeometry, ExtPosition};

/// Converts the external representation of an asset into an [`AssetGeometry`].
///
/// Kinds of geometry without a length strategy are imported as
/// [`AssetGeometry::Unsupported`] rather than rejected.
pub fn import_asset(ext_asset: &ExtAsset) -> Result<AssetGeometry> {
    let geometry = &ext_asset.geometry;
    if ext_asset.road_sections.is_some() && !matches!(geometry, ExtGeometry::Polygon { .. }) {
        warn!(
            "asset {} is a {}, ignoring its road sections",
            ext_asset.id,
            geometry.kind()
        );
    }

    let asset = match geometry {
        ExtGeometry::Point { coordinates } => {
            AssetGeometry::Point(Point(import_position(coordinates)?))
        }
        ExtGeometry::LineString { coordinates } => {
            AssetGeometry::LineString(import_line_string(coordinates)?)
        }
        ExtGeometry::MultiLineString { coordinates } => {
            AssetGeometry::MultiLineString(import_multi_line_string(coordinates)?)
        }
        ExtGeometry::Polygon { coordinates } => {
            let road_sections = match &ext_asset.road_sections {
                Some(sections) => Some(import_road_sections(sections)?),
                None => None,
            };
            AssetGeometry::Polygon {
                polygon: import_polygon(coordinates)?,
                road_sections,
            }
        }
        ExtGeometry::MultiPoint { .. }
        | ExtGeometry::MultiPolygon { .. }
        | ExtGeometry::GeometryCollection { .. } => {
            debug!("asset {} has no length strategy", ext_asset.id);
            AssetGeometry::Unsupported(geometry.kind())
        }
    };

    Ok(asset)
}

/// Converts the external representation of a work area, which must be a polygon or multi-polygon.
pub fn import_work_area(ext_geometry: &ExtGeometry) -> Result<WorkArea> {
    match ext_geometry {
        ExtGeometry::Polygon { coordinates } => Ok(WorkArea::Polygon(import_polygon(coordinates)?)),
        ExtGeometry::MultiPolygon { coordinates } => {
            let polygons = coordinates
                .iter()
                .enumerate()
                .map(|(i, p)| import_polygon(p).with_context(|| format!("part {i}")))
                .collect::<Result<Vec<_>>>()?;
            ensure!(!polygons.is_empty(), "work area multi-polygon has no parts");
            Ok(WorkArea::MultiPolygon(MultiPolygon::new(polygons)))
        }
        other => bail!("work area cannot be a {}", other.kind()),
    }
}

pub fn import_road_sections(ext_sections: &[ExtGeometry]) -> Result<Vec<LineString>> {
    let mut sections = vec![];
    for (i, ext_section) in ext_sections.iter().enumerate() {
        let context = || format!("road section {i}");
        match ext_section {
            ExtGeometry::LineString { coordinates } => {
                let section = import_line_string(coordinates).with_context(context)?;
                sections.push(section);
            }
            ExtGeometry::MultiLineString { coordinates } => {
                let lines = import_multi_line_string(coordinates).with_context(context)?;
                sections.extend(lines);
            }
            other => bail!("road section {i} is a {}, not a line", other.kind()),
        }
    }
    Ok(sections)
}

pub fn import_position(ext_pos: &ExtPosition) -> Result<Coord> {
    ensure!(
        ext_pos.len() >= 2,
        "position needs a longitude and latitude: {ext_pos:?}"
    );
    let (x, y) = (ext_pos[0], ext_pos[1]);
    ensure!(
        x.is_finite() && y.is_finite(),
        "position has non-finite coordinates: {ext_pos:?}"
    );
    Ok(Coord { x, y })
}

pub fn import_line_string(ext_positions: &[ExtPosition]) -> Result<LineString> {
    ensure!(
        ext_positions.len() >= 2,
        "line string must have at least 2 positions, got {}",
        ext_positions.len()
    );
    let coords = ext_positions
        .iter()
        .map(import_position)
        .collect::<Result<Vec<_>>>()?;
    Ok(LineString::new(coords))
}

pub fn import_multi_line_string(ext_lines: &[Vec<ExtPosition>]) -> Result<MultiLineString> {
    let lines = ext_lines
        .iter()
        .enumerate()
        .map(|(i, l)| import_line_string(l).with_context(|| format!("line {i}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiLineString::new(lines))
}

/// Rings are closed if necessary. Winding order and self-intersections are not checked.
pub fn import_polygon(ext_rings: &[Vec<ExtPosition>]) -> Result<Polygon> {
    let mut rings = ext_rings
        .iter()
        .enumerate()
        .map(|(i, r)| import_ring(r).with_context(|| format!("ring {i}")))
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    match rings.next() {
        Some(exterior) => Ok(Polygon::new(exterior, rings.collect_vec())),
        None => bail!("polygon must have an outer ring"),
    }
}

fn import_ring(ext_positions: &[ExtPosition]) -> Result<LineString> {
    let coords = ext_positions
        .iter()
        .map(import_position)
        .collect::<Result<Vec<_>>>()?;
    let mut ring = LineString::new(coords);
    ring.close();
    ensure!(
        ring.0.len() >= 4,
        "ring must have at least 3 distinct positions, got {}",
        ext_positions.len()
    );
    Ok(ring)
}
