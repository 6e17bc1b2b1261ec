use std::fmt::{Display, Formatter};

use geo::{LineString, MultiLineString, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Kinds of geometry of the geographic interchange model
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Geometric footprint of an infrastructure asset (pipe, roadway, sidewalk, park, ...)
#[derive(Clone, Debug, PartialEq)]
pub enum AssetGeometry {
    Point(Point),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon {
        polygon: Polygon,
        /// Independent reference lines representing the true linear extent of the asset
        /// (e.g. the frontage roads of a park), measured instead of the polygon's boundary
        road_sections: Option<Vec<LineString>>,
    },
    /// Any other kind, which has no measurable linear extent
    Unsupported(GeometryKind),
}

impl AssetGeometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            AssetGeometry::Point(_) => GeometryKind::Point,
            AssetGeometry::LineString(_) => GeometryKind::LineString,
            AssetGeometry::MultiLineString(_) => GeometryKind::MultiLineString,
            AssetGeometry::Polygon { .. } => GeometryKind::Polygon,
            AssetGeometry::Unsupported(kind) => *kind,
        }
    }
}
