use serde::{Deserialize, Serialize};

use crate::entities::{GeometryKind, LengthUnit};

/// A position as `[longitude, latitude]` in degrees.
/// Any further elements (e.g. altitude) are ignored.
pub type ExtPosition = Vec<f64>;

/// External representation of a geometry, following the geographic interchange model
/// (`{"type": "LineString", "coordinates": [[lon, lat], ...]}`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ExtGeometry {
    Point {
        coordinates: ExtPosition,
    },
    MultiPoint {
        coordinates: Vec<ExtPosition>,
    },
    LineString {
        coordinates: Vec<ExtPosition>,
    },
    MultiLineString {
        coordinates: Vec<Vec<ExtPosition>>,
    },
    /// First ring is the outer boundary, any further rings are holes
    Polygon {
        coordinates: Vec<Vec<ExtPosition>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<ExtPosition>>>,
    },
    GeometryCollection {
        geometries: Vec<ExtGeometry>,
    },
}

impl ExtGeometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            ExtGeometry::Point { .. } => GeometryKind::Point,
            ExtGeometry::MultiPoint { .. } => GeometryKind::MultiPoint,
            ExtGeometry::LineString { .. } => GeometryKind::LineString,
            ExtGeometry::MultiLineString { .. } => GeometryKind::MultiLineString,
            ExtGeometry::Polygon { .. } => GeometryKind::Polygon,
            ExtGeometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
            ExtGeometry::GeometryCollection { .. } => GeometryKind::GeometryCollection,
        }
    }
}

/// External representation of an asset's geometry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtAsset {
    /// Identifier of the asset, carried through to the results
    pub id: String,
    pub geometry: ExtGeometry,
    /// Reference lines measured instead of the boundary of polygon-shaped assets
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub road_sections: Option<Vec<ExtGeometry>>,
}

/// External representation of a [`Length`](crate::entities::Length)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtLength {
    pub value: f64,
    pub unit: LengthUnit,
}

/// Measured length of a single asset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtAssetLength {
    pub id: String,
    pub kind: GeometryKind,
    pub length: ExtLength,
}

/// Measured lengths of a batch of assets
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLengthReport {
    pub lengths: Vec<ExtAssetLength>,
    /// Sum of all lengths
    pub total: ExtLength,
}
