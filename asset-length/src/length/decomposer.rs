use geo::Polygon;

use crate::entities::WorkArea;

/// Normalizes a work area into the individual polygons it consists of, in order.
pub fn parts(work_area: &WorkArea) -> Vec<&Polygon> {
    match work_area {
        WorkArea::Polygon(polygon) => vec![polygon],
        WorkArea::MultiPolygon(multi) => multi.iter().collect(),
    }
}
