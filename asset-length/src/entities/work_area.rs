use geo::{MultiPolygon, Polygon};

/// Footprint of a planned intervention
#[derive(Clone, Debug, PartialEq)]
pub enum WorkArea {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl From<Polygon> for WorkArea {
    fn from(p: Polygon) -> Self {
        WorkArea::Polygon(p)
    }
}

impl From<MultiPolygon> for WorkArea {
    fn from(mp: MultiPolygon) -> Self {
        WorkArea::MultiPolygon(mp)
    }
}
