/// Position of a coordinate relative to a polygon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Exterior,
    /// On (or within tolerance of) one of the polygon's rings
    Boundary,
    Interior,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Possible ways segment A can meet segment B.
/// All parameters are expressed along A, in `[0, 1]`.
pub enum SegmentIntersection {
    /// A ∩ B = ∅
    Disjoint,
    /// A and B cross at a single point interior to both
    Crossing { t: f64 },
    /// A and B share a single point which is an endpoint of at least one of them
    Touching { t: f64 },
    /// A and B are collinear and share the sub-segment `[from, to]` of A
    Overlapping { from: f64, to: f64 },
}

impl SegmentIntersection {
    /// Parameters along A at which A should be cut to separate it from B
    pub fn split_params(&self) -> impl Iterator<Item = f64> + use<> {
        let (first, second) = match *self {
            SegmentIntersection::Disjoint => (None, None),
            SegmentIntersection::Crossing { t } | SegmentIntersection::Touching { t } => {
                (Some(t), None)
            }
            SegmentIntersection::Overlapping { from, to } => (Some(from), Some(to)),
        };
        first.into_iter().chain(second)
    }
}
