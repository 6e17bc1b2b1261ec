use geo::{Coord, LineString, Polygon};

use crate::geometry::geo_enums::SegmentIntersection;
use crate::geometry::geo_traits::{DistanceTo, Segments};

/// Line segment between two [`Coord`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Segment {
    pub start: Coord,
    pub end: Coord,
}

impl Segment {
    pub fn new(start: Coord, end: Coord) -> Self {
        Segment { start, end }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Point at parameter `t` along the segment. `0.0` and `1.0` return the exact endpoints.
    pub fn point_at(&self, t: f64) -> Coord {
        match t {
            0.0 => self.start,
            1.0 => self.end,
            _ => self.start + (self.end - self.start) * t,
        }
    }

    pub fn midpoint(&self) -> Coord {
        self.point_at(0.5)
    }

    /// Euclidean length in coordinate units
    pub fn length(&self) -> f64 {
        let Coord { x, y } = self.end - self.start;
        x.hypot(y)
    }

    /// Returns the closest point which lies on the segment to the given point
    pub fn closest_point(&self, point: &Coord) -> Coord {
        let d = self.end - self.start;
        let len_sq = dot(d, d);
        if len_sq == 0.0 {
            return self.start;
        }
        let param = dot(*point - self.start, d) / len_sq;
        match param {
            p if p <= 0.0 => self.start, //start is the closest point
            p if p >= 1.0 => self.end,   //end is the closest point
            p => self.point_at(p),       //closest point is on the segment
        }
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.start.x, self.end.x)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.start.y, self.end.y)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.start.x, self.end.x)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.start.y, self.end.y)
    }

    /// Determines how `self` meets `other`, with all parameters expressed along `self`.
    ///
    /// Two segments are considered parallel when the sine of the angle between them
    /// drops below `parallel_tolerance`.
    pub fn intersect(&self, other: &Segment, parallel_tolerance: f64) -> SegmentIntersection {
        if f64::max(self.x_min(), other.x_min()) > f64::min(self.x_max(), other.x_max())
            || f64::max(self.y_min(), other.y_min()) > f64::min(self.y_max(), other.y_max())
        {
            //bounding boxes do not overlap
            return SegmentIntersection::Disjoint;
        }
        if self.is_degenerate() || other.is_degenerate() {
            return SegmentIntersection::Disjoint;
        }

        //based on: https://stackoverflow.com/a/565282
        let r = self.end - self.start;
        let s = other.end - other.start;
        let qp = other.start - self.start;

        let denom = cross(r, s);
        let r_len = r.x.hypot(r.y);
        let s_len = s.x.hypot(s.y);

        if denom.abs() <= parallel_tolerance * r_len * s_len {
            let qp_len = qp.x.hypot(qp.y);
            if cross(qp, r).abs() > parallel_tolerance * qp_len * r_len {
                //parallel, but not on the same line
                return SegmentIntersection::Disjoint;
            }
            //collinear, project other onto self
            let rr = dot(r, r);
            let t0 = dot(qp, r) / rr;
            let t1 = t0 + dot(s, r) / rr;
            let from = f64::max(f64::min(t0, t1), 0.0);
            let to = f64::min(f64::max(t0, t1), 1.0);
            match from.partial_cmp(&to) {
                Some(std::cmp::Ordering::Less) => SegmentIntersection::Overlapping { from, to },
                Some(std::cmp::Ordering::Equal) => SegmentIntersection::Touching { t: from },
                _ => SegmentIntersection::Disjoint,
            }
        } else {
            let t = cross(qp, s) / denom;
            let u = cross(qp, r) / denom;
            let unit = 0.0..=1.0;
            if !unit.contains(&t) || !unit.contains(&u) {
                SegmentIntersection::Disjoint
            } else if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
                SegmentIntersection::Crossing { t }
            } else {
                SegmentIntersection::Touching { t }
            }
        }
    }
}

impl DistanceTo<Coord> for Segment {
    #[inline(always)]
    fn distance_to(&self, point: &Coord) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Coord) -> f64 {
        let d = *point - self.closest_point(point);
        dot(d, d)
    }
}

impl Segments for LineString {
    fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.lines()
            .map(|l| Segment::new(l.start, l.end))
            .filter(|s| !s.is_degenerate())
    }
}

impl Segments for Polygon {
    /// Segments of the exterior ring followed by those of every hole
    fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        std::iter::once(self.exterior())
            .chain(self.interiors())
            .flat_map(|ring| ring.segments())
    }
}

#[inline(always)]
fn cross(a: Coord, b: Coord) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline(always)]
fn dot(a: Coord, b: Coord) -> f64 {
    a.x * b.x + a.y * b.y
}
