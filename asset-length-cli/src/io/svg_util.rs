use std::fmt::{Display, Formatter};

use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    pub stroke_width_multiplier: f32,
    pub work_area_fill: Color,
    /// Stroke of the lines measured for each asset
    pub line_stroke: Color,
    /// Stroke of the portions of lines inside the work area
    pub clipped_stroke: Color,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            stroke_width_multiplier: 2.0,
            work_area_fill: Color(0xFF, 0xC8, 0x79),
            line_stroke: Color(0x2D, 0x2D, 0x2D),
            clipped_stroke: Color(0xFF, 0x00, 0x00),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| format!("invalid color: {s}"))
        };
        match hex.len() {
            6 => Ok(Color(channel(0)?, channel(2)?, channel(4)?)),
            _ => Err(format!("invalid color: {s}")),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str())
            .map_err(serde::de::Error::custom)
    }
}

/// Maps geographic coordinates onto the SVG canvas.
/// Shifts the origin to the top left corner of the drawn extent (keeping `f32` precision)
/// and flips the y-axis.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Frame {
    pub fn around<'a>(coords: impl IntoIterator<Item = &'a Coord>) -> Option<Frame> {
        coords.into_iter().fold(None, |frame, c| {
            Some(match frame {
                None => Frame {
                    x_min: c.x,
                    y_min: c.y,
                    x_max: c.x,
                    y_max: c.y,
                },
                Some(f) => Frame {
                    x_min: f.x_min.min(c.x),
                    y_min: f.y_min.min(c.y),
                    x_max: f.x_max.max(c.x),
                    y_max: f.y_max.max(c.y),
                },
            })
        })
    }

    /// Grows the frame by `fraction` of its size on every side
    pub fn padded(self, fraction: f64) -> Frame {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Frame {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn project(&self, c: &Coord) -> (f32, f32) {
        ((c.x - self.x_min) as f32, (self.y_max - c.y) as f32)
    }
}

pub fn line_data(line: &LineString, frame: &Frame) -> Data {
    let mut coords = line.coords();
    let data = match coords.next() {
        Some(first) => Data::new().move_to(frame.project(first)),
        None => return Data::new(),
    };
    coords.fold(data, |data, c| data.line_to(frame.project(c)))
}

/// Outer ring and holes as separate closed sub-paths, to be filled with the `evenodd` rule
pub fn polygon_data(polygon: &Polygon, frame: &Frame) -> Data {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .fold(Data::new(), |data, ring| {
            let mut coords = ring.coords();
            match coords.next() {
                Some(first) => coords
                    .fold(data.move_to(frame.project(first)), |data, c| {
                        data.line_to(frame.project(c))
                    })
                    .close(),
                None => data,
            }
        })
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
