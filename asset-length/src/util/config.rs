use serde::{Deserialize, Serialize};

/// Numerical tolerances used while clipping lines to a work area
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ClipConfig {
    /// Distance (in degrees) within which a coordinate is considered to lie on a polygon boundary.
    /// Also used to merge cut points which lie this close together.
    pub boundary_tolerance: f64,
    /// Segments are treated as parallel when the sine of the angle between them is below this value
    pub parallel_tolerance: f64,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            boundary_tolerance: 1e-9,
            parallel_tolerance: 1e-12,
        }
    }
}
