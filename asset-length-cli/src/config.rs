use asset_length::util::ClipConfig;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of a batch measurement
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AlcConfig {
    /// Numerical tolerances of the clipping
    #[serde(default)]
    pub clip_config: ClipConfig,
    /// Whether to measure the assets on all available threads
    pub parallel: bool,
    /// Optional SVG drawing options. If undefined, no SVG is drawn
    #[serde(default)]
    pub svg_draw_options: Option<SvgDrawOptions>,
}

impl Default for AlcConfig {
    fn default() -> Self {
        Self {
            clip_config: ClipConfig::default(),
            parallel: true,
            svg_draw_options: Some(SvgDrawOptions::default()),
        }
    }
}
