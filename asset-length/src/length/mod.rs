use geo::LineString;
use itertools::Itertools;
use rayon::prelude::*;

use crate::entities::{AssetGeometry, Length, WorkArea};
use crate::util::{ClipConfig, assertions};

/// Combines per-line results for assets consisting of multiple lines
pub mod aggregator;

/// Clips a single line to the parts of a work area
pub mod clipper;

/// Splits a work area into its individual polygons
pub mod decomposer;

/// Routes assets to a length strategy by their kind of geometry
pub mod dispatcher;

/// Guards against clipping reporting no overlap at all
pub mod fallback;

/// Measures the length of assets inside a work area.
///
/// Holds no state other than its configuration:
/// every call is independent and read-only over its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssetLengthCalculator {
    pub config: ClipConfig,
}

impl AssetLengthCalculator {
    pub fn new(config: ClipConfig) -> Self {
        Self { config }
    }

    /// Length of the portion of `asset` inside `work_area`
    pub fn length(&self, asset: &AssetGeometry, work_area: &WorkArea) -> Length {
        let length = dispatcher::length(asset, work_area, &self.config);
        debug_assert!(assertions::length_is_valid(&length));
        length
    }

    /// Lengths of a batch of assets, computed in parallel.
    /// Results are in the same order as `assets`.
    pub fn lengths(&self, assets: &[AssetGeometry], work_area: &WorkArea) -> Vec<Length> {
        assets
            .par_iter()
            .map(|asset| self.length(asset, work_area))
            .collect()
    }

    /// Sequential counterpart of [`Self::lengths`]
    pub fn lengths_sequential(
        &self,
        assets: &[AssetGeometry],
        work_area: &WorkArea,
    ) -> Vec<Length> {
        assets
            .iter()
            .map(|asset| self.length(asset, work_area))
            .collect_vec()
    }

    /// The portions of the lines measured for `asset` which lie inside `work_area`.
    /// Does not include lines measured through the fallback.
    pub fn clipped_pieces(&self, asset: &AssetGeometry, work_area: &WorkArea) -> Vec<LineString> {
        let parts = decomposer::parts(work_area);
        dispatcher::measured_lines(asset)
            .iter()
            .flat_map(|line| clipper::clipped_pieces(line, &parts, &self.config))
            .collect_vec()
    }
}

/// Length of the portion of `asset` inside `work_area`, using the default [`ClipConfig`]
pub fn compute_asset_length(asset: &AssetGeometry, work_area: &WorkArea) -> Length {
    AssetLengthCalculator::default().length(asset, work_area)
}
