use anyhow::{Context, Result};
use asset_length::AssetLengthCalculator;
use asset_length::entities::{AssetGeometry, Length, WorkArea};
use asset_length::io::export::export_report;
use asset_length::io::ext_repr::{ExtAsset, ExtGeometry, ExtLengthReport};
use asset_length::io::import::{import_asset, import_work_area};
use itertools::{Itertools, izip};
use log::info;
use serde::{Deserialize, Serialize};

use crate::EPOCH;
use crate::config::AlcConfig;

/// External representation of a batch measurement: a single work area and the assets to measure inside it
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtJob {
    pub work_area: ExtGeometry,
    pub assets: Vec<ExtAsset>,
}

/// A job after measuring. `ids`, `assets` and `lengths` are index-aligned.
#[derive(Clone, Debug)]
pub struct MeasuredJob {
    pub work_area: WorkArea,
    pub ids: Vec<String>,
    pub assets: Vec<AssetGeometry>,
    pub lengths: Vec<Length>,
}

impl MeasuredJob {
    pub fn total(&self) -> Length {
        self.lengths.iter().copied().sum()
    }

    pub fn report(&self) -> ExtLengthReport {
        export_report(izip!(
            self.ids.iter().map(String::as_str),
            &self.assets,
            self.lengths.iter().copied()
        ))
    }
}

pub fn measure_job(
    ext_job: &ExtJob,
    calculator: &AssetLengthCalculator,
    parallel: bool,
) -> Result<MeasuredJob> {
    let work_area = import_work_area(&ext_job.work_area).context("work area")?;
    let assets = ext_job
        .assets
        .iter()
        .map(|a| import_asset(a).with_context(|| format!("asset {}", a.id)))
        .collect::<Result<Vec<_>>>()?;
    let ids = ext_job.assets.iter().map(|a| a.id.clone()).collect_vec();

    let start = EPOCH.elapsed();
    let lengths = match parallel {
        true => calculator.lengths(&assets, &work_area),
        false => calculator.lengths_sequential(&assets, &work_area),
    };
    let job = MeasuredJob {
        work_area,
        ids,
        assets,
        lengths,
    };

    info!(
        "[MEASURE] measured {} assets in {:.3}ms, total: {}",
        job.ids.len(),
        (EPOCH.elapsed() - start).as_secs_f64() * 1000.0,
        job.total()
    );
    Ok(job)
}

/// Measures a job with the given configuration
pub fn measure_job_with_config(ext_job: &ExtJob, config: &AlcConfig) -> Result<MeasuredJob> {
    let calculator = AssetLengthCalculator::new(config.clip_config);
    measure_job(ext_job, &calculator, config.parallel)
}
