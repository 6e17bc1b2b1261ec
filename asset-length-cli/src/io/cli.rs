use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Measures the length of every asset of a job that lies inside the job's work area
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON job with a `workArea` (Polygon or MultiPolygon) and `assets`,
    /// each an `id`, a `geometry` and optional `roadSections`
    #[arg(short, long, value_name = "JOB_FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `lengths_<job>.json` and, if enabled, `lengths_<job>.svg`.
    /// Created if missing.
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    /// JSON `AlcConfig`, defaults are used if omitted
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
    /// One of off, error, warn, info, debug or trace
    #[arg(short, long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
