use std::fs;

use alc::config::AlcConfig;
use alc::io;
use alc::io::cli::Cli;
use alc::io::lengths_to_svg::lengths_to_svg;
use alc::io::output::LengthOutput;
use alc::job::{ExtJob, measure_job};
use anyhow::{Context, Result};
use asset_length::AssetLengthCalculator;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: AlcConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            AlcConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("invalid config file")?,
    };

    info!("[MAIN] Successfully parsed AlcConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    fs::create_dir_all(&args.output_folder).with_context(|| {
        format!("could not create output folder: {:?}", args.output_folder)
    })?;

    let ext_job: ExtJob = io::read_json(&args.input_file)?;
    let calculator = AssetLengthCalculator::new(config.clip_config);
    let job = measure_job(&ext_job, &calculator, config.parallel)?;

    {
        let output = LengthOutput {
            report: job.report(),
            config,
        };
        let output_path = args.output_folder.join(format!("lengths_{input_stem}.json"));
        io::write_json(&output, &output_path)?;
    }

    if let Some(svg_draw_options) = config.svg_draw_options {
        let svg = lengths_to_svg(&job, &calculator, svg_draw_options, input_stem);
        let svg_path = args.output_folder.join(format!("lengths_{input_stem}.svg"));
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
