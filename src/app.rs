//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the combiner or the chart pipeline
//! - prints warnings and reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{ChartArgs, CombineArgs, Command, PlotArgs};
use crate::domain::{ChartConfig, ChartRunConfig, CombineConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `morsel` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Combine(args) => handle_combine(args),
        Command::Chart(args) => handle_chart(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_combine(args: CombineArgs) -> Result<(), AppError> {
    let config = combine_config_from_args(&args);
    let output = crate::combine::combine(&config)?;

    for path in &output.skipped {
        eprintln!("warning: input file '{}' not found, skipping", path.display());
    }
    println!("{}", crate::report::format_combine_summary(&config, &output));
    Ok(())
}

fn handle_chart(args: ChartArgs) -> Result<(), AppError> {
    let config = chart_run_config_from_args(&args);
    let run = pipeline::run_chart(&config)?;

    println!("{}", crate::report::format_chart_summary(&run, &config));

    if config.plot {
        println!(
            "{}",
            crate::plot::render_ascii_chart(&run.spec, config.plot_width, config.plot_height)
        );
    }

    if let Some(path) = &config.export {
        crate::io::export::write_chart_json(path, &run.spec)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let spec = crate::io::export::read_chart_json(&args.spec)?;
    println!("{}", crate::plot::render_ascii_chart(&spec, args.width, args.height));
    Ok(())
}

pub fn combine_config_from_args(args: &CombineArgs) -> CombineConfig {
    CombineConfig {
        input_paths: args.inputs.clone(),
        output_path: args.output.clone(),
    }
}

pub fn chart_run_config_from_args(args: &ChartArgs) -> ChartRunConfig {
    let mut chart = ChartConfig::default();
    if let Some(date) = args.event_date {
        chart.event_date = date;
    }

    ChartRunConfig {
        data_path: args.data.clone(),
        region: args.region,
        chart,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
    }
}
