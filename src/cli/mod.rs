//! Command-line parsing for the sales dataset combiner and chart builder.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the transform code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::Region;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "morsel", version, about = "Retail sales dataset combiner + chart builder")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge raw per-source transaction exports into one normalized dataset.
    Combine(CombineArgs),
    /// Build the sales-over-time chart for a region filter, print a summary,
    /// and optionally preview/export it.
    Chart(ChartArgs),
    /// Re-render a previously exported chart JSON as an ASCII preview.
    Plot(PlotArgs),
}

/// Options for the combiner.
#[derive(Debug, Parser, Clone)]
pub struct CombineArgs {
    /// Raw transaction CSVs, merged in the given order.
    #[arg(
        long = "input",
        value_name = "CSV",
        num_args = 1..,
        default_values = [
            "data/daily_sales_data_0.csv",
            "data/daily_sales_data_1.csv",
            "data/daily_sales_data_2.csv",
        ]
    )]
    pub inputs: Vec<PathBuf>,

    /// Output path for the combined dataset (overwritten if present).
    #[arg(short = 'o', long, default_value = "combined_sales_data.csv")]
    pub output: PathBuf,
}

/// Options for building a chart.
#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// Combined dataset produced by `morsel combine`.
    #[arg(long, default_value = "combined_sales_data.csv")]
    pub data: PathBuf,

    /// Region filter.
    #[arg(short = 'r', long, value_enum, ignore_case = true, default_value_t = Region::All)]
    pub region: Region,

    /// Override the marked event (price change) date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub event_date: Option<NaiveDate>,

    /// Render an ASCII preview in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal preview.
    #[arg(long)]
    pub no_plot: bool,

    /// Preview width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Preview height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the chart spec to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for previewing a saved chart spec.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Chart JSON produced by `morsel chart --export`.
    #[arg(long, value_name = "JSON")]
    pub spec: PathBuf,

    /// Preview width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Preview height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_defaults_to_the_three_daily_exports() {
        let cli = Cli::try_parse_from(["morsel", "combine"]).unwrap();
        let Command::Combine(args) = cli.command else {
            panic!("expected combine subcommand");
        };
        assert_eq!(args.inputs.len(), 3);
        assert_eq!(args.inputs[0], PathBuf::from("data/daily_sales_data_0.csv"));
        assert_eq!(args.output, PathBuf::from("combined_sales_data.csv"));
    }

    #[test]
    fn chart_region_defaults_to_all_and_ignores_case() {
        let cli = Cli::try_parse_from(["morsel", "chart"]).unwrap();
        let Command::Chart(args) = cli.command else {
            panic!("expected chart subcommand");
        };
        assert_eq!(args.region, Region::All);

        let cli = Cli::try_parse_from(["morsel", "chart", "-r", "west"]).unwrap();
        let Command::Chart(args) = cli.command else {
            panic!("expected chart subcommand");
        };
        assert_eq!(args.region, Region::West);
    }

    #[test]
    fn chart_rejects_unknown_regions() {
        assert!(Cli::try_parse_from(["morsel", "chart", "-r", "Central"]).is_err());
    }

    #[test]
    fn event_date_override_parses_iso() {
        let cli = Cli::try_parse_from(["morsel", "chart", "--event-date", "2021-02-01"]).unwrap();
        let Command::Chart(args) = cli.command else {
            panic!("expected chart subcommand");
        };
        assert_eq!(args.event_date, Some(NaiveDate::from_ymd_opt(2021, 2, 1).unwrap()));
    }
}
