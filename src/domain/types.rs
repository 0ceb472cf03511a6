//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while combining and aggregating
//! - written to the combined dataset CSV and the chart-spec JSON
//! - reloaded later for previewing a saved chart

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Region filter accepted by the chart builder.
///
/// `All` disables filtering; the other values retain only records whose
/// region matches case-insensitively. Anything outside these five values is a
/// caller contract violation and is rejected before the render path
/// ([`Region::parse_filter`], or clap's value enum on the CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Region {
    #[value(name = "All")]
    All,
    #[value(name = "North")]
    North,
    #[value(name = "East")]
    East,
    #[value(name = "South")]
    South,
    #[value(name = "West")]
    West,
}

impl Region {
    pub const ALL_FILTERS: [Region; 5] = [
        Region::All,
        Region::North,
        Region::East,
        Region::South,
        Region::West,
    ];

    /// Parse a filter string, rejecting anything outside the five values.
    pub fn parse_filter(s: &str) -> Result<Region, AppError> {
        let trimmed = s.trim();
        for region in Region::ALL_FILTERS {
            if trimmed.eq_ignore_ascii_case(region.label()) {
                return Ok(region);
            }
        }
        Err(AppError::new(
            2,
            format!("Unknown region filter '{s}'. Expected one of: All, North, East, South, West."),
        ))
    }

    /// The literal filter value.
    pub fn label(self) -> &'static str {
        match self {
            Region::All => "All",
            Region::North => "North",
            Region::East => "East",
            Region::South => "South",
            Region::West => "West",
        }
    }

    /// Human-readable form used in chart titles.
    pub fn title(self) -> &'static str {
        match self {
            Region::All => "All Regions",
            other => other.label(),
        }
    }

    /// Does a record with this region string pass the filter?
    pub fn matches(self, region: &str) -> bool {
        match self {
            Region::All => true,
            other => region.trim().eq_ignore_ascii_case(other.label()),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized revenue record.
///
/// `sales` is `price × quantity`, computed once by the combiner and never
/// recomputed. The serde renames pin the combined dataset's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Region")]
    pub region: String,
}

/// Sales summed across all retained records sharing one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub total_sales: f64,
}

/// A combine run's configuration (derived from CLI flags plus defaults).
#[derive(Debug, Clone)]
pub struct CombineConfig {
    /// Raw transaction exports, merged in this order.
    pub input_paths: Vec<PathBuf>,
    /// Combined dataset destination (overwritten if present).
    pub output_path: PathBuf,
}

/// Fixed chart constants: the event date and the visual styling.
///
/// The event date splits the "before" and "after" periods. It is configuration,
/// not derived from data, and is injected into the render rather than read from
/// ambient state.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub event_date: NaiveDate,
    /// Short name for the event, used in the marker annotation.
    pub event_label: String,
    pub base_title: String,
    pub series_name: String,
    pub x_label: String,
    pub y_label: String,
    /// Band height used when every aggregated value is zero, so the shading
    /// stays visible.
    pub min_band_height: f64,
    pub before_color: String,
    pub after_color: String,
    pub line_color: String,
    pub line_width: f64,
    pub marker_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            event_date: NaiveDate::from_ymd_opt(2021, 1, 15).expect("valid date"),
            event_label: "Price Increase".to_string(),
            base_title: "Pink Morsel Sales Over Time".to_string(),
            series_name: "Pink Morsel Sales".to_string(),
            x_label: "Date".to_string(),
            y_label: "Sales ($)".to_string(),
            min_band_height: 1000.0,
            before_color: "rgba(144, 238, 144, 0.1)".to_string(),
            after_color: "rgba(255, 182, 193, 0.1)".to_string(),
            line_color: "#2C3E50".to_string(),
            line_width: 2.5,
            marker_color: "#E74C3C".to_string(),
        }
    }
}

/// A full chart run's configuration as understood by the pipeline.
#[derive(Debug, Clone)]
pub struct ChartRunConfig {
    /// Combined dataset produced by the combiner.
    pub data_path: PathBuf,
    pub region: Region,
    pub chart: ChartConfig,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// Export the chart spec to JSON.
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!(Region::parse_filter("west").unwrap(), Region::West);
        assert_eq!(Region::parse_filter(" NORTH ").unwrap(), Region::North);
        assert_eq!(Region::parse_filter("All").unwrap(), Region::All);
    }

    #[test]
    fn unknown_filter_is_rejected_at_the_boundary() {
        let err = Region::parse_filter("Central").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(format!("{err}").contains("Unknown region filter 'Central'"));
    }

    #[test]
    fn all_matches_every_region_string() {
        assert!(Region::All.matches("north"));
        assert!(Region::All.matches("anything"));
    }

    #[test]
    fn specific_region_matches_case_insensitively() {
        assert!(Region::West.matches("west"));
        assert!(Region::West.matches("WEST"));
        assert!(Region::West.matches(" West "));
        assert!(!Region::West.matches("east"));
    }

    #[test]
    fn titles_for_chart_headers() {
        assert_eq!(Region::All.title(), "All Regions");
        assert_eq!(Region::South.title(), "South");
    }
}
