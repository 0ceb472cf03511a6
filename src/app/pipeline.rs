//! Shared chart pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load dataset -> filter/aggregate/render -> summarize
//!
//! The dataset is loaded once here and handed by reference into the pure
//! `chart::render`; nothing downstream re-reads the filesystem, and the same
//! loaded dataset can safely serve many filter changes.

use crate::chart::{self, ChartSpec};
use crate::domain::{ChartRunConfig, NormalizedRecord};
use crate::error::AppError;
use crate::io;

/// All computed outputs of a single `morsel chart` run.
#[derive(Debug, Clone)]
pub struct ChartRun {
    pub spec: ChartSpec,
    pub stats: DatasetStats,
}

/// Summary of the loaded dataset and the filter's effect on it.
#[derive(Debug, Clone, Copy)]
pub struct DatasetStats {
    pub n_records: usize,
    pub n_retained: usize,
}

/// Load the dataset and execute the chart pipeline.
pub fn run_chart(config: &ChartRunConfig) -> Result<ChartRun, AppError> {
    let dataset = io::dataset::read_dataset(&config.data_path)?;
    Ok(run_chart_with_dataset(&dataset, config))
}

/// Execute the chart pipeline against a pre-loaded dataset.
///
/// This is the entry point for a long-lived front-end that answers many
/// filter-change events against one read-only dataset.
pub fn run_chart_with_dataset(dataset: &[NormalizedRecord], config: &ChartRunConfig) -> ChartRun {
    let stats = DatasetStats {
        n_records: dataset.len(),
        n_retained: dataset
            .iter()
            .filter(|r| config.region.matches(&r.region))
            .count(),
    };
    let spec = chart::render(dataset, config.region, &config.chart);

    ChartRun { spec, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChartConfig, Region};

    fn record(sales: f64, date: &str, region: &str) -> NormalizedRecord {
        NormalizedRecord {
            sales,
            date: date.parse().unwrap(),
            region: region.to_string(),
        }
    }

    fn run_config(region: Region, data_path: std::path::PathBuf) -> ChartRunConfig {
        ChartRunConfig {
            data_path,
            region,
            chart: ChartConfig::default(),
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export: None,
        }
    }

    #[test]
    fn stats_track_the_filter() {
        let dataset = vec![
            record(5.0, "2021-01-10", "north"),
            record(3.0, "2021-01-11", "south"),
            record(2.0, "2021-01-12", "north"),
        ];
        let run = run_chart_with_dataset(&dataset, &run_config(Region::North, "unused".into()));

        assert_eq!(run.stats.n_records, 3);
        assert_eq!(run.stats.n_retained, 2);
        assert_eq!(run.spec.points().len(), 2);
    }

    #[test]
    fn run_chart_loads_from_the_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combined.csv");
        io::dataset::write_dataset(
            &path,
            &[record(15.0, "2021-01-10", "north"), record(6.0, "2021-01-20", "south")],
        )
        .unwrap();

        let run = run_chart(&run_config(Region::All, path)).unwrap();
        assert_eq!(run.stats.n_records, 2);
        assert_eq!(run.spec.points().len(), 2);
    }

    #[test]
    fn missing_dataset_is_a_dataset_error() {
        let err = run_chart(&run_config(Region::All, "does-not-exist.csv".into())).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
