//! Chart-spec JSON read/write.
//!
//! The JSON file is the portable representation of one rendered chart state:
//! everything an external presentation layer needs to draw it (points, bands,
//! marker, title). The schema is defined by `chart::ChartSpec`.

use std::fs::File;
use std::path::Path;

use crate::chart::ChartSpec;
use crate::error::AppError;

/// Write a chart spec as pretty-printed JSON.
pub fn write_chart_json(path: &Path, spec: &ChartSpec) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create chart JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, spec)
        .map_err(|e| AppError::new(2, format!("Failed to write chart JSON: {e}")))?;
    Ok(())
}

/// Read a chart spec JSON file.
pub fn read_chart_json(path: &Path) -> Result<ChartSpec, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open chart JSON '{}': {e}", path.display())))?;
    let spec: ChartSpec =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid chart JSON: {e}")))?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart;
    use crate::domain::{ChartConfig, NormalizedRecord, Region};
    use chrono::NaiveDate;

    #[test]
    fn chart_spec_round_trips_through_json() {
        let dataset = vec![
            NormalizedRecord {
                sales: 12.0,
                date: NaiveDate::from_ymd_opt(2021, 1, 10).unwrap(),
                region: "north".to_string(),
            },
            NormalizedRecord {
                sales: 8.0,
                date: NaiveDate::from_ymd_opt(2021, 1, 20).unwrap(),
                region: "south".to_string(),
            },
        ];
        let spec = chart::render(&dataset, Region::All, &ChartConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        write_chart_json(&path, &spec).unwrap();
        let loaded = read_chart_json(&path).unwrap();
        assert_eq!(loaded, spec);
    }
}
