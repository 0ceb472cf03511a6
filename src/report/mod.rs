//! Formatted terminal output for combine and chart runs.
//!
//! Formatting lives in one place so:
//! - the transform code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use chrono::NaiveDate;

use crate::app::pipeline::ChartRun;
use crate::combine::CombineOutput;
use crate::domain::{ChartRunConfig, CombineConfig, DailyAggregate};

/// Totals for one side of the event date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideTotals {
    pub days: usize,
    pub total_sales: f64,
}

impl SideTotals {
    pub fn daily_average(&self) -> Option<f64> {
        (self.days > 0).then(|| self.total_sales / self.days as f64)
    }
}

/// Split daily aggregates at the event date.
///
/// The event date itself counts as "after".
pub fn split_before_after(points: &[DailyAggregate], event_date: NaiveDate) -> (SideTotals, SideTotals) {
    let mut before = SideTotals { days: 0, total_sales: 0.0 };
    let mut after = SideTotals { days: 0, total_sales: 0.0 };
    for point in points {
        let side = if point.date < event_date { &mut before } else { &mut after };
        side.days += 1;
        side.total_sales += point.total_sales;
    }
    (before, after)
}

/// Format the combine run summary.
pub fn format_combine_summary(config: &CombineConfig, output: &CombineOutput) -> String {
    let mut out = String::new();

    out.push_str("=== morsel - combine ===\n");
    out.push_str(&format!(
        "Inputs: {} (read: {}, skipped: {})\n",
        config.input_paths.len(),
        output.files_read,
        output.skipped.len()
    ));
    out.push_str(&format!("Records written: {}\n", output.records_written));
    out.push_str(&format!("Output: {}\n", config.output_path.display()));

    out
}

/// Format the chart run summary (dataset stats + series bounds + the
/// before/after comparison the event marker exists for).
pub fn format_chart_summary(run: &ChartRun, config: &ChartRunConfig) -> String {
    let points = run.spec.points();
    let mut out = String::new();

    out.push_str("=== morsel - sales chart ===\n");
    out.push_str(&format!("Title: {}\n", run.spec.title));
    out.push_str(&format!("Region: {}\n", config.region.title()));
    out.push_str(&format!(
        "Dataset: n={} | retained={}\n",
        run.stats.n_records, run.stats.n_retained
    ));

    if points.is_empty() {
        out.push_str("No records match this filter; the chart is empty (axes and title only).\n");
        return out;
    }

    let first = &points[0];
    let last = &points[points.len() - 1];
    let peak = points
        .iter()
        .map(|p| p.total_sales)
        .fold(f64::NEG_INFINITY, f64::max);
    out.push_str(&format!(
        "Points: n={} | dates=[{}, {}] | peak={:.2}\n",
        points.len(),
        first.date,
        last.date,
        peak
    ));
    out.push_str(&format!("Event date: {}\n", config.chart.event_date));

    let (before, after) = split_before_after(points, config.chart.event_date);
    out.push_str("\nBefore vs after:\n");
    out.push_str(&format_side("before", before));
    out.push_str(&format_side("after ", after));
    if let Some(verdict) = verdict(before, after) {
        out.push_str(&format!("{verdict}\n"));
    }

    out
}

fn format_side(label: &str, side: SideTotals) -> String {
    match side.daily_average() {
        Some(avg) => format!(
            "- {label}: days={} total={:.2} avg/day={:.2}\n",
            side.days, side.total_sales, avg
        ),
        None => format!("- {label}: no data\n"),
    }
}

fn verdict(before: SideTotals, after: SideTotals) -> Option<&'static str> {
    let b = before.daily_average()?;
    let a = after.daily_average()?;
    Some(if b > a {
        "Daily sales were higher BEFORE the event date."
    } else if a > b {
        "Daily sales were higher AFTER the event date."
    } else {
        "Daily sales were unchanged across the event date."
    })
}
