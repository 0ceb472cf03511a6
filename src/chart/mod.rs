//! Chart construction: filter → aggregate → spec.
//!
//! [`render`] is a pure function of `(dataset, region, config)`: no hidden
//! state and no clock reads, so identical inputs always produce an identical
//! spec. The only control flow beyond filtering is the single empty vs
//! non-empty split at the top.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{ChartConfig, DailyAggregate, NormalizedRecord, Region};

pub mod spec;

pub use spec::{Annotation, Band, ChartSpec, LineTrace, MarkerLine};

/// Build the chart spec for one region-filter state.
pub fn render(dataset: &[NormalizedRecord], region: Region, config: &ChartConfig) -> ChartSpec {
    let aggregates = aggregate_daily(dataset, region);
    let title = format!("{} - {}", config.base_title, region.title());

    match series_bounds(&aggregates) {
        Some(bounds) => populated_spec(title, aggregates, bounds, config),
        None => degenerate_spec(title, config),
    }
}

/// Sum sales per distinct date across records matching the region filter.
///
/// Output dates are strictly increasing.
pub fn aggregate_daily(dataset: &[NormalizedRecord], region: Region) -> Vec<DailyAggregate> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in dataset {
        if region.matches(&record.region) {
            *by_date.entry(record.date).or_insert(0.0) += record.sales;
        }
    }
    by_date
        .into_iter()
        .map(|(date, total_sales)| DailyAggregate { date, total_sales })
        .collect()
}

struct SeriesBounds {
    min_date: NaiveDate,
    max_date: NaiveDate,
    max_sales: f64,
}

fn series_bounds(aggregates: &[DailyAggregate]) -> Option<SeriesBounds> {
    let first = aggregates.first()?;
    let last = aggregates.last()?;
    let max_sales = aggregates
        .iter()
        .map(|a| a.total_sales)
        .fold(f64::NEG_INFINITY, f64::max);
    Some(SeriesBounds {
        min_date: first.date,
        max_date: last.date,
        max_sales,
    })
}

fn populated_spec(
    title: String,
    aggregates: Vec<DailyAggregate>,
    bounds: SeriesBounds,
    config: &ChartConfig,
) -> ChartSpec {
    // Keep the shading visible even when every aggregate is zero.
    let band_top = if bounds.max_sales > 0.0 {
        bounds.max_sales
    } else {
        config.min_band_height
    };

    let bands = [
        Band {
            start: bounds.min_date,
            end: config.event_date,
            y0: 0.0,
            y1: band_top,
            color: config.before_color.clone(),
        },
        Band {
            start: config.event_date,
            end: bounds.max_date,
            y0: 0.0,
            y1: band_top,
            color: config.after_color.clone(),
        },
    ];

    // The marker and its label only make sense against a non-zero series.
    let marker = (bounds.max_sales > 0.0).then(|| MarkerLine {
        date: config.event_date,
        y0: 0.0,
        y1: bounds.max_sales,
        color: config.marker_color.clone(),
    });
    let annotation = (bounds.max_sales > 0.0).then(|| Annotation {
        date: config.event_date,
        y: bounds.max_sales * 0.9,
        text: format!("{} ({})", config.event_label, config.event_date),
    });

    ChartSpec {
        title,
        x_label: config.x_label.clone(),
        y_label: config.y_label.clone(),
        bands,
        line: Some(LineTrace {
            name: config.series_name.clone(),
            points: aggregates,
            color: config.line_color.clone(),
            width: config.line_width,
        }),
        marker,
        annotation,
    }
}

fn degenerate_spec(title: String, config: &ChartConfig) -> ChartSpec {
    // Both bands collapse to a zero-area rectangle at the event date; the
    // chart is just axes and a title.
    let collapsed = |color: &str| Band {
        start: config.event_date,
        end: config.event_date,
        y0: 0.0,
        y1: 0.0,
        color: color.to_string(),
    };

    ChartSpec {
        title,
        x_label: config.x_label.clone(),
        y_label: config.y_label.clone(),
        bands: [collapsed(&config.before_color), collapsed(&config.after_color)],
        line: None,
        marker: None,
        annotation: None,
    }
}
