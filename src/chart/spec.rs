//! Chart specification types.
//!
//! A `ChartSpec` is a display-only description of one chart state. The core
//! produces it; whatever presentation layer sits on top just renders it. It
//! is regenerated whole on every filter change, never mutated incrementally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DailyAggregate;

/// Fully-resolved chart description for one region-filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// "Before" and "after" background shading, in that order.
    pub bands: [Band; 2],
    /// Connected line over the daily aggregates. Absent when the filtered
    /// dataset is empty.
    pub line: Option<LineTrace>,
    /// Vertical event-date marker. Absent when there is nothing to mark
    /// (empty dataset, or every aggregate is zero).
    pub marker: Option<MarkerLine>,
    /// Label near the top of the marker line.
    pub annotation: Option<Annotation>,
}

impl ChartSpec {
    /// The ordered daily points, or an empty slice for a degenerate chart.
    pub fn points(&self) -> &[DailyAggregate] {
        self.line.as_ref().map(|l| l.points.as_slice()).unwrap_or(&[])
    }
}

/// A shaded background rectangle spanning a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub y0: f64,
    pub y1: f64,
    /// CSS-style fill color (low alpha so the line stays readable).
    pub color: String,
}

/// The revenue line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrace {
    pub name: String,
    /// Ordered `(date, total_sales)` points, dates strictly increasing.
    pub points: Vec<DailyAggregate>,
    pub color: String,
    pub width: f64,
}

/// A dashed vertical line at the event date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub date: NaiveDate,
    pub y0: f64,
    pub y1: f64,
    pub color: String,
}

/// Text pinned near a chart location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub date: NaiveDate,
    pub y: f64,
    pub text: String,
}
