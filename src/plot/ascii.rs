//! ASCII chart preview for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - daily totals: `o`, connected with a `-` line
//! - event-date marker: `|` column
//!
//! The background bands have no useful low-resolution representation, so the
//! preview sticks to the line and the marker; the exported JSON spec carries
//! the full description.

use chrono::NaiveDate;

use crate::chart::ChartSpec;
use crate::domain::DailyAggregate;

/// Render a chart spec onto a `width × height` character grid.
pub fn render_ascii_chart(spec: &ChartSpec, width: usize, height: usize) -> String {
    let points = spec.points();

    let mut out = String::new();
    out.push_str(&format!("{}\n", spec.title));

    let Some((d_min, d_max)) = date_range(points) else {
        out.push_str("(no data for this filter)\n");
        return out;
    };

    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = pad_range(0.0, max_sales(points), 0.05);

    let mut grid = vec![vec![' '; width]; height];

    draw_series(&mut grid, points, d_min, d_max, y_min, y_max);

    // The marker fills whatever the line left blank in its column.
    if let Some(marker) = &spec.marker {
        if let Some(x) = map_date(marker.date, d_min, d_max, width) {
            for row in grid.iter_mut() {
                if row[x] == ' ' {
                    row[x] = '|';
                }
            }
        }
    }

    out.push_str(&format!(
        "Plot: dates=[{d_min}, {d_max}] | sales=[{y_min:.2}, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn date_range(points: &[DailyAggregate]) -> Option<(NaiveDate, NaiveDate)> {
    Some((points.first()?.date, points.last()?.date))
}

fn max_sales(points: &[DailyAggregate]) -> f64 {
    points
        .iter()
        .map(|p| p.total_sales)
        .fold(0.0, f64::max)
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_date(date: NaiveDate, d_min: NaiveDate, d_max: NaiveDate, width: usize) -> Option<usize> {
    if date < d_min || date > d_max {
        return None;
    }
    let span = (d_max - d_min).num_days();
    if span <= 0 {
        return Some(0);
    }
    let u = (date - d_min).num_days() as f64 / span as f64;
    Some((u * (width as f64 - 1.0)).round() as usize)
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_series(
    grid: &mut [Vec<char>],
    points: &[DailyAggregate],
    d_min: NaiveDate,
    d_max: NaiveDate,
    y_min: f64,
    y_max: f64,
) {
    let height = grid.len();
    let width = grid[0].len();

    let cells: Vec<(usize, usize)> = points
        .iter()
        .filter_map(|p| {
            let x = map_date(p.date, d_min, d_max, width)?;
            Some((x, map_y(p.total_sales, y_min, y_max, height)))
        })
        .collect();

    // Connecting segments first (they only fill blank cells), then the point
    // markers on top.
    for pair in cells.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line(grid, x0, y0, x1, y1, '-');
    }
    for &(x, y) in &cells {
        grid[y][x] = 'o';
    }
}

/// Integer line drawing (Bresenham-ish); only writes to blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
