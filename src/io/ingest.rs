//! Raw transaction CSV ingest.
//!
//! This module turns a per-source daily sales export into normalized revenue
//! records (`sales = price × quantity`, computed once here and never
//! recomputed downstream).
//!
//! Parsing is strict: the combiner is a one-shot batch job with no
//! partial-success contract, so the first malformed `price`, `quantity`, or
//! `date` aborts the whole run with a row-level error message. Extra columns
//! (product names, store ids, ...) are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::NormalizedRecord;
use crate::error::AppError;

/// Columns every raw export must provide (case-sensitive, as sourced).
const REQUIRED_COLUMNS: [&str; 4] = ["price", "quantity", "date", "region"];

/// Read one raw transaction export and normalize every row.
pub fn read_transactions(path: &Path) -> Result<Vec<NormalizedRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open input CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers in '{}': {e}", path.display())))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map, path)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;

        let record = result
            .map_err(|e| AppError::new(2, format!("{}:{line}: CSV parse error: {e}", path.display())))?;
        let normalized = parse_row(&record, &header_map)
            .map_err(|msg| AppError::new(2, format!("{}:{line}: {msg}", path.display())))?;
        records.push(normalized);
    }

    Ok(records)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (clean_header_name(name), idx))
        .collect()
}

fn clean_header_name(name: &str) -> String {
    // Spreadsheet tools sometimes emit UTF-8 CSVs with a BOM glued onto the
    // first header (e.g. "﻿price"). If we don't strip it, schema validation
    // will incorrectly report a missing column.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn ensure_required_columns_exist(
    header_map: &HashMap<String, usize>,
    path: &Path,
) -> Result<(), AppError> {
    for column in REQUIRED_COLUMNS {
        if !header_map.contains_key(column) {
            return Err(AppError::new(
                2,
                format!("'{}': missing required column `{column}`", path.display()),
            ));
        }
    }
    Ok(())
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<NormalizedRecord, String> {
    let price = parse_price(get_required(record, header_map, "price")?)?;
    let quantity = parse_quantity(get_required(record, header_map, "quantity")?)?;
    let date = parse_date(get_required(record, header_map, "date")?)?;
    let region = get_required(record, header_map, "region")?.to_string();

    Ok(NormalizedRecord {
        sales: price * quantity as f64,
        date,
        region,
    })
}

/// Parse a currency string like `"$3.00"` into its decimal amount.
fn parse_price(s: &str) -> Result<f64, String> {
    let amount = s.strip_prefix('$').unwrap_or(s);
    let value = amount
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid price '{s}': expected a currency amount like \"$3.00\"."))?;
    Ok(value)
}

fn parse_quantity(s: &str) -> Result<i64, String> {
    s.parse::<i64>()
        .map_err(|_| format!("Invalid quantity '{s}': expected an integer."))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    // The exports we've seen use ISO dates, but spreadsheet round-trips often
    // rewrite them. We accept a small fixed set of formats to reduce friction
    // while keeping parsing deterministic.
    const FMTS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];
    for fmt in FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(format!("Invalid date '{s}'. Expected one of: YYYY-MM-DD, DD/MM/YYYY, YYYY/MM/DD."))
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}
