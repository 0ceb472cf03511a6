//! Combined dataset read/write.
//!
//! `Sales,Date,Region` is the contract between the combiner and the chart
//! builder: one header row, sales as a plain decimal (no currency symbol),
//! dates in ISO form, region strings carried through as sourced.

use std::fs::File;
use std::path::Path;

use crate::domain::NormalizedRecord;
use crate::error::AppError;

const DATASET_COLUMNS: [&str; 3] = ["Sales", "Date", "Region"];

/// Write the combined dataset, overwriting any existing file.
///
/// The header row is always written, even for an empty record set.
pub fn write_dataset(path: &Path, records: &[NormalizedRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create dataset '{}': {e}", path.display())))?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer
        .write_record(DATASET_COLUMNS)
        .map_err(|e| AppError::new(2, format!("Failed to write dataset header: {e}")))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| AppError::new(2, format!("Failed to write dataset row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to write dataset '{}': {e}", path.display())))?;
    Ok(())
}

/// Load a combined dataset produced by [`write_dataset`].
pub fn read_dataset(path: &Path) -> Result<Vec<NormalizedRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(3, format!("Failed to open dataset '{}': {e}", path.display())))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<NormalizedRecord>().enumerate() {
        let line = idx + 2;
        let record = result
            .map_err(|e| AppError::new(3, format!("{}:{line}: invalid dataset row: {e}", path.display())))?;
        if !record.sales.is_finite() {
            return Err(AppError::new(
                3,
                format!("{}:{line}: non-finite sales value", path.display()),
            ));
        }
        records.push(record);
    }
    Ok(records)
}
