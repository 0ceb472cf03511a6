//! The combiner: merge raw per-source exports into one normalized dataset.
//!
//! Batch semantics: every input is parsed before the output file is touched,
//! so a malformed row can never leave a partial or corrupt dataset behind.
//! A missing input file is a warning, not an error: it is skipped and
//! reported back to the caller in [`CombineOutput::skipped`].

use std::path::PathBuf;

use crate::domain::CombineConfig;
use crate::error::AppError;
use crate::io;

/// Outcome of one combine run.
#[derive(Debug, Clone)]
pub struct CombineOutput {
    /// Total records written to the output dataset.
    pub records_written: usize,
    /// Input files that were found and parsed.
    pub files_read: usize,
    /// Input files that were absent and skipped.
    pub skipped: Vec<PathBuf>,
}

/// Merge `config.input_paths` (in the given order) into `config.output_path`.
///
/// Records keep input-file order and within-file row order.
pub fn combine(config: &CombineConfig) -> Result<CombineOutput, AppError> {
    let mut records = Vec::new();
    let mut files_read = 0usize;
    let mut skipped = Vec::new();

    for path in &config.input_paths {
        if !path.exists() {
            skipped.push(path.clone());
            continue;
        }
        records.extend(io::ingest::read_transactions(path)?);
        files_read += 1;
    }

    io::dataset::write_dataset(&config.output_path, &records)?;

    Ok(CombineOutput {
        records_written: records.len(),
        files_read,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_raw(dir: &Path, name: &str, rows: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("product,price,quantity,date,region\n{rows}")).unwrap();
        path
    }

    #[test]
    fn combines_and_computes_sales_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_raw(
            dir.path(),
            "a.csv",
            "pink morsel,$3.00,5,2021-01-10,north\npink morsel,$3.00,2,2021-01-11,south\n",
        );
        let b = write_raw(dir.path(), "b.csv", "pink morsel,$1.50,4,2021-01-09,east\n");
        let out = dir.path().join("combined.csv");

        let output = combine(&CombineConfig {
            input_paths: vec![a, b],
            output_path: out.clone(),
        })
        .unwrap();

        assert_eq!(output.records_written, 3);
        assert_eq!(output.files_read, 2);
        assert!(output.skipped.is_empty());

        // Input-file order then row order, never re-sorted.
        let text = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Sales,Date,Region",
                "15.0,2021-01-10,north",
                "6.0,2021-01-11,south",
                "6.0,2021-01-09,east",
            ]
        );
    }

    #[test]
    fn missing_input_is_skipped_but_the_rest_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let real = write_raw(dir.path(), "real.csv", "pink morsel,$2.00,2,2021-01-10,west\n");
        let missing = dir.path().join("missing.csv");
        let out = dir.path().join("combined.csv");

        let output = combine(&CombineConfig {
            input_paths: vec![real, missing.clone()],
            output_path: out.clone(),
        })
        .unwrap();

        assert_eq!(output.records_written, 1);
        assert_eq!(output.files_read, 1);
        assert_eq!(output.skipped, vec![missing]);
        assert!(out.exists());
    }

    #[test]
    fn malformed_price_aborts_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_raw(dir.path(), "good.csv", "pink morsel,$2.00,2,2021-01-10,west\n");
        let bad = write_raw(dir.path(), "bad.csv", "pink morsel,N/A,2,2021-01-11,west\n");
        let out = dir.path().join("combined.csv");

        let err = combine(&CombineConfig {
            input_paths: vec![good, bad],
            output_path: out.clone(),
        })
        .unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert!(format!("{err}").contains("Invalid price 'N/A'"));
        assert!(!out.exists());
    }

    #[test]
    fn repeated_runs_produce_byte_identical_output() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_raw(
            dir.path(),
            "a.csv",
            "pink morsel,$3.00,5,2021-01-10,north\npink morsel,$0.25,8,2021-01-12,east\n",
        );
        let out = dir.path().join("combined.csv");
        let config = CombineConfig {
            input_paths: vec![a],
            output_path: out.clone(),
        };

        combine(&config).unwrap();
        let first = fs::read(&out).unwrap();
        combine(&config).unwrap();
        let second = fs::read(&out).unwrap();
        assert_eq!(first, second);
    }
}
