//! CSV-based base rate loader
//!
//! Overrides the built-in table from a file with the columns
//! `bucket_age,banner_life,prudential,protective,pacific_life`.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::carrier::CarrierRates;
use super::table::RateTable;

#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("failed to open rate table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed rate table CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: column `{column}` has invalid value `{value}`")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("rate table has no rows")]
    Empty,

    #[error("bucket ages must be strictly increasing ({previous} is followed by {next})")]
    UnsortedBuckets { previous: u8, next: u8 },
}

const COLUMNS: [&str; 5] = ["bucket_age", "banner_life", "prudential", "protective", "pacific_life"];

/// Load a rate table from a CSV file
pub fn load_rate_table(path: &Path) -> Result<RateTable, RateTableError> {
    let file = File::open(path).map_err(|source| RateTableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_rate_table_from_reader(file)?;
    log::debug!("Loaded {} rate buckets from {}", table.buckets().len(), path.display());
    Ok(table)
}

/// Load a rate table from any CSV reader (header row required)
pub fn load_rate_table_from_reader<R: Read>(reader: R) -> Result<RateTable, RateTableError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut buckets = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        let field = |col: usize| -> Result<u32, RateTableError> {
            let raw = record.get(col).unwrap_or("");
            raw.parse().map_err(|_| RateTableError::InvalidValue {
                row,
                column: COLUMNS[col],
                value: raw.to_string(),
            })
        };

        let age_raw = record.get(0).unwrap_or("");
        let age: u8 = age_raw.parse().map_err(|_| RateTableError::InvalidValue {
            row,
            column: COLUMNS[0],
            value: age_raw.to_string(),
        })?;

        buckets.push((age, CarrierRates::new(field(1)?, field(2)?, field(3)?, field(4)?)));
    }

    RateTable::from_buckets(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "bucket_age,banner_life,prudential,protective,pacific_life\n\
                       30,36,38,39,41\n\
                       35,44,47,48,49\n\
                       40,65,68,69,71\n\
                       45,99,105,107,109\n\
                       50,158,165,168,172\n";

    #[test]
    fn test_load_matches_builtin_table() {
        let table = load_rate_table_from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table, RateTable::default_pricing());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let table = load_rate_table(file.path()).unwrap();
        assert_eq!(table.buckets().len(), 5);
    }

    #[test]
    fn test_missing_file() {
        let result = load_rate_table(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(RateTableError::Io { .. })));
    }

    #[test]
    fn test_invalid_value_reports_row_and_column() {
        let csv = "bucket_age,banner_life,prudential,protective,pacific_life\n30,36,abc,39,41\n";
        match load_rate_table_from_reader(csv.as_bytes()) {
            Err(RateTableError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "prudential");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "bucket_age,banner_life,prudential,protective,pacific_life\n";
        assert!(matches!(load_rate_table_from_reader(csv.as_bytes()), Err(RateTableError::Empty)));
    }

    #[test]
    fn test_unsorted_rows_rejected() {
        let csv = "bucket_age,banner_life,prudential,protective,pacific_life\n40,1,1,1,1\n35,1,1,1,1\n";
        assert!(matches!(
            load_rate_table_from_reader(csv.as_bytes()),
            Err(RateTableError::UnsortedBuckets { previous: 40, next: 35 })
        ));
    }
}
