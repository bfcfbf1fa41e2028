//! CSV Data Writer Module
//! Persists the cleaned DataFrame back to disk.

use polars::prelude::*;
use std::fs::File;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Failed to create output file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Handles CSV persistence of the final dataset.
pub struct DataWriter;

impl DataWriter {
    /// Write a DataFrame to a CSV file with a header row.
    ///
    /// Every column is written in frame order; null cells become empty
    /// fields so rows with missing derived values are preserved.
    pub fn write_csv(df: &mut DataFrame, file_path: &str) -> Result<(), WriterError> {
        let mut file = File::create(file_path)?;
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;

    #[test]
    fn writes_all_columns_including_nulls() {
        let mut df = df!(
            "product" => ["Laptop", "Mouse"],
            "total_compra" => [Some(100.0), None],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        DataWriter::write_csv(&mut df, path.to_str().unwrap()).unwrap();

        let reloaded = DataLoader::load_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(reloaded.height(), 2);
        assert_eq!(reloaded.width(), 2);
        assert_eq!(reloaded.column("total_compra").unwrap().null_count(), 1);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let mut df = df!("a" => [1]).unwrap();
        assert!(DataWriter::write_csv(&mut df, "/nonexistent/dir/out.csv").is_err());
    }
}
