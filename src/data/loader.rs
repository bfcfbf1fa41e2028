//! CSV Data Loader Module
//! Handles CSV file loading using Polars.

use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Handles CSV file loading with Polars for high performance.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file using Polars.
    ///
    /// The header row defines column names and the schema is inferred from
    /// the data. Non-UTF8 byte sequences (e.g. Latin-1 exports) are decoded
    /// lossily rather than failing ingestion.
    pub fn load_csv(file_path: &str) -> Result<DataFrame, LoaderError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .map_parse_options(|opts| opts.with_encoding(CsvEncoding::LossyUtf8))
            .try_into_reader_with_file_path(Some(PathBuf::from(file_path)))?
            .finish()?;

        Ok(df)
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names().iter().map(|s| s.to_string()).collect()
    }
}
