//! Dataset Inspector Module
//! Computes the pre-pipeline profile: shape, null counts, duplicate rows.

use polars::prelude::*;
use serde::Serialize;

/// Null count for a single column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnNulls {
    pub column: String,
    pub null_count: usize,
}

/// Snapshot of a dataset before cleaning.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: usize,
    /// Per-column null counts, highest first.
    pub null_counts: Vec<ColumnNulls>,
    /// Fully identical row pairs counted as rows beyond the first occurrence.
    pub duplicate_rows: usize,
}

/// Computes inspection statistics over a raw DataFrame.
pub struct DataInspector;

impl DataInspector {
    pub fn profile(df: &DataFrame) -> PolarsResult<DatasetProfile> {
        let mut null_counts: Vec<ColumnNulls> = df
            .get_columns()
            .iter()
            .map(|c| ColumnNulls {
                column: c.name().to_string(),
                null_count: c.null_count(),
            })
            .collect();
        null_counts.sort_by(|a, b| b.null_count.cmp(&a.null_count));

        Ok(DatasetProfile {
            rows: df.height(),
            columns: df.width(),
            null_counts,
            duplicate_rows: Self::duplicate_count(df)?,
        })
    }

    /// Number of rows that are exact duplicates of an earlier row.
    fn duplicate_count(df: &DataFrame) -> PolarsResult<usize> {
        if df.height() == 0 {
            return Ok(0);
        }
        let unique = df
            .clone()
            .lazy()
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;
        Ok(df.height() - unique.height())
    }
}
