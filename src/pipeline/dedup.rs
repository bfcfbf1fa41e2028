//! Deduplicator Stage
//! Removes exact full-row duplicate records.

use polars::prelude::*;

use super::{PipelineError, Stage};

/// Drops records identical across every column, keeping the first
/// occurrence. Nulls compare equal, so two rows missing the same fields
/// still count as duplicates.
pub struct Deduplicator;

impl Stage for Deduplicator {
    fn name(&self) -> &'static str {
        "dedup"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError> {
        if df.height() == 0 {
            return Ok(df);
        }

        let deduped = df
            .lazy()
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;
        Ok(deduped)
    }
}
