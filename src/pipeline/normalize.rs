//! Text Normalizer Stage
//! Trims surrounding whitespace in every textual column.

use polars::prelude::*;

use super::{PipelineError, Stage};

/// Strips leading and trailing whitespace from every `String`-typed column.
/// Columns are discovered by dtype, not by name, so arbitrary textual
/// schemas are handled. Non-text columns pass through untouched.
pub struct TextNormalizer;

impl Stage for TextNormalizer {
    fn name(&self) -> &'static str {
        "normalize_text"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError> {
        let text_columns: Vec<Expr> = df
            .get_columns()
            .iter()
            .filter(|c| matches!(c.dtype(), DataType::String))
            .map(|c| col(c.name().clone()).str().strip_chars(lit(NULL)))
            .collect();

        if text_columns.is_empty() {
            return Ok(df);
        }

        let normalized = df.lazy().with_columns(text_columns).collect()?;
        Ok(normalized)
    }
}
