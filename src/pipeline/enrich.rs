//! Enricher Stage
//! Derives purchase totals from price and quantity.

use polars::prelude::*;

use super::{has_column, PipelineError, Stage};

/// VAT rate applied on top of the purchase total.
pub const TAX_RATE: f64 = 0.21;

/// Computes `total_compra = price * quantity` when both inputs exist, and
/// `total_con_iva = total_compra * (1 + TAX_RATE)` whenever `total_compra`
/// exists, whether just derived or already in the schema. A null operand
/// yields a null result. The two derivations are gated independently, so a
/// table arriving with a `total_compra` column but no price or quantity
/// still gets its VAT column; each derived column is either fully computed
/// or absent.
pub struct Enricher;

impl Stage for Enricher {
    fn name(&self) -> &'static str {
        "enrich_totals"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError> {
        let mut df = df;

        if has_column(&df, "price") && has_column(&df, "quantity") {
            df = df
                .lazy()
                .with_column((col("price") * col("quantity")).alias("total_compra"))
                .collect()?;
        }

        if has_column(&df, "total_compra") {
            df = df
                .lazy()
                .with_column((col("total_compra") * lit(1.0 + TAX_RATE)).alias("total_con_iva"))
                .collect()?;
        }

        Ok(df)
    }
}
