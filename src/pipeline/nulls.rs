//! Null Resolver Stage
//! Drops records missing structurally required fields.

use polars::prelude::*;

use super::{has_column, PipelineError, Stage};

/// Columns a transaction cannot do without.
pub const REQUIRED_COLUMNS: [&str; 3] = ["price", "quantity", "order_date"];

/// Drops every record holding a null in any required column that exists in
/// the schema. Required columns absent from the schema are not enforced;
/// with none present the stage is a no-op. Policy is drop, not impute.
pub struct NullResolver {
    required: Vec<&'static str>,
}

impl NullResolver {
    pub fn standard() -> Self {
        Self {
            required: REQUIRED_COLUMNS.to_vec(),
        }
    }

    pub fn new(required: Vec<&'static str>) -> Self {
        Self { required }
    }
}

impl Stage for NullResolver {
    fn name(&self) -> &'static str {
        "drop_null_required"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError> {
        let present: Vec<Expr> = self
            .required
            .iter()
            .filter(|c| has_column(&df, c))
            .map(|c| col(*c))
            .collect();

        if present.is_empty() {
            return Ok(df);
        }

        let kept = df.lazy().drop_nulls(Some(present)).collect()?;
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_rows_null_in_any_required_column() {
        let df = df!(
            "price" => [Some(10.0), None, Some(30.0)],
            "quantity" => [Some(1.0), Some(2.0), None],
            "product" => [None::<&str>, Some("b"), Some("c")],
        )
        .unwrap();

        let out = NullResolver::standard().apply(df).unwrap();
        // only row 0 survives; a null in a non-required column is fine
        assert_eq!(out.height(), 1);
        assert_eq!(out.column("price").unwrap().f64().unwrap().get(0), Some(10.0));
    }

    #[test]
    fn only_present_required_columns_are_enforced() {
        let df = df!(
            "price" => [Some(10.0), None],
        )
        .unwrap();

        let out = NullResolver::standard().apply(df).unwrap();
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn no_required_columns_means_no_op() {
        let df = df!(
            "product" => [Some("a"), None],
        )
        .unwrap();

        let out = NullResolver::standard().apply(df.clone()).unwrap();
        assert!(df.equals_missing(&out));
    }

    #[test]
    fn survivors_keep_relative_order() {
        let df = df!(
            "price" => [Some(1.0), None, Some(3.0), Some(4.0)],
            "quantity" => [Some(1.0), Some(1.0), Some(1.0), Some(1.0)],
        )
        .unwrap();

        let out = NullResolver::standard().apply(df).unwrap();
        let prices: Vec<f64> = out
            .column("price")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(prices, vec![1.0, 3.0, 4.0]);
    }
}
