//! Type Coercer Stage
//! Converts designated columns to numeric or date types, coerce-or-null.

use polars::prelude::*;

use super::{has_column, PipelineError, Stage};

/// Target type for a coerced column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoerceTarget {
    Numeric,
    Temporal,
}

/// Parses a fixed set of named columns into their target types. Values that
/// fail to parse become nulls instead of aborting the run; columns absent
/// from the schema are skipped silently.
pub struct TypeCoercer {
    coercions: Vec<(&'static str, CoerceTarget)>,
}

impl TypeCoercer {
    /// The e-commerce coercion table: price and quantity to numeric,
    /// order_date to a date.
    pub fn standard() -> Self {
        Self {
            coercions: vec![
                ("price", CoerceTarget::Numeric),
                ("quantity", CoerceTarget::Numeric),
                ("order_date", CoerceTarget::Temporal),
            ],
        }
    }

    pub fn new(coercions: Vec<(&'static str, CoerceTarget)>) -> Self {
        Self { coercions }
    }

    fn coercion_expr(
        name: &str,
        target: CoerceTarget,
        dtype: &DataType,
        all_null: bool,
    ) -> Option<Expr> {
        match target {
            CoerceTarget::Numeric => match dtype {
                DataType::Float64 => None,
                _ => Some(col(name).cast(DataType::Float64)),
            },
            CoerceTarget::Temporal => match dtype {
                DataType::Date | DataType::Datetime(_, _) => None,
                // date format inference needs at least one non-null value
                _ if all_null => Some(col(name).cast(DataType::Date)),
                DataType::String => Some(col(name).str().to_date(StrptimeOptions {
                    strict: false,
                    ..Default::default()
                })),
                _ => Some(col(name).cast(DataType::String).str().to_date(StrptimeOptions {
                    strict: false,
                    ..Default::default()
                })),
            },
        }
    }
}

impl Stage for TypeCoercer {
    fn name(&self) -> &'static str {
        "coerce_types"
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError> {
        let mut exprs = Vec::new();
        for (name, target) in &self.coercions {
            if !has_column(&df, name) {
                continue;
            }
            let column = df.column(name)?;
            let dtype = column.dtype().clone();
            let all_null = column.null_count() == column.len();
            if let Some(expr) = Self::coercion_expr(name, *target, &dtype, all_null) {
                exprs.push(expr.alias(*name));
            }
        }

        if exprs.is_empty() {
            return Ok(df);
        }

        let coerced = df.lazy().with_columns(exprs).collect()?;
        Ok(coerced)
    }
}
