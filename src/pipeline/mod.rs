//! Pipeline Module
//! Ordered sequence of cleaning and enrichment stages over a DataFrame.
//!
//! Each stage is a pure transform from one owned DataFrame to the next.
//! Stages declare the columns they require; the driver skips a stage when
//! the current schema cannot satisfy it, so a dataset missing e.g. `price`
//! flows through untouched instead of failing.

mod coerce;
mod dedup;
mod discretize;
mod enrich;
mod normalize;
mod nulls;

pub use coerce::TypeCoercer;
pub use dedup::Deduplicator;
pub use discretize::Discretizer;
pub use enrich::Enricher;
pub use normalize::TextNormalizer;
pub use nulls::NullResolver;

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One cleaning or enrichment step.
///
/// `apply` consumes the current table and produces the next one; it must be
/// an identity on zero rows and must never fail on malformed cell values
/// (those degrade to nulls instead).
pub trait Stage {
    fn name(&self) -> &'static str;

    /// Columns that must exist in the schema for this stage to run.
    /// An empty slice means the stage applies to any schema and handles
    /// partial column presence internally.
    fn required_columns(&self) -> &[&str] {
        &[]
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError>;
}

/// Per-stage execution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub stage: String,
    pub applied: bool,
    pub rows_in: usize,
    pub rows_out: usize,
}

impl StageReport {
    pub fn rows_removed(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Statistics for a full pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub stages: Vec<StageReport>,
}

/// Returns true when `name` is a column of `df`.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// Drives a fixed sequence of stages over an owned DataFrame.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl Pipeline {
    /// The standard cleaning order: dedup, text normalization, type
    /// coercion, required-null drop, enrichment, discretization.
    pub fn standard() -> Self {
        Self {
            stages: vec![
                Box::new(Deduplicator),
                Box::new(TextNormalizer),
                Box::new(TypeCoercer::standard()),
                Box::new(NullResolver::standard()),
                Box::new(Enricher),
                Box::new(Discretizer),
            ],
        }
    }

    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Run every applicable stage in order, reporting row deltas.
    pub fn run(&self, df: DataFrame) -> Result<(DataFrame, RunReport), PipelineError> {
        let mut df = df;
        let mut report = RunReport::default();

        for stage in &self.stages {
            let missing: Vec<&str> = stage
                .required_columns()
                .iter()
                .copied()
                .filter(|c| !has_column(&df, c))
                .collect();

            if !missing.is_empty() {
                debug!(stage = stage.name(), ?missing, "skipping stage, required columns absent");
                report.stages.push(StageReport {
                    stage: stage.name().to_string(),
                    applied: false,
                    rows_in: df.height(),
                    rows_out: df.height(),
                });
                continue;
            }

            let rows_in = df.height();
            df = stage.apply(df)?;
            let rows_out = df.height();

            info!(
                stage = stage.name(),
                rows_in,
                rows_out,
                rows_removed = rows_in.saturating_sub(rows_out),
                "stage complete"
            );
            report.stages.push(StageReport {
                stage: stage.name().to_string(),
                applied: true,
                rows_in,
                rows_out,
            });
        }

        Ok((df, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_stage_when_required_columns_absent() {
        struct NeedsPrice;
        impl Stage for NeedsPrice {
            fn name(&self) -> &'static str {
                "needs_price"
            }
            fn required_columns(&self) -> &[&str] {
                &["price"]
            }
            fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError> {
                panic!("must not run: {:?}", df.shape())
            }
        }

        let df = df!("product" => ["a", "b"]).unwrap();
        let pipeline = Pipeline::with_stages(vec![Box::new(NeedsPrice)]);
        let (out, report) = pipeline.run(df).unwrap();

        assert_eq!(out.height(), 2);
        assert!(!report.stages[0].applied);
        assert_eq!(report.stages[0].rows_removed(), 0);
    }

    #[test]
    fn standard_pipeline_handles_empty_dataset() {
        let df = DataFrame::empty();
        let (out, report) = Pipeline::standard().run(df).unwrap();
        assert_eq!(out.height(), 0);
        assert_eq!(report.stages.len(), 6);
    }

    #[test]
    fn report_serializes_to_json() {
        let df = df!("product" => ["a", "a"]).unwrap();
        let (_, report) = Pipeline::standard().run(df).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("dedup"));
    }
}
