//! Wranglify - E-commerce CSV Data Cleaning & Enrichment Pipeline
//!
//! Loads a raw transaction table, removes duplicates, normalizes text,
//! coerces types, drops rows with missing required fields, derives purchase
//! totals and segments, and writes the cleaned table back to CSV.

pub mod data;
pub mod logging;
pub mod pipeline;
pub mod stats;

pub use data::{DataLoader, DataWriter};
pub use pipeline::{Pipeline, PipelineError, RunReport, Stage, StageReport};
pub use stats::{DataInspector, DatasetProfile};
