//! Wranglify - E-commerce CSV Data Cleaning & Enrichment Pipeline
//!
//! Loads a raw transaction CSV, runs the cleaning pipeline, and writes the
//! enriched table back out.

use anyhow::Context;
use tracing::{debug, info};
use wranglify::{logging, DataInspector, DataLoader, DataWriter, Pipeline};

const DEFAULT_INPUT: &str = "data.csv";
const DEFAULT_OUTPUT: &str = "ecommerce_wrangled.csv";

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT);
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    let df = DataLoader::load_csv(input).with_context(|| format!("loading {input}"))?;
    info!(rows = df.height(), columns = df.width(), "dataset loaded");

    let profile = DataInspector::profile(&df)?;
    debug!(profile = %serde_json::to_string(&profile)?, "initial inspection");

    let (mut cleaned, report) = Pipeline::standard().run(df)?;
    debug!(report = %serde_json::to_string(&report)?, "pipeline report");

    DataWriter::write_csv(&mut cleaned, output).with_context(|| format!("writing {output}"))?;
    info!(
        rows = cleaned.height(),
        columns = cleaned.width(),
        output,
        "cleaned dataset saved"
    );

    Ok(())
}
