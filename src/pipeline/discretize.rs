//! Discretizer Stage
//! Buckets the purchase total into an ordered categorical segment.

use polars::prelude::*;

use super::{PipelineError, Stage};

/// Segment labels, ordered from lowest to highest total.
pub const SEGMENT_LABELS: [&str; 4] = ["baja", "media", "alta", "muy_alta"];

/// Upper edges of the first three bins; each bin is right-closed, so a
/// total of exactly 50 is "baja" and exactly 200 is "media". Anything above
/// the last edge is "muy_alta". Negative totals fall into "baja" as well.
pub const BIN_UPPER_EDGES: [f64; 3] = [50.0, 200.0, 500.0];

/// Maps `total_compra` into the `segmento_compra` label column. A null
/// total maps to a null segment. Driver-gated on `total_compra`.
pub struct Discretizer;

impl Stage for Discretizer {
    fn name(&self) -> &'static str {
        "discretize_segment"
    }

    fn required_columns(&self) -> &[&str] {
        &["total_compra"]
    }

    fn apply(&self, df: DataFrame) -> Result<DataFrame, PipelineError> {
        let total = col("total_compra");
        let segment = when(total.clone().is_null())
            .then(lit(NULL).cast(DataType::String))
            .when(total.clone().lt_eq(lit(BIN_UPPER_EDGES[0])))
            .then(lit(SEGMENT_LABELS[0]))
            .when(total.clone().lt_eq(lit(BIN_UPPER_EDGES[1])))
            .then(lit(SEGMENT_LABELS[1]))
            .when(total.lt_eq(lit(BIN_UPPER_EDGES[2])))
            .then(lit(SEGMENT_LABELS[2]))
            .otherwise(lit(SEGMENT_LABELS[3]))
            .alias("segmento_compra");

        let segmented = df.lazy().with_column(segment).collect()?;
        Ok(segmented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments_for(totals: Vec<Option<f64>>) -> Vec<Option<String>> {
        let df = df!("total_compra" => totals).unwrap();
        let out = Discretizer.apply(df).unwrap();
        out.column("segmento_compra")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect()
    }

    #[test]
    fn boundary_values_fall_into_the_lower_bin() {
        let segments = segments_for(vec![
            Some(50.0),
            Some(50.01),
            Some(200.0),
            Some(200.01),
            Some(500.0),
            Some(500.01),
        ]);
        assert_eq!(
            segments,
            vec![
                Some("baja".into()),
                Some("media".into()),
                Some("media".into()),
                Some("alta".into()),
                Some("alta".into()),
                Some("muy_alta".into()),
            ]
        );
    }

    #[test]
    fn negative_totals_classify_as_baja() {
        let segments = segments_for(vec![Some(-10.0), Some(0.0)]);
        assert_eq!(segments, vec![Some("baja".into()), Some("baja".into())]);
    }

    #[test]
    fn null_total_maps_to_null_segment() {
        let segments = segments_for(vec![None, Some(1000.0)]);
        assert_eq!(segments, vec![None, Some("muy_alta".into())]);
    }

    #[test]
    fn labels_are_drawn_from_the_fixed_set() {
        let segments = segments_for(vec![Some(1.0), Some(100.0), Some(300.0), Some(900.0)]);
        for segment in segments.into_iter().flatten() {
            assert!(SEGMENT_LABELS.contains(&segment.as_str()));
        }
    }
}
