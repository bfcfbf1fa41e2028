//! Stats module - pre-pipeline dataset inspection

mod inspector;

pub use inspector::{ColumnNulls, DataInspector, DatasetProfile};
