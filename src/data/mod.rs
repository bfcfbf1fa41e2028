//! Data module - CSV loading and persistence

mod loader;
mod writer;

pub use loader::{DataLoader, LoaderError};
pub use writer::{DataWriter, WriterError};
