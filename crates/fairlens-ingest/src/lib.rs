//! CSV ingestion for FairLens.
//!
//! Turns a header-first delimited file into the in-memory table the analysis
//! engine consumes. Dialect and encoding edge cases beyond BOM/whitespace
//! normalization are out of scope.

pub mod csv_table;
pub mod error;

pub use csv_table::{CsvDataset, read_csv_table};
pub use error::{IngestError, Result};
