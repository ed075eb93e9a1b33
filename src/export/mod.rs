//! Export module for the expense tracker
//!
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: every expense plus metadata, machine-readable

pub mod csv;
pub mod json;

pub use csv::{export_expenses_csv, write_expenses_csv, CSV_HEADER};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
