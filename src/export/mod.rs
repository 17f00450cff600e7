//! Export functionality

pub mod csv;

pub use csv::export_records_csv;
