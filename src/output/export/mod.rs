//! Export module for reconstitution results.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//! | ODS     | `ods` (future)  | v0.2.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use recon_rs::output::export::{export_result_csv, export_sweep_csv, CsvConfig, CsvMetadata};
//!
//! // Per-component breakdown table
//! export_result_csv(&result, "breakdown.csv", None)?;
//!
//! // With a metadata header documenting the process parameters
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_process("SARxxxx DP", &params));
//! export_result_csv(&result, "breakdown.csv", Some(&config))?;
//!
//! // Dilution curve series
//! export_sweep_csv(&sweep_result, "dilution_curve.csv", None)?;
//! ```

pub mod csv;

// Re-export the most commonly used types at the module level so users can
// write `use recon_rs::output::export::{CsvConfig, export_result_csv}`
// instead of the full sub-module path.
pub use csv::{export_result_csv, export_sweep_csv, CsvConfig, CsvMetadata};
