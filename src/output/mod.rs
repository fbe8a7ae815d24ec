//! Output module for reconstitution results
//!
//! This module provides tools to output calculation results in various
//! formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── composition.rs
//! │   └── dilution.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use recon_rs::output::visualization::{plot_concentration_bars, PlotConfig};
//!
//! // Generate PNG plot of post-reconstitution concentrations
//! plot_concentration_bars(&result, "composition.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use recon_rs::output::export::{export_result_csv, CsvConfig};
//!
//! // Export the per-component breakdown to CSV
//! export_result_csv(&result, "breakdown.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV, spreadsheets)
//!
//! Both sub-modules are plain consumers of [`ReconstitutionResult`] and
//! [`SweepResult`](crate::calculator::SweepResult) — the calculator knows
//! nothing about them, and a caller that needs neither never touches them.
//!
//! [`ReconstitutionResult`]: crate::calculator::ReconstitutionResult

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_concentration_bars,
    plot_dilution_curve,
    plot_solid_mass_pie,
    PlotConfig,
};

pub use export::{
    export_result_csv,
    export_sweep_csv,
    CsvConfig,
};
