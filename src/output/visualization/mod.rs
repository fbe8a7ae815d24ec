//! Visualization module for reconstitution results
//!
//! This module provides tools to visualize calculation results using the
//! `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **composition**: Per-component plots (concentration bars, solid mass pie)
//! - **dilution**: Dilution curves (diluent volume vs target volume)
//!
//! # Quick Start
//!
//! ## Composition (One Result, Per Component)
//!
//! ```rust,ignore
//! use recon_rs::output::visualization::{plot_concentration_bars, plot_solid_mass_pie, PlotConfig};
//!
//! let result = calculator.compute(&formulation, &params)?;
//!
//! // Bars with default config
//! plot_concentration_bars(&result, "composition.png", None)?;
//!
//! // Pie with a custom title
//! let config = PlotConfig::composition("SARxxxx Cake Composition");
//! plot_solid_mass_pie(&result, "cake.png", Some(&config))?;
//! ```
//!
//! ## Dilution Curve (Sweep Across Target Volumes)
//!
//! ```rust,ignore
//! use recon_rs::output::visualization::plot_dilution_curve;
//!
//! let series = calculator.sweep(&formulation, &params, &sweep)?;
//! plot_dilution_curve(&series, "dilution_curve.png", None)?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Post-recon concentrations per component | `composition` | `plot_concentration_bars` |
//! | Solid composition of the cake | `composition` | `plot_solid_mass_pie` |
//! | Diluent volume vs target volume | `dilution` | `plot_dilution_curve` |

pub mod composition;
pub mod config;
pub mod dilution;

pub use config::PlotConfig;

pub use composition::{plot_concentration_bars, plot_solid_mass_pie};

pub use dilution::plot_dilution_curve;
