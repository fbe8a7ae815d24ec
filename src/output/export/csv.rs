//! CSV export functionality for reconstitution results
//!
//! This module provides tools to export calculation results to CSV
//! (Comma-Separated Values) format, which is compatible with Excel, Python
//! pandas, and most data analysis tools.
//!
//! # Features
//!
//! - **Breakdown tables**: One row per component plus solvent and totals
//! - **Sweep series**: Dilution curves as plain columnar data
//! - **Metadata support**: Optional header with process parameters
//! - **Customizable**: Delimiter, precision, format options
//!
//! # Quick Examples
//!
//! ## Breakdown Table
//!
//! ```rust,ignore
//! use recon_rs::output::export::export_result_csv;
//!
//! export_result_csv(&result, "breakdown.csv", None)?;
//! ```
//!
//! **Output** (`breakdown.csv`):
//! ```csv
//! Component,Role,Pre-Lyo Concentration (mg/mL),Amount per Vial (mg),Post-Recon Concentration (mg/mL)
//! SARxxxx,Drug,8.000000,64.000000,16.000000
//! Sucrose,Stabilizer,80.000000,640.000000,160.000000
//! ...
//! # Diluent Mass Needed: 3398.480000 mg/vial
//! # Diluent Volume Needed: 3.404609 mL/vial
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use recon_rs::output::export::{export_result_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_process("SARxxxx DP", &params);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_result_csv(&result, "breakdown.csv", Some(&config))?;
//! ```
//!
//! **Output** (`breakdown.csv`):
//! ```csv
//! # Reconstitution Mass Balance Data
//! # Generated: 2026-08-06T15:30:00+00:00
//! # Product: SARxxxx DP
//! # Filling Volume: 8 mL
//! # Density Pre-Lyo: 1030 mg/mL
//! #
//! Component,Role,...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::calculator::{ProcessParameters, ReconstitutionResult, SweepResult};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields will be included in the
/// CSV header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Drug product name (e.g. "SARxxxx DP")
    pub product_name: Option<String>,

    /// Calculator name (from the result metadata)
    pub calculator_name: Option<String>,

    /// Pre-lyophilization fill volume (mL)
    pub filling_volume: Option<f64>,

    /// Density prior to lyophilization (mg/mL)
    pub density_pre_lyo: Option<f64>,

    /// Target volume after reconstitution (mL)
    pub recon_volume: Option<f64>,

    /// Density after reconstitution (mg/mL)
    pub density_post_recon: Option<f64>,

    /// Diluent density (mg/mL)
    pub diluent_density: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from a product name and its process parameters
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_process("SARxxxx DP", &params);
    /// ```
    pub fn from_process(product: &str, params: &ProcessParameters) -> Self {
        Self {
            product_name: Some(product.to_string()),
            filling_volume: Some(params.filling_volume),
            density_pre_lyo: Some(params.density_pre_lyo),
            recon_volume: Some(params.recon_volume),
            density_post_recon: Some(params.density_post_recon),
            diluent_density: Some(params.diluent_density),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Reconstitution Mass Balance Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(product) = &metadata.product_name {
        writeln!(file, "# Product: {}", product)?;
    }
    if let Some(calculator) = &metadata.calculator_name {
        writeln!(file, "# Calculator: {}", calculator)?;
    }

    // Process parameters
    if let Some(filling_volume) = metadata.filling_volume {
        writeln!(file, "# Filling Volume: {} mL", filling_volume)?;
    }
    if let Some(density) = metadata.density_pre_lyo {
        writeln!(file, "# Density Pre-Lyo: {} mg/mL", density)?;
    }
    if let Some(volume) = metadata.recon_volume {
        writeln!(file, "# Recon Volume: {} mL", volume)?;
    }
    if let Some(density) = metadata.density_post_recon {
        writeln!(file, "# Density Post-Recon: {} mg/mL", density)?;
    }
    if let Some(density) = metadata.diluent_density {
        writeln!(file, "# Diluent Density: {} mg/mL", density)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a reconstitution breakdown table to CSV
///
/// Writes one row per formulation component, a solvent/diluent row, a total
/// solids row, and the headline diluent quantities as comment lines at the
/// end of the file.
///
/// # Arguments
///
/// * `result` - Reconstitution result snapshot
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - NaN or Inf values in the snapshot
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_result_csv(&result, "breakdown.csv", None)?;
/// ```
pub fn export_result_csv(
    result: &ReconstitutionResult,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    let scalars = [
        result.total_solid_concentration,
        result.total_solid_mass,
        result.diluent_mass_needed,
        result.diluent_volume_needed,
    ];
    if scalars.iter().any(|v| !v.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in result".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    let delimiter = configuration.delimiter;

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "Component{d}Role{d}Pre-Lyo Concentration (mg/mL){d}Amount per Vial (mg){d}Post-Recon Concentration (mg/mL)",
        d = delimiter
    )?;

    // ============================= Write Rows =============================

    for component in &result.components {
        writeln!(
            file,
            "{}{d}{}{d}{}{d}{}{d}{}",
            component.name,
            component.role,
            format_number(component.concentration_pre_lyo, configuration),
            format_number(component.amount_pre_lyo, configuration),
            format_number(component.concentration_post_recon, configuration),
            d = delimiter
        )?;
    }

    // The solvent pool: residual carryover before lyophilization, residual
    // plus added diluent after reconstitution
    writeln!(
        file,
        "Solvent/Diluent{d}Solvent{d}{}{d}{}{d}{}",
        format_number(result.solvent_concentration_pre_lyo, configuration),
        format_number(result.solvent_mass_pre_lyo, configuration),
        format_number(result.solvent_concentration_post_recon, configuration),
        d = delimiter
    )?;

    let total_post: f64 = result.concentrations_post_recon().sum();
    writeln!(
        file,
        "Total Solids{d}{d}{}{d}{}{d}{}",
        format_number(result.total_solid_concentration, configuration),
        format_number(result.total_solid_mass, configuration),
        format_number(total_post, configuration),
        d = delimiter
    )?;

    // ============================= Write Summary ==========================

    writeln!(file, "#")?;
    writeln!(
        file,
        "# Diluent Mass Needed: {} mg/vial",
        format_number(result.diluent_mass_needed, configuration)
    )?;
    writeln!(
        file,
        "# Diluent Volume Needed: {} mL/vial",
        format_number(result.diluent_volume_needed, configuration)
    )?;

    Ok(())
}

/// Export a volume sweep (dilution curve) to CSV
///
/// Writes one row per grid point with the target volume, the diluent mass
/// and volume to add, and the resulting total solid concentration.
///
/// # Errors
///
/// - Empty sweep
/// - NaN or Inf values in any series
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_sweep_csv(&series, "dilution_curve.csv", None)?;
/// ```
pub fn export_sweep_csv(
    series: &SweepResult,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if series.is_empty() {
        return Err("Empty data: sweep series must not be empty".into());
    }

    let all_series = [
        &series.recon_volumes,
        &series.diluent_masses,
        &series.diluent_volumes,
        &series.total_solid_concentrations_post_recon,
    ];

    for values in all_series {
        if values.len() != series.len() {
            return Err(format!(
                "Data length mismatch: {} grid points versus {} values",
                series.len(),
                values.len()
            )
            .into());
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err("Invalid data: NaN or Inf detected in sweep series".into());
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    let delimiter = configuration.delimiter;

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "Target Volume (mL){d}Diluent Mass (mg){d}Diluent Volume (mL){d}Total Solid Concentration (mg/mL)",
        d = delimiter
    )?;

    // ============================= Write Rows =============================

    for i in 0..series.len() {
        writeln!(
            file,
            "{}{d}{}{d}{}{d}{}",
            format_number(series.recon_volumes[i], configuration),
            format_number(series.diluent_masses[i], configuration),
            format_number(series.diluent_volumes[i], configuration),
            format_number(series.total_solid_concentrations_post_recon[i], configuration),
            d = delimiter
        )?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
