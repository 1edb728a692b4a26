// Centralized configuration for simulation parameters

// ====================
// Geometry Defaults
// ====================
/// Plate area used when the interactive diameter answer cannot be used (cm²)
pub const DEFAULT_PLATE_AREA_CM2: f64 = 1200.0;

// ====================
// Interactive Sweep
// ====================
pub const INTERACTIVE_GAPS_MM: [f64; 3] = [0.5, 1.0, 2.0];
pub const INTERACTIVE_CELL_COUNTS: [u32; 3] = [3, 6, 9];

// ====================
// Light (Batch) Sweep
// ====================
pub const LIGHT_AREAS_CM2: [f64; 3] = [400.0, 800.0, 1200.0];
pub const LIGHT_GAPS_MM: [f64; 3] = [0.5, 1.0, 2.0];
pub const LIGHT_CELL_COUNTS: [u32; 2] = [3, 6];
pub const LIGHT_STUDY_NAME: &str = "Kapitza Light";
pub const LIGHT_ELECTRODE: &str = "Lead (Pb)";
pub const LIGHT_ELECTROLYTE: &str = "Sulfuric Acid (H2SO4)";

// ====================
// Empirical Model Constants
// ====================
/// Stored energy per 100 cm² of plate per cell (Wh)
pub const ENERGY_WH_PER_100CM2_PER_CELL: f64 = 1.5;
/// Plate area unit the energy density is quoted against (cm²)
pub const ENERGY_REFERENCE_AREA_CM2: f64 = 100.0;
/// Numerator scale of the charge-time approximation (area_m2 * 3600)
pub const CHARGE_TIME_AREA_SCALE: f64 = 3600.0;
/// Denominator scale of the charge-time approximation (voltage * 1000)
pub const CHARGE_TIME_VOLTAGE_SCALE: f64 = 1000.0;

// ====================
// Output
// ====================
pub const INTERACTIVE_OUTPUT_CSV: &str = "kapitza_interactive_output.csv";
pub const LIGHT_OUTPUT_CSV: &str = "kapitza_light_output.csv";
pub const PLOT_OUTPUT_DIR: &str = "kapitza_battery_plots";
