//! Design of Experiments (DOE) module for geometry sweep studies
//!
//! This module provides functionality to:
//! - Describe a study (chemistry, mode, geometry grid) in TOML
//! - Run the sweep without any interaction
//! - Export results as CSV/JSON and optional plot data

pub mod config;
pub mod export;
pub mod runner;

pub use config::SweepConfig;
pub use export::{csv_lines, export_csv, export_json, write_csv, CsvStyle};
pub use runner::{RunSummary, SweepRunner};
