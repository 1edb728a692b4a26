//! Sweep study configuration structures
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config;
use crate::electrode::{ElectrodeMaterial, Electrolyte};
use crate::errors::{Result, SimError};
use crate::simulation::{plate_area_m2, plate_gap_m, CellConfiguration, Mode, SweepGrid};

use super::export::CsvStyle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Name of the study
    pub study_name: String,

    pub electrode: ElectrodeMaterial,

    pub electrolyte: Electrolyte,

    /// "power" or "endurance"; anything else (or nothing) means endurance
    #[serde(default)]
    pub mode: Mode,

    /// CSV file written at the end of the run
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub csv_style: CsvStyle,

    /// Geometry grid to sweep
    pub grid: SweepGrid,
}

fn default_output() -> String {
    config::LIGHT_OUTPUT_CSV.to_string()
}

impl SweepConfig {
    /// The fixed lead/sulfuric-acid batch study
    pub fn light_default() -> Self {
        SweepConfig {
            study_name: config::LIGHT_STUDY_NAME.to_string(),
            electrode: ElectrodeMaterial::Lead,
            electrolyte: Electrolyte::SulfuricAcid,
            mode: Mode::Endurance,
            output: config::LIGHT_OUTPUT_CSV.to_string(),
            csv_style: CsvStyle::Compact,
            grid: SweepGrid::new(
                config::LIGHT_AREAS_CM2.to_vec(),
                config::LIGHT_GAPS_MM.to_vec(),
                config::LIGHT_CELL_COUNTS.to_vec(),
            ),
        }
    }

    /// Gap × cells sweep at a single plate area, as run by the interactive front-end
    pub fn interactive(
        plate_area_cm2: f64,
        electrode: ElectrodeMaterial,
        electrolyte: Electrolyte,
        mode: Mode,
    ) -> Self {
        SweepConfig {
            study_name: "Kapitza Interactive".to_string(),
            electrode,
            electrolyte,
            mode,
            output: config::INTERACTIVE_OUTPUT_CSV.to_string(),
            csv_style: CsvStyle::Detailed,
            grid: SweepGrid::for_area(
                plate_area_cm2,
                &config::INTERACTIVE_GAPS_MM,
                &config::INTERACTIVE_CELL_COUNTS,
            ),
        }
    }

    pub fn configurations(&self) -> Vec<CellConfiguration> {
        self.grid.configurations(self.mode)
    }

    /// Reject grids the engine would refuse, before anything runs
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.is_empty() {
            return Err(SimError::InvalidConfig(format!(
                "study '{}' has an empty grid ({} areas, {} gaps, {} cell counts)",
                self.study_name,
                grid.areas_cm2.len(),
                grid.gaps_mm.len(),
                grid.cells.len()
            )));
        }
        if let Some(a) = grid.areas_cm2.iter().find(|a| plate_area_m2(**a).is_err()) {
            return Err(SimError::InvalidConfig(format!("plate area {} is not positive", a)));
        }
        if let Some(g) = grid.gaps_mm.iter().find(|g| plate_gap_m(**g).is_err()) {
            return Err(SimError::InvalidConfig(format!("plate gap {} is not positive", g)));
        }
        if grid.cells.contains(&0) {
            return Err(SimError::InvalidConfig("cell count must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Load a study from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| SimError::file(path, e))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: SweepConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the study to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|e| SimError::file(path, e))?;
        Ok(())
    }
}
