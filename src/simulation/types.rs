// simulation/types.rs
// Inputs and outputs of the simulation engine

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::electrode::{ElectrodeMaterial, Electrolyte};

/// Output mode of a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// Instantaneous electrical quantities only
    Power,
    /// Adds energy capacity and discharge duration estimates
    #[default]
    Endurance,
}

impl Mode {
    /// Normalize a user-supplied mode string. Anything other than
    /// "power" or "endurance" (after trimming and lower-casing) is Endurance.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("power") => Mode::Power,
            _ => Mode::Endurance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Power => "power",
            Mode::Endurance => "endurance",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Mode {
    fn from(raw: String) -> Self {
        Mode::normalize(Some(&raw))
    }
}

impl From<&str> for Mode {
    fn from(raw: &str) -> Self {
        Mode::normalize(Some(raw))
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

/// Geometry of one battery build plus the output mode
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellConfiguration {
    pub plate_area_cm2: f64,
    pub plate_gap_mm: f64,
    pub num_cells: u32,
    #[serde(default)]
    pub mode: Mode,
}

impl CellConfiguration {
    pub fn new(plate_area_cm2: f64, plate_gap_mm: f64, num_cells: u32, mode: Mode) -> Self {
        Self {
            plate_area_cm2,
            plate_gap_mm,
            num_cells,
            mode,
        }
    }
}

/// Endurance-mode estimates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnduranceEstimate {
    pub energy_wh: f64,
    pub energy_j: f64,
    /// Zero when the configuration delivers no power
    pub discharge_duration_s: f64,
}

/// Derived quantities for one configuration. Built once by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub electrode: ElectrodeMaterial,
    pub electrolyte: Electrolyte,
    pub plate_area_cm2: f64,
    pub plate_gap_mm: f64,
    pub cells: u32,
    pub voltage: f64,
    pub resistance: f64,
    pub max_current: f64,
    pub power: f64,
    pub charge_time_min: f64,
    /// Present only for Endurance runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endurance: Option<EnduranceEstimate>,
}

impl SimulationResult {
    pub fn mode(&self) -> Mode {
        if self.endurance.is_some() {
            Mode::Endurance
        } else {
            Mode::Power
        }
    }

    pub fn energy_wh(&self) -> Option<f64> {
        self.endurance.map(|e| e.energy_wh)
    }

    pub fn discharge_duration_s(&self) -> Option<f64> {
        self.endurance.map(|e| e.discharge_duration_s)
    }
}
