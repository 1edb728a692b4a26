// simulation/sweep.rs
// Order-preserving parameter sweeps over the engine

use log::debug;
use serde::{Deserialize, Serialize};

use crate::electrode::{ElectrodeMaterial, Electrolyte};
use crate::errors::Result;
use crate::profile_scope;

use super::core::simulate_config;
use super::types::{CellConfiguration, Mode, SimulationResult};

/// Cartesian product of plate areas, plate gaps and cell counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    pub areas_cm2: Vec<f64>,
    pub gaps_mm: Vec<f64>,
    pub cells: Vec<u32>,
}

impl SweepGrid {
    pub fn new(areas_cm2: Vec<f64>, gaps_mm: Vec<f64>, cells: Vec<u32>) -> Self {
        Self {
            areas_cm2,
            gaps_mm,
            cells,
        }
    }

    /// Single-area grid: gap outer, cells inner
    pub fn for_area(area_cm2: f64, gaps_mm: &[f64], cells: &[u32]) -> Self {
        Self::new(vec![area_cm2], gaps_mm.to_vec(), cells.to_vec())
    }

    pub fn len(&self) -> usize {
        self.areas_cm2.len() * self.gaps_mm.len() * self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand to configurations: area outer, gap middle, cells inner.
    pub fn configurations(&self, mode: Mode) -> Vec<CellConfiguration> {
        let mut configs = Vec::with_capacity(self.len());
        for &area in &self.areas_cm2 {
            for &gap in &self.gaps_mm {
                for &cells in &self.cells {
                    configs.push(CellConfiguration::new(area, gap, cells, mode));
                }
            }
        }
        configs
    }
}

/// Run the engine once per configuration, in the given order.
/// The first invalid configuration aborts the sweep.
pub fn run_sweep(
    electrode: ElectrodeMaterial,
    electrolyte: Electrolyte,
    configurations: &[CellConfiguration],
) -> Result<Vec<SimulationResult>> {
    profile_scope!("run_sweep");
    debug!(
        "Sweeping {} configurations for {} / {}",
        configurations.len(),
        electrode,
        electrolyte
    );
    configurations
        .iter()
        .map(|cell| simulate_config(electrode, electrolyte, cell))
        .collect()
}

/// Same as [`run_sweep`] with catalog names.
pub fn run_sweep_by_name(
    electrode: &str,
    electrolyte: &str,
    configurations: &[CellConfiguration],
) -> Result<Vec<SimulationResult>> {
    run_sweep(
        ElectrodeMaterial::from_name(electrode)?,
        Electrolyte::from_name(electrolyte)?,
        configurations,
    )
}
