// simulation/core.rs
// Closed-form battery model: one configuration in, one result out

use crate::config;
use crate::electrode::{ElectrodeMaterial, Electrolyte};
use crate::errors::{Result, SimError};
use crate::units;

use super::types::{CellConfiguration, EnduranceEstimate, Mode, SimulationResult};

/// Evaluate the model for catalog names. Unknown names are lookup errors.
pub fn simulate(
    electrode: &str,
    electrolyte: &str,
    plate_area_cm2: f64,
    plate_gap_mm: f64,
    num_cells: u32,
    mode: Mode,
) -> Result<SimulationResult> {
    let electrode = ElectrodeMaterial::from_name(electrode)?;
    let electrolyte = Electrolyte::from_name(electrolyte)?;
    simulate_config(
        electrode,
        electrolyte,
        &CellConfiguration::new(plate_area_cm2, plate_gap_mm, num_cells, mode),
    )
}

/// Evaluate the model for one configuration.
pub fn simulate_config(
    electrode: ElectrodeMaterial,
    electrolyte: Electrolyte,
    cell: &CellConfiguration,
) -> Result<SimulationResult> {
    let area_m2 = plate_area_m2(cell.plate_area_cm2)?;
    let gap_m = plate_gap_m(cell.plate_gap_mm)?;
    if cell.num_cells == 0 {
        return Err(SimError::InvalidGeometry {
            field: "cell count",
            value: 0.0,
        });
    }

    let voltage = electrode.voltage_per_cell() * f64::from(cell.num_cells);
    let resistance = positive_finite("resistance", electrolyte.resistivity() * gap_m / area_m2)?;
    let max_current = voltage / resistance;
    let power = positive_finite("power", voltage * max_current)?;
    // Empirical, kept as-is
    let charge_time_min = (area_m2 * config::CHARGE_TIME_AREA_SCALE)
        / (voltage * config::CHARGE_TIME_VOLTAGE_SCALE);

    let endurance = match cell.mode {
        Mode::Endurance => Some(endurance_estimate(
            cell.plate_area_cm2,
            cell.num_cells,
            power,
        )),
        Mode::Power => None,
    };

    Ok(SimulationResult {
        electrode,
        electrolyte,
        plate_area_cm2: cell.plate_area_cm2,
        plate_gap_mm: cell.plate_gap_mm,
        cells: cell.num_cells,
        voltage,
        resistance,
        max_current,
        power,
        charge_time_min,
        endurance,
    })
}

/// Stored energy and the time it lasts at `power_w`.
pub fn endurance_estimate(plate_area_cm2: f64, num_cells: u32, power_w: f64) -> EnduranceEstimate {
    let energy_wh = config::ENERGY_WH_PER_100CM2_PER_CELL
        * (plate_area_cm2 / config::ENERGY_REFERENCE_AREA_CM2)
        * f64::from(num_cells);
    let energy_j = units::wh_to_joules(energy_wh);
    let discharge_duration_s = if power_w > 0.0 { energy_j / power_w } else { 0.0 };
    EnduranceEstimate {
        energy_wh,
        energy_j,
        discharge_duration_s,
    }
}

/// Plate area in m². Fails unless it is still positive and finite after conversion.
pub fn plate_area_m2(plate_area_cm2: f64) -> Result<f64> {
    let area_m2 = units::cm2_to_m2(plate_area_cm2);
    if area_m2.is_finite() && area_m2 > 0.0 {
        Ok(area_m2)
    } else {
        Err(SimError::InvalidGeometry {
            field: "plate area",
            value: plate_area_cm2,
        })
    }
}

/// Plate gap in m. Fails unless it is still positive and finite after conversion.
pub fn plate_gap_m(plate_gap_mm: f64) -> Result<f64> {
    let gap_m = units::mm_to_m(plate_gap_mm);
    if gap_m.is_finite() && gap_m > 0.0 {
        Ok(gap_m)
    } else {
        Err(SimError::InvalidGeometry {
            field: "plate gap",
            value: plate_gap_mm,
        })
    }
}

// Derived quantities that underflow or overflow are rejected like bad inputs
fn positive_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidGeometry { field, value })
    }
}
