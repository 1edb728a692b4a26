// simulation/mod.rs
// Battery model and the sweeps that drive it.
// The engine is a pure function; sweeps are plain ordered maps over it.

pub mod core;
pub mod sweep;
pub mod types;

#[cfg(test)]
mod tests;

pub use self::core::{endurance_estimate, plate_area_m2, plate_gap_m, simulate, simulate_config};
pub use sweep::{run_sweep, run_sweep_by_name, SweepGrid};
pub use types::{CellConfiguration, EnduranceEstimate, Mode, SimulationResult};
