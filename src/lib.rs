pub mod config;
pub mod doe;
pub mod electrode;
pub mod errors;
pub mod logger;
pub mod opts;
pub mod plotting;
pub mod profiler;
pub mod prompt;
pub mod simulation;
pub mod units;

pub use errors::{Result, SimError};
pub use simulation::{run_sweep, simulate, CellConfiguration, Mode, SimulationResult};

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
