//! Logging setup.

use log::LevelFilter;

/// Init logging. `RUST_LOG` wins when set; otherwise the verbosity flags pick the level.
pub fn init(verbose: bool, silent: bool) {
    let level = if silent {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}
