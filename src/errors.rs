// errors.rs
// Crate-wide error type

use std::path::PathBuf;

pub type Result<T, E = SimError> = std::result::Result<T, E>;

/// Everything that can go wrong between reading a selection and writing a file.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("unknown electrode material: {0:?}")]
    UnknownElectrode(String),

    #[error("unknown electrolyte: {0:?}")]
    UnknownElectrolyte(String),

    /// Raised by the engine instead of producing an infinite resistance or current.
    #[error("invalid geometry: {field} must be positive and finite (got {value})")]
    InvalidGeometry { field: &'static str, value: f64 },

    #[error("invalid study configuration: {0}")]
    InvalidConfig(String),

    #[error("input closed before a selection was made")]
    InputClosed,

    #[error("failed to access {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimError::File {
            path: path.into(),
            source,
        }
    }
}
