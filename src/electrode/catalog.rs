use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::electrolyte::{Electrolyte, ELECTROLYTES};
use super::material::{ElectrodeMaterial, ELECTRODE_MATERIALS};

/// Read-only name index over the electrode table, built on first lookup.
pub static ELECTRODES_BY_NAME: Lazy<HashMap<&'static str, ElectrodeMaterial>> = Lazy::new(|| {
    ELECTRODE_MATERIALS
        .iter()
        .map(|m| (m.display_name(), *m))
        .collect()
});

pub static ELECTROLYTES_BY_NAME: Lazy<HashMap<&'static str, Electrolyte>> = Lazy::new(|| {
    ELECTROLYTES
        .iter()
        .map(|e| (e.display_name(), *e))
        .collect()
});

/// Menu labels for the electrode table, in catalog order
pub fn electrode_names() -> Vec<&'static str> {
    ELECTRODE_MATERIALS.iter().map(|m| m.display_name()).collect()
}

pub fn electrolyte_names() -> Vec<&'static str> {
    ELECTROLYTES.iter().map(|e| e.display_name()).collect()
}
