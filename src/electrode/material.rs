// electrode/material.rs
// Defines electrode material types and their per-cell electrochemical properties

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SimError;

/// Known electrode plate materials
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElectrodeMaterial {
    /// Lead plates (lead-acid style cell)
    Lead,
    Graphene,
    Copper,
    Aluminum,
    Zinc,
    Nickel,
}

impl ElectrodeMaterial {
    /// Nominal open-circuit voltage of a single cell (V)
    pub fn voltage_per_cell(&self) -> f64 {
        match self {
            ElectrodeMaterial::Lead => 2.0,
            ElectrodeMaterial::Graphene => 3.0,
            ElectrodeMaterial::Copper => 1.5,
            ElectrodeMaterial::Aluminum => 1.8,
            ElectrodeMaterial::Zinc => 1.6,
            ElectrodeMaterial::Nickel => 1.4,
        }
    }

    /// Bulk electrical conductivity (S/m).
    /// Carried for reporting; the resistance model is electrolyte-limited.
    pub fn conductivity(&self) -> f64 {
        match self {
            ElectrodeMaterial::Lead => 4.8e6,
            ElectrodeMaterial::Graphene => 1.0e8,
            ElectrodeMaterial::Copper => 5.8e7,
            ElectrodeMaterial::Aluminum => 3.8e7,
            ElectrodeMaterial::Zinc => 1.7e7,
            ElectrodeMaterial::Nickel => 1.4e7,
        }
    }

    /// Display name, also the lookup key
    pub fn display_name(&self) -> &'static str {
        match self {
            ElectrodeMaterial::Lead => "Lead (Pb)",
            ElectrodeMaterial::Graphene => "Graphene",
            ElectrodeMaterial::Copper => "Copper",
            ElectrodeMaterial::Aluminum => "Aluminum",
            ElectrodeMaterial::Zinc => "Zinc",
            ElectrodeMaterial::Nickel => "Nickel",
        }
    }

    /// Look a material up by its exact display name
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        super::catalog::ELECTRODES_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| SimError::UnknownElectrode(name.to_string()))
    }
}

/// All electrode materials, in menu order
pub const ELECTRODE_MATERIALS: &[ElectrodeMaterial] = &[
    ElectrodeMaterial::Lead,
    ElectrodeMaterial::Graphene,
    ElectrodeMaterial::Copper,
    ElectrodeMaterial::Aluminum,
    ElectrodeMaterial::Zinc,
    ElectrodeMaterial::Nickel,
];

impl fmt::Display for ElectrodeMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ElectrodeMaterial {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for ElectrodeMaterial {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<ElectrodeMaterial> for String {
    fn from(material: ElectrodeMaterial) -> Self {
        material.display_name().to_string()
    }
}
