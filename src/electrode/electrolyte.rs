// electrode/electrolyte.rs
// Electrolytes that fill the gap between plates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SimError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Electrolyte {
    SulfuricAcid,
    SodiumHydroxide,
    SaltWater,
    PotassiumHydroxide,
    HydrochloricAcid,
    PhosphoricAcid,
}

impl Electrolyte {
    /// Resistivity (Ω·m). Works as a scaling constant in the gap resistance model.
    pub fn resistivity(&self) -> f64 {
        match self {
            Electrolyte::SulfuricAcid => 0.8,
            Electrolyte::SodiumHydroxide => 0.5,
            Electrolyte::SaltWater => 2.0,
            Electrolyte::PotassiumHydroxide => 0.4,
            Electrolyte::HydrochloricAcid => 1.0,
            Electrolyte::PhosphoricAcid => 1.5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Electrolyte::SulfuricAcid => "Sulfuric Acid (H2SO4)",
            Electrolyte::SodiumHydroxide => "Sodium Hydroxide (NaOH)",
            Electrolyte::SaltWater => "Salt Water",
            Electrolyte::PotassiumHydroxide => "Potassium Hydroxide (KOH)",
            Electrolyte::HydrochloricAcid => "Hydrochloric Acid (HCl)",
            Electrolyte::PhosphoricAcid => "Phosphoric Acid",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, SimError> {
        super::catalog::ELECTROLYTES_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| SimError::UnknownElectrolyte(name.to_string()))
    }
}

/// All electrolytes, in menu order
pub const ELECTROLYTES: &[Electrolyte] = &[
    Electrolyte::SulfuricAcid,
    Electrolyte::SodiumHydroxide,
    Electrolyte::SaltWater,
    Electrolyte::PotassiumHydroxide,
    Electrolyte::HydrochloricAcid,
    Electrolyte::PhosphoricAcid,
];

impl fmt::Display for Electrolyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Electrolyte {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Electrolyte {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<Electrolyte> for String {
    fn from(electrolyte: Electrolyte) -> Self {
        electrolyte.display_name().to_string()
    }
}
