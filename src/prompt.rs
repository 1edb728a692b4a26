// prompt.rs
// Interactive input collection. Validation and fallbacks live here so the
// engine only ever sees catalog entries and positive geometry.

use log::{debug, warn};
use std::io::{BufRead, Write};

use crate::config::DEFAULT_PLATE_AREA_CM2;
use crate::electrode::{catalog, ElectrodeMaterial, Electrolyte};
use crate::errors::{Result, SimError};
use crate::simulation::{plate_area_m2, Mode};
use crate::units;

/// Everything the interactive front-end asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub electrode: ElectrodeMaterial,
    pub electrolyte: Electrolyte,
    pub plate_area_cm2: f64,
    pub mode: Mode,
}

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a numbered menu and return the index of the chosen entry.
    /// Re-asks until the answer is a number within the menu.
    pub fn choose_option(&mut self, prompt: &str, options: &[&str]) -> Result<usize> {
        writeln!(self.output, "{}", prompt)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        loop {
            let answer = self
                .read_line("Select number: ")?
                .ok_or(SimError::InputClosed)?;
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(n - 1);
                }
            }
            writeln!(self.output, "Invalid selection. Try again.")?;
        }
    }

    pub fn choose_electrode(&mut self) -> Result<ElectrodeMaterial> {
        let names = catalog::electrode_names();
        let idx = self.choose_option("Choose Electrode Material:", &names)?;
        ElectrodeMaterial::from_name(names[idx])
    }

    pub fn choose_electrolyte(&mut self) -> Result<Electrolyte> {
        let names = catalog::electrolyte_names();
        let idx = self.choose_option("Choose Electrolyte:", &names)?;
        Electrolyte::from_name(names[idx])
    }

    /// Ask for a round plate's diameter. Unusable answers fall back to the default area.
    pub fn read_plate_area(&mut self) -> Result<f64> {
        let answer = self.read_line("Enter plate diameter in cm (round): ")?;
        Ok(plate_area_from_answer(answer.as_deref()))
    }

    pub fn read_mode(&mut self) -> Result<Mode> {
        let answer = self.read_line("Choose mode (power or endurance): ")?;
        Ok(Mode::normalize(answer.as_deref()))
    }

    /// Electrode, electrolyte, diameter, mode
    pub fn collect_session(&mut self) -> Result<Session> {
        let electrode = self.choose_electrode()?;
        let electrolyte = self.choose_electrolyte()?;
        let plate_area_cm2 = self.read_plate_area()?;
        let mode = self.read_mode()?;
        debug!(
            "Session: {} / {}, {:.2} cm², {} mode",
            electrode, electrolyte, plate_area_cm2, mode
        );
        Ok(Session {
            electrode,
            electrolyte,
            plate_area_cm2,
            mode,
        })
    }
}

/// Plate area for a diameter answer. Falls back to the default when the answer
/// is missing or unparsable, or when the area it yields is unusable.
pub fn plate_area_from_answer(answer: Option<&str>) -> f64 {
    let area = answer
        .and_then(|a| a.trim().parse::<f64>().ok())
        .filter(|d| *d > 0.0)
        .map(units::circular_area_cm2);
    match area {
        Some(area) if plate_area_m2(area).is_ok() => area,
        _ => {
            warn!(
                "Unusable plate diameter {:?}, using {} cm²",
                answer, DEFAULT_PLATE_AREA_CM2
            );
            DEFAULT_PLATE_AREA_CM2
        }
    }
}
