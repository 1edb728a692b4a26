//! Export sweep results to CSV and JSON
use log::info;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::{Result, SimError};
use crate::profile_scope;
use crate::simulation::SimulationResult;

/// Column naming and number formatting of the CSV output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvStyle {
    /// Short ASCII headers, fixed decimals
    #[default]
    Compact,
    /// Descriptive headers, full precision
    Detailed,
}

const COMPACT_COLUMNS: [&str; 10] = [
    "Electrode",
    "Electrolyte",
    "Plate Area (cm2)",
    "Plate Gap (mm)",
    "Cells",
    "Voltage (V)",
    "Resistance (Ohm)",
    "Max Current (A)",
    "Power (W)",
    "Charge Time (min)",
];
const COMPACT_ENDURANCE_COLUMNS: [&str; 3] = ["Energy (Wh)", "Energy (J)", "Duration (s)"];

const DETAILED_COLUMNS: [&str; 10] = [
    "Electrode",
    "Electrolyte",
    "Plate Area (cm²)",
    "Plate Gap (mm)",
    "Cells",
    "Voltage (V)",
    "Resistance (Ohms)",
    "Max Current (A)",
    "Power Output (W)",
    "Approx. Charge Time (min)",
];
const DETAILED_ENDURANCE_COLUMNS: [&str; 3] = [
    "Estimated Energy (Wh)",
    "Estimated Energy (J)",
    "Estimated Discharge Duration (s)",
];

impl CsvStyle {
    pub fn header(&self, with_endurance: bool) -> String {
        let (base, extra): (&[&str], &[&str]) = match self {
            CsvStyle::Compact => (&COMPACT_COLUMNS, &COMPACT_ENDURANCE_COLUMNS),
            CsvStyle::Detailed => (&DETAILED_COLUMNS, &DETAILED_ENDURANCE_COLUMNS),
        };
        let mut columns: Vec<&str> = base.to_vec();
        if with_endurance {
            columns.extend_from_slice(extra);
        }
        columns.join(",")
    }

    pub fn row(&self, r: &SimulationResult, with_endurance: bool) -> String {
        let mut line = format!(
            "{},{},{},{},{}",
            csv_field(r.electrode.display_name()),
            csv_field(r.electrolyte.display_name()),
            r.plate_area_cm2,
            gap_field(r.plate_gap_mm),
            r.cells
        );
        match self {
            CsvStyle::Compact => line.push_str(&format!(
                ",{:.2},{:.4},{:.1},{:.1},{:.3}",
                r.voltage, r.resistance, r.max_current, r.power, r.charge_time_min
            )),
            CsvStyle::Detailed => line.push_str(&format!(
                ",{},{},{},{},{}",
                r.voltage, r.resistance, r.max_current, r.power, r.charge_time_min
            )),
        }
        if with_endurance {
            match (self, r.endurance) {
                (CsvStyle::Compact, Some(e)) => line.push_str(&format!(
                    ",{:.2},{:.2},{:.2}",
                    e.energy_wh, e.energy_j, e.discharge_duration_s
                )),
                (CsvStyle::Detailed, Some(e)) => line.push_str(&format!(
                    ",{},{},{}",
                    e.energy_wh, e.energy_j, e.discharge_duration_s
                )),
                // Result from a power-mode run in a mixed set
                (_, None) => line.push_str(",,,"),
            }
        }
        line
    }
}

/// True when at least one result carries endurance estimates
pub fn has_endurance(results: &[SimulationResult]) -> bool {
    results.iter().any(|r| r.endurance.is_some())
}

/// Header line followed by one line per result, in result order
pub fn csv_lines(results: &[SimulationResult], style: CsvStyle) -> Vec<String> {
    let with_endurance = has_endurance(results);
    std::iter::once(style.header(with_endurance))
        .chain(results.iter().map(|r| style.row(r, with_endurance)))
        .collect()
}

/// Lines are newline-separated; the last row has no trailing newline.
pub fn write_csv<W: Write>(writer: &mut W, results: &[SimulationResult], style: CsvStyle) -> Result<()> {
    write!(writer, "{}", csv_lines(results, style).join("\n"))?;
    Ok(())
}

/// Write the results to a CSV file, creating parent directories as needed
pub fn export_csv<P: AsRef<Path>>(path: P, results: &[SimulationResult], style: CsvStyle) -> Result<()> {
    profile_scope!("export_csv");
    let path = path.as_ref();
    let file = create_file(path)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, results, style)?;
    writer.flush().map_err(|e| SimError::file(path, e))?;
    info!("Exported {} results to {}", results.len(), path.display());
    Ok(())
}

/// Write the results as a pretty-printed JSON array
pub fn export_json<P: AsRef<Path>>(path: P, results: &[SimulationResult]) -> Result<()> {
    let path = path.as_ref();
    let file = create_file(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush().map_err(|e| SimError::file(path, e))?;
    info!("Exported JSON results to {}", path.display());
    Ok(())
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SimError::file(parent, e))?;
    }
    File::create(path).map_err(|e| SimError::file(path, e))
}

/// Gaps always carry a decimal point, so a 1 mm gap is written as `1.0`
fn gap_field(gap_mm: f64) -> String {
    if gap_mm.is_finite() && gap_mm.fract() == 0.0 {
        format!("{:.1}", gap_mm)
    } else {
        gap_mm.to_string()
    }
}

/// Quote a field if it contains a separator, quote or newline
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::electrode::{ElectrodeMaterial, Electrolyte};
    use crate::simulation::{run_sweep, simulate, CellConfiguration, Mode};

    fn lead_acid(mode: Mode) -> SimulationResult {
        simulate("Lead (Pb)", "Sulfuric Acid (H2SO4)", 1200.0, 0.5, 3, mode).unwrap()
    }

    #[test]
    fn compact_endurance_row_matches_fixed_precision() {
        let lines = csv_lines(&[lead_acid(Mode::Endurance)], CsvStyle::Compact);
        assert_eq!(
            lines[0],
            "Electrode,Electrolyte,Plate Area (cm2),Plate Gap (mm),Cells,Voltage (V),Resistance (Ohm),Max Current (A),Power (W),Charge Time (min),Energy (Wh),Energy (J),Duration (s)"
        );
        assert_eq!(
            lines[1],
            "Lead (Pb),Sulfuric Acid (H2SO4),1200,0.5,3,6.00,0.0033,1800.0,10800.0,0.072,54.00,194400.00,18.00"
        );
    }

    #[test]
    fn power_mode_header_has_no_endurance_columns() {
        let lines = csv_lines(&[lead_acid(Mode::Power)], CsvStyle::Compact);
        assert_eq!(lines[0].split(',').count(), 10);
        assert_eq!(lines[1].split(',').count(), 10);
        assert!(!lines[0].contains("Energy"));
    }

    #[test]
    fn detailed_header_uses_descriptive_names() {
        let lines = csv_lines(&[lead_acid(Mode::Endurance)], CsvStyle::Detailed);
        assert!(lines[0].starts_with("Electrode,Electrolyte,Plate Area (cm²)"));
        assert!(lines[0].ends_with("Estimated Discharge Duration (s)"));
        assert_eq!(lines[1].split(',').count(), 13);
    }

    #[test]
    fn mixed_modes_leave_endurance_cells_empty() {
        let results = vec![lead_acid(Mode::Endurance), lead_acid(Mode::Power)];
        let lines = csv_lines(&results, CsvStyle::Compact);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with(",,,"));
        assert_eq!(lines[2].split(',').count(), 13);
    }

    #[test]
    fn rows_follow_sweep_order() {
        let configs: Vec<_> = [3, 6, 9]
            .iter()
            .map(|&c| CellConfiguration::new(800.0, 1.0, c, Mode::Power))
            .collect();
        let results = run_sweep(ElectrodeMaterial::Copper, Electrolyte::SaltWater, &configs).unwrap();
        let mut out = Vec::new();
        write_csv(&mut out, &results, CsvStyle::Compact).unwrap();
        let text = String::from_utf8(out).unwrap();
        let cells: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(4).unwrap())
            .collect();
        assert_eq!(cells, vec!["3", "6", "9"]);
    }

    #[test]
    fn whole_gaps_keep_a_decimal_point() {
        let r = simulate("Lead (Pb)", "Sulfuric Acid (H2SO4)", 400.0, 1.0, 3, Mode::Endurance).unwrap();
        let row = CsvStyle::Compact.row(&r, true);
        assert!(row.starts_with("Lead (Pb),Sulfuric Acid (H2SO4),400,1.0,3,"), "{}", row);
        assert_eq!(gap_field(0.5), "0.5");
        assert_eq!(gap_field(2.0), "2.0");
    }

    #[test]
    fn file_has_no_trailing_newline() {
        let mut out = Vec::new();
        write_csv(&mut out, &[lead_acid(Mode::Endurance), lead_acid(Mode::Power)], CsvStyle::Compact).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.ends_with('\n'));
        assert_eq!(text.split('\n').count(), 3);
    }

    #[test]
    fn quotes_fields_with_separators() {
        assert_eq!(csv_field("Salt Water"), "Salt Water");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn export_writes_file_in_new_directory() {
        let dir = std::env::temp_dir().join(format!("kapitza_export_{}", std::process::id()));
        let path = dir.join("nested").join("out.csv");
        export_csv(&path, &[lead_acid(Mode::Endurance)], CsvStyle::Compact).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);

        let json_path = dir.join("out.json");
        export_json(&json_path, &[lead_acid(Mode::Power)]).unwrap();
        let parsed: Vec<SimulationResult> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].endurance.is_none());

        std::fs::remove_dir_all(&dir).ok();
    }
}
