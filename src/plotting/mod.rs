// plotting/mod.rs
// Plot data built from sweep results: two scatter plots and two box plots

use palette::{Hsluv, IntoColor, Srgba};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::simulation::SimulationResult;

pub mod analysis;
pub mod export;

pub use analysis::BoxStats;
pub use export::{export_plot_data, export_plots};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlotKind {
    EnergyVsPower,        // Scatter, hue = plate gap
    ResistanceVsDuration, // Scatter, hue = cells
    PowerByGap,           // Box per plate gap
    ChargeTimeByCells,    // Box per cell count
}

pub const ALL_PLOTS: [PlotKind; 4] = [
    PlotKind::EnergyVsPower,
    PlotKind::ResistanceVsDuration,
    PlotKind::PowerByGap,
    PlotKind::ChargeTimeByCells,
];

impl PlotKind {
    pub fn title(&self) -> &'static str {
        match self {
            PlotKind::EnergyVsPower => "Energy Capacity vs Power Output",
            PlotKind::ResistanceVsDuration => "Resistance vs Discharge Duration",
            PlotKind::PowerByGap => "Power Output by Plate Gap",
            PlotKind::ChargeTimeByCells => "Charge Time by Number of Cells",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            PlotKind::EnergyVsPower => "energy_vs_power",
            PlotKind::ResistanceVsDuration => "resistance_vs_duration",
            PlotKind::PowerByGap => "power_by_gap",
            PlotKind::ChargeTimeByCells => "charge_time_by_cells",
        }
    }

    /// (x axis, y axis)
    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            PlotKind::EnergyVsPower => ("Estimated Energy (Wh)", "Power Output (W)"),
            PlotKind::ResistanceVsDuration => ("Resistance (Ohms)", "Estimated Discharge Duration (s)"),
            PlotKind::PowerByGap => ("Plate Gap (mm)", "Power Output (W)"),
            PlotKind::ChargeTimeByCells => ("Cells", "Approx. Charge Time (min)"),
        }
    }

    /// Only drawable when results carry endurance estimates
    pub fn requires_endurance(&self) -> bool {
        matches!(self, PlotKind::EnergyVsPower | PlotKind::ResistanceVsDuration)
    }
}

/// Colour ramps for scatter hue groups
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HueRamp {
    /// Purple through teal to yellow-green
    Viridis,
    /// Near-black through magenta to pale orange
    Magma,
}

impl HueRamp {
    /// RGBA colour at position `t` in [0, 1] along the ramp
    pub fn color_at(&self, t: f32) -> [u8; 4] {
        let t = t.clamp(0.0, 1.0);
        let (h0, h1, l0, l1, s) = match self {
            HueRamp::Viridis => (280.0, 100.0, 25.0, 88.0, 85.0),
            HueRamp::Magma => (265.0, 40.0, 8.0, 85.0, 90.0),
        };
        let h = h0 + (h1 - h0) * t;
        let l = l0 + (l1 - l0) * t;
        let c: Hsluv = Hsluv::new(h, s, l);
        let rgba: Srgba = c.into_color();
        [
            (rgba.red.clamp(0.0, 1.0) * 255.0) as u8,
            (rgba.green.clamp(0.0, 1.0) * 255.0) as u8,
            (rgba.blue.clamp(0.0, 1.0) * 255.0) as u8,
            (rgba.alpha.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub hue: f64,
    pub color: [u8; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGroup {
    pub key: f64,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotSeries {
    Scatter(Vec<ScatterPoint>),
    Box(Vec<BoxGroup>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub kind: PlotKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: PlotSeries,
    pub metadata: BTreeMap<String, String>,
}

/// Build one plot. `None` when the plot needs endurance data the results lack,
/// or when there are no results at all.
pub fn build_plot(kind: PlotKind, results: &[SimulationResult]) -> Option<PlotData> {
    if results.is_empty() {
        return None;
    }
    if kind.requires_endurance() && results.iter().all(|r| r.endurance.is_none()) {
        return None;
    }
    let series = match kind {
        PlotKind::EnergyVsPower => {
            let points: Vec<(f64, f64, f64)> = results
                .iter()
                .filter_map(|r| r.energy_wh().map(|e| (e, r.power, r.plate_gap_mm)))
                .collect();
            PlotSeries::Scatter(color_points(&points, HueRamp::Viridis)?)
        }
        PlotKind::ResistanceVsDuration => {
            let points: Vec<(f64, f64, f64)> = results
                .iter()
                .filter_map(|r| r.discharge_duration_s().map(|d| (r.resistance, d, f64::from(r.cells))))
                .collect();
            PlotSeries::Scatter(color_points(&points, HueRamp::Magma)?)
        }
        PlotKind::PowerByGap => PlotSeries::Box(box_groups(
            results.iter().map(|r| (r.plate_gap_mm, r.power)),
        )),
        PlotKind::ChargeTimeByCells => PlotSeries::Box(box_groups(
            results.iter().map(|r| (f64::from(r.cells), r.charge_time_min)),
        )),
    };

    let (x_label, y_label) = kind.axis_labels();
    let mut metadata = BTreeMap::new();
    metadata.insert("Electrode".to_string(), results[0].electrode.to_string());
    metadata.insert("Electrolyte".to_string(), results[0].electrolyte.to_string());
    metadata.insert("Results".to_string(), results.len().to_string());
    if let Some(hue) = match kind {
        PlotKind::EnergyVsPower => Some("Plate Gap (mm)"),
        PlotKind::ResistanceVsDuration => Some("Cells"),
        _ => None,
    } {
        metadata.insert("Hue".to_string(), hue.to_string());
    }

    Some(PlotData {
        kind,
        title: kind.title().to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        series,
        metadata,
    })
}

/// Every plot the results support, in the standard order
pub fn build_all(results: &[SimulationResult]) -> Vec<PlotData> {
    ALL_PLOTS
        .iter()
        .filter_map(|&kind| build_plot(kind, results))
        .collect()
}

fn color_points(points: &[(f64, f64, f64)], ramp: HueRamp) -> Option<Vec<ScatterPoint>> {
    if points.is_empty() {
        return None;
    }
    let mut hues: Vec<f64> = points.iter().map(|p| p.2).collect();
    hues.sort_by(f64::total_cmp);
    hues.dedup();
    let span = (hues.len().max(2) - 1) as f32;

    Some(
        points
            .iter()
            .map(|&(x, y, hue)| {
                let rank = hues.iter().position(|h| *h == hue).unwrap_or(0);
                ScatterPoint {
                    x,
                    y,
                    hue,
                    color: ramp.color_at(rank as f32 / span),
                }
            })
            .collect(),
    )
}

fn box_groups(pairs: impl Iterator<Item = (f64, f64)>) -> Vec<BoxGroup> {
    analysis::group_by_key(pairs)
        .into_iter()
        .filter_map(|(key, values)| BoxStats::from_values(&values).map(|stats| BoxGroup { key, stats }))
        .collect()
}
