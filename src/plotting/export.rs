// plotting/export.rs
// Data export functionality for plots

use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{PlotData, PlotSeries};
use crate::errors::{Result, SimError};
use crate::simulation::SimulationResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    CSV,
    JSON,
    TSV,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::CSV => "csv",
            ExportFormat::JSON => "json",
            ExportFormat::TSV => "tsv",
        }
    }
}

/// Write one plot's data into `dir`, returning the file path
pub fn export_plot_data(data: &PlotData, dir: &Path, format: ExportFormat) -> Result<PathBuf> {
    let content = match format {
        ExportFormat::CSV => export_csv(data),
        ExportFormat::JSON => export_json(data)?,
        ExportFormat::TSV => export_tsv(data),
    };

    std::fs::create_dir_all(dir).map_err(|e| SimError::file(dir, e))?;
    let path = dir.join(format!("{}.{}", data.kind.file_stem(), format.extension()));
    std::fs::write(&path, content).map_err(|e| SimError::file(&path, e))?;
    Ok(path)
}

/// Build and export every plot the results support
pub fn export_plots(dir: &Path, results: &[SimulationResult], format: ExportFormat) -> Result<Vec<PathBuf>> {
    let paths = super::build_all(results)
        .iter()
        .map(|plot| export_plot_data(plot, dir, format))
        .collect::<Result<Vec<_>>>()?;
    info!("Wrote {} plot data files to {}", paths.len(), dir.display());
    Ok(paths)
}

fn export_csv(data: &PlotData) -> String {
    let mut content = String::new();

    // Header
    content.push_str("# Plot Data Export\n");
    content.push_str(&format!("# Title: {}\n", data.title));
    content.push_str(&format!("# Plot Type: {:?}\n", data.kind));
    for (key, value) in &data.metadata {
        content.push_str(&format!("# {}: {}\n", key, value));
    }
    content.push('\n');

    match &data.series {
        PlotSeries::Scatter(points) => {
            content.push_str(&format!("{},{},Hue,Color\n", data.x_label, data.y_label));
            for p in points {
                content.push_str(&format!(
                    "{},{},{},#{:02x}{:02x}{:02x}\n",
                    p.x, p.y, p.hue, p.color[0], p.color[1], p.color[2]
                ));
            }
        }
        PlotSeries::Box(groups) => {
            content.push_str(&format!("{},Count,Min,Q1,Median,Q3,Max\n", data.x_label));
            for g in groups {
                let s = &g.stats;
                content.push_str(&format!(
                    "{},{},{},{},{},{},{}\n",
                    g.key, s.count, s.min, s.q1, s.median, s.q3, s.max
                ));
            }
        }
    }

    content
}

fn export_json(data: &PlotData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn export_tsv(data: &PlotData) -> String {
    export_csv(data).replace(',', "\t")
}
