use log::{debug, info};
use std::path::{Path, PathBuf};

use super::config::SweepConfig;
use super::export::{csv_lines, export_csv, export_json};
use crate::errors::Result;
use crate::plotting::export::{export_plots, ExportFormat};
use crate::profiler;
use crate::simulation::{run_sweep, SimulationResult};

/// What a finished run produced
#[derive(Debug)]
pub struct RunSummary {
    pub results: Vec<SimulationResult>,
    pub csv_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub plot_paths: Vec<PathBuf>,
}

/// Expands a study configuration, sweeps it and writes the outputs
pub struct SweepRunner {
    config: SweepConfig,
    output: PathBuf,
    json_output: Option<PathBuf>,
    plots: Option<(PathBuf, ExportFormat)>,
    echo: bool,
}

impl SweepRunner {
    pub fn new(config: SweepConfig) -> Self {
        let output = PathBuf::from(&config.output);
        Self {
            config,
            output,
            json_output: None,
            plots: None,
            echo: false,
        }
    }

    /// Override the CSV path from the study file
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn with_json(mut self, path: Option<PathBuf>) -> Self {
        self.json_output = path;
        self
    }

    pub fn with_plots(mut self, target: Option<(PathBuf, ExportFormat)>) -> Self {
        self.plots = target;
        self
    }

    /// Print every CSV line to stdout before saving
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Validate and sweep without writing anything
    pub fn simulate(&self) -> Result<Vec<SimulationResult>> {
        self.config.validate()?;
        let configurations = self.config.configurations();
        info!(
            "Running study '{}': {} / {}, {} mode, {} configurations",
            self.config.study_name,
            self.config.electrode,
            self.config.electrolyte,
            self.config.mode,
            configurations.len()
        );
        run_sweep(self.config.electrode, self.config.electrolyte, &configurations)
    }

    /// Sweep, then write the CSV and any requested JSON and plot data
    pub fn run_all(&self) -> Result<RunSummary> {
        let results = self.simulate()?;

        if self.echo {
            for line in csv_lines(&results, self.config.csv_style) {
                println!("{}", line);
            }
        }

        export_csv(&self.output, &results, self.config.csv_style)?;

        if let Some(path) = &self.json_output {
            export_json(path, &results)?;
        }

        let plot_paths = match &self.plots {
            Some((dir, format)) => export_plots(dir, &results, *format)?,
            None => Vec::new(),
        };

        profiler::report();
        debug!("Study '{}' finished", self.config.study_name);

        Ok(RunSummary {
            results,
            csv_path: self.output.clone(),
            json_path: self.json_output.clone(),
            plot_paths,
        })
    }

    /// List all configurations the study expands to
    pub fn list_cases(&self) {
        let configurations = self.config.configurations();
        println!("\nStudy: {}", self.config.study_name);
        println!(
            "Electrode: {} ({} V/cell)",
            self.config.electrode,
            self.config.electrode.voltage_per_cell()
        );
        println!(
            "Electrolyte: {} (resistivity {})",
            self.config.electrolyte,
            self.config.electrolyte.resistivity()
        );
        println!("Mode: {}", self.config.mode);
        println!("Total cases: {}\n", configurations.len());

        for (idx, cfg) in configurations.iter().enumerate() {
            println!(
                "  [{}] area {} cm², gap {} mm, {} cells",
                idx + 1,
                cfg.plate_area_cm2,
                cfg.plate_gap_mm,
                cfg.num_cells
            );
        }
        println!();
    }
}
