use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config;
use crate::plotting::export::ExportFormat;

/// Logging flags shared by both binaries
#[derive(Args, Debug, Clone)]
pub struct LogOpts {
    /// Show all log messages
    #[arg(short = 'v', long, conflicts_with = "silent", global = true)]
    pub verbose: bool,

    /// Show only warnings and errors
    #[arg(short = 's', long, global = true)]
    pub silent: bool,
}

/// Plot data output flags
#[derive(Args, Debug, Clone)]
pub struct PlotOpts {
    /// Also write the data behind the four standard plots
    #[arg(long)]
    pub plots: bool,

    /// Directory for plot data files
    #[arg(long, default_value = config::PLOT_OUTPUT_DIR)]
    pub plot_dir: PathBuf,

    /// Plot data file format
    #[arg(long, value_enum, default_value_t = PlotFormat::Csv)]
    pub plot_format: PlotFormat,
}

impl PlotOpts {
    /// Directory and format when plot output is requested
    pub fn target(&self) -> Option<(PathBuf, ExportFormat)> {
        self.plots
            .then(|| (self.plot_dir.clone(), self.plot_format.into()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlotFormat {
    Csv,
    Json,
    Tsv,
}

impl From<PlotFormat> for ExportFormat {
    fn from(format: PlotFormat) -> Self {
        match format {
            PlotFormat::Csv => ExportFormat::CSV,
            PlotFormat::Json => ExportFormat::JSON,
            PlotFormat::Tsv => ExportFormat::TSV,
        }
    }
}
