//! CLI tool for running batch geometry sweep studies
use clap::{Parser, Subcommand};
use log::error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use kapitza_battery::doe::{SweepConfig, SweepRunner};
use kapitza_battery::opts::{LogOpts, PlotOpts};
use kapitza_battery::{logger, Result};

#[derive(Parser, Debug)]
#[command(name = "sweep_runner", version, about = "Batch battery geometry sweeps")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    log: LogOpts,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the built-in light study as a TOML file
    Generate {
        /// Output file name
        file: PathBuf,
    },
    /// List all configurations in a study
    List {
        /// Study configuration file
        file: PathBuf,
    },
    /// Run a study file
    Run {
        /// Study configuration file
        file: PathBuf,

        #[command(flatten)]
        outputs: RunOpts,
    },
    /// Run the built-in light study (lead plates in sulfuric acid)
    Light {
        #[command(flatten)]
        outputs: RunOpts,
    },
}

#[derive(clap::Args, Debug)]
struct RunOpts {
    /// Override the CSV path from the study
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the results as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Do not echo the CSV lines to stdout
    #[arg(short, long)]
    quiet: bool,

    #[command(flatten)]
    plot: PlotOpts,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.log.verbose, cli.log.silent);

    let outcome = match &cli.command {
        Command::Generate { file } => generate(file),
        Command::List { file } => list(file),
        Command::Run { file, outputs } => SweepConfig::from_file(file).and_then(|c| run(c, outputs)),
        Command::Light { outputs } => run(SweepConfig::light_default(), outputs),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate(file: &Path) -> Result<()> {
    let config = SweepConfig::light_default();
    config.to_file(file)?;
    println!("Study configuration generated: {}", file.display());
    println!("Total cases: {}", config.configurations().len());
    Ok(())
}

fn list(file: &Path) -> Result<()> {
    SweepRunner::new(SweepConfig::from_file(file)?).list_cases();
    Ok(())
}

fn run(config: SweepConfig, outputs: &RunOpts) -> Result<()> {
    let mut runner = SweepRunner::new(config)
        .with_json(outputs.json.clone())
        .with_plots(outputs.plot.target())
        .echo(!outputs.quiet);
    if let Some(path) = &outputs.output {
        runner = runner.with_output(path);
    }

    let summary = runner.run_all()?;
    println!("\nSaved to {}", summary.csv_path.display());
    for path in &summary.plot_paths {
        println!("Plot data: {}", path.display());
    }
    Ok(())
}
