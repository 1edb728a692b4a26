// Interactive front-end: pick a chemistry and plate size, sweep gap × cells,
// save the table (and optionally plot data).

use clap::Parser;
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use kapitza_battery::doe::{SweepConfig, SweepRunner};
use kapitza_battery::opts::{LogOpts, PlotOpts};
use kapitza_battery::prompt::Prompter;
use kapitza_battery::{config, logger, Result};

#[derive(Parser, Debug)]
#[command(name = "kapitza_battery", version, about = "Interactive battery plate sweep")]
struct Cli {
    /// CSV file for the sweep results
    #[arg(short, long, default_value = config::INTERACTIVE_OUTPUT_CSV)]
    output: PathBuf,

    #[command(flatten)]
    plot: PlotOpts,

    #[command(flatten)]
    log: LogOpts,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.log.verbose, cli.log.silent);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let session = Prompter::new(stdin.lock(), io::stdout()).collect_session()?;

    let study = SweepConfig::interactive(
        session.plate_area_cm2,
        session.electrode,
        session.electrolyte,
        session.mode,
    );
    SweepRunner::new(study)
        .with_output(&cli.output)
        .with_plots(cli.plot.target())
        .run_all()?;

    if cli.plot.plots {
        println!("Simulation complete. Results saved to CSV and plots folder.");
    } else {
        println!("Simulation complete. Results saved to {}.", cli.output.display());
    }
    Ok(())
}
