use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    append::{self, AppendArgs},
    clean::{self, CleanArgs},
    design::{self, DesignArgs},
    labels::{self, LabelsArgs},
};
use mstress_core::AnalysisConfig;
use tracing::debug;

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "mstress", about = "Multi-stressor exposure experiment utilities")]
struct Cli {
    /// YAML analysis configuration; defaults apply when omitted or absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at info level and report dropped rows while cleaning.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Infer treatment type, level and label for each observation.
    Design(DesignArgs),
    /// Drop rows holding missing values.
    Clean(CleanArgs),
    /// Print unique legend labels for a list of values.
    Labels(LabelsArgs),
    /// Persist a table as one step of an incremental result file.
    Append(AppendArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    config.verbose |= cli.verbose;
    debug!(?config, "loaded analysis configuration");
    match cli.command {
        Command::Design(args) => design::run(&args, &config),
        Command::Clean(args) => clean::run(&args, &config),
        Command::Labels(args) => labels::run(&args, &config),
        Command::Append(args) => append::run(&args, &config),
    }
}
