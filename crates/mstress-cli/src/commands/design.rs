use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use mstress_core::AnalysisConfig;
use mstress_design::{annotate, ExposureMatrix};
use mstress_table::{persist, read_w3c};

#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Delimited data file; `#` lines are read as metadata.
    #[arg(long)]
    pub input: PathBuf,
    /// Stressor columns in dose-vector order.
    #[arg(long, value_delimiter = ',', required = true)]
    pub stressors: Vec<String>,
    /// Destination for the annotated table.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &DesignArgs, config: &AnalysisConfig) -> Result<(), Box<dyn Error>> {
    let document = read_w3c(&args.input, config)?;
    let matrix = ExposureMatrix::from_table(&document.table, &args.stressors, config)?;
    let assignment = matrix.infer()?;
    let annotated = annotate(&document.table, &assignment)?;
    persist(&args.out, &annotated, 1)?;
    println!(
        "labelled {} observations into {}",
        assignment.len(),
        args.out.display()
    );
    Ok(())
}
