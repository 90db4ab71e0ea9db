use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use mstress_core::AnalysisConfig;
use mstress_table::{drop_incomplete, persist, read_w3c};

#[derive(Args, Debug)]
pub struct CleanArgs {
    #[arg(long)]
    pub input: PathBuf,
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &CleanArgs, config: &AnalysisConfig) -> Result<(), Box<dyn Error>> {
    let document = read_w3c(&args.input, config)?;
    let report = drop_incomplete(&document.table, config);
    persist(&args.out, &report.table, 1)?;
    println!("dropped {} of {} rows", report.dropped, document.table.len());
    Ok(())
}
