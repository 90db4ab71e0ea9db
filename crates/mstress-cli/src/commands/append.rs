use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use mstress_core::AnalysisConfig;
use mstress_table::{persist, read_w3c};

#[derive(Args, Debug)]
pub struct AppendArgs {
    #[arg(long)]
    pub input: PathBuf,
    #[arg(long)]
    pub out: PathBuf,
    /// 1 starts the result file, later steps append to it.
    #[arg(long)]
    pub step: usize,
}

pub fn run(args: &AppendArgs, config: &AnalysisConfig) -> Result<(), Box<dyn Error>> {
    let document = read_w3c(&args.input, config)?;
    persist(&args.out, &document.table, args.step)?;
    Ok(())
}
