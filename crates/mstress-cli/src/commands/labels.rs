use std::error::Error;

use clap::Args;
use mstress_core::AnalysisConfig;
use mstress_design::legend_labels;
use mstress_num::parse_vector;

#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Values such as "0.1, 1, 10" or "c(0.1, 1, 10)".
    #[arg(long)]
    pub values: String,
    /// Significant digits; overrides the configuration.
    #[arg(long)]
    pub digits: Option<u32>,
}

pub fn run(args: &LabelsArgs, config: &AnalysisConfig) -> Result<(), Box<dyn Error>> {
    let values = parse_vector(&args.values)?;
    let digits = args.digits.unwrap_or(config.significant_digits);
    for label in legend_labels(&values, digits)? {
        println!("{label}");
    }
    Ok(())
}
