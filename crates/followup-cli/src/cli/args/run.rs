use std::path::PathBuf;

use clap::Parser;

use super::{ProviderArgs, TaxonomySelector};

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub selector: TaxonomySelector,

    /// Input table with a `query` column and the taxonomy's ground-truth column
    #[arg(long, default_value = "Manualcodingoutput.csv")]
    pub input: PathBuf,

    /// Output table (default: <taxonomy>_model_responses.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub provider: ProviderArgs,

    /// Replay the taxonomy's worked examples as chat turns before each query
    #[arg(long)]
    pub few_shot: bool,

    /// Classification calls in flight (output order is unaffected)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Exit 1 when accuracy is below this fraction (0.0..=1.0, e.g. 0.8)
    #[arg(long, value_parser = parse_fraction)]
    pub min_accuracy: Option<f64>,
}

fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside 0.0..=1.0 (use 0.5 for 50%)", value))
    }
}
