use clap::{Parser, Subcommand};

pub mod common;
pub mod run;
pub mod taxonomy;
pub use common::*;
pub use run::*;
pub use taxonomy::*;

#[derive(Parser)]
#[command(
    name = "followup",
    version,
    about = "Evaluate an LLM classifier of follow-up query purpose against hand-coded labels"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify every transcript in the input table and report accuracy
    Run(RunArgs),
    /// Inspect or export the label taxonomies
    Taxonomy(TaxonomyArgs),
    Version,
}
