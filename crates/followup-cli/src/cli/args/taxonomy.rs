use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::TaxonomySelector;

#[derive(Parser, Debug, Clone)]
pub struct TaxonomyArgs {
    #[command(subcommand)]
    pub cmd: TaxonomySub,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TaxonomySub {
    /// Print `code<TAB>label` per category
    List(TaxonomyListArgs),
    /// Write the taxonomy as YAML, a starting point for custom files
    Export(TaxonomyExportArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct TaxonomyListArgs {
    #[command(flatten)]
    pub selector: TaxonomySelector,
}

#[derive(Parser, Debug, Clone)]
pub struct TaxonomyExportArgs {
    #[command(flatten)]
    pub selector: TaxonomySelector,

    /// Destination file (default: stdout)
    #[arg(long)]
    pub out: Option<PathBuf>,
}
