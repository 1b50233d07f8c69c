use super::super::args::{TaxonomyExportArgs, TaxonomyListArgs};
use super::runner_builder::resolve_taxonomy;
use crate::exit_codes::SUCCESS;
use anyhow::Context;
use followup_core::config::taxonomy_to_yaml;

pub fn cmd_list(args: TaxonomyListArgs) -> anyhow::Result<i32> {
    let taxonomy = resolve_taxonomy(&args.selector)?;
    for cat in &taxonomy.categories {
        println!("{}\t{}", cat.code, cat.label);
    }
    Ok(SUCCESS)
}

pub fn cmd_export(args: TaxonomyExportArgs) -> anyhow::Result<i32> {
    let taxonomy = resolve_taxonomy(&args.selector)?;
    let yaml = taxonomy_to_yaml(&taxonomy)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, yaml)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), taxonomy = taxonomy.name.as_str(), "exported taxonomy");
        }
        None => print!("{}", yaml),
    }
    Ok(SUCCESS)
}
