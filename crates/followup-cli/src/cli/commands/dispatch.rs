use super::super::args::*;
use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => super::run::run(args).await,
        Command::Taxonomy(args) => match args.cmd {
            TaxonomySub::List(list_args) => super::taxonomy::cmd_list(list_args),
            TaxonomySub::Export(export_args) => super::taxonomy::cmd_export(export_args),
        },
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
