use super::super::args::RunArgs;
use super::runner_builder::{build_client, resolve_taxonomy};
use crate::exit_codes::{BELOW_THRESHOLD, SUCCESS};
use anyhow::Context;
use followup_core::dataset::{read_records, ResultWriter};
use followup_core::engine::{RunOptions, Runner};
use followup_core::gateway::ClassifierGateway;
use followup_core::report::console::print_run_summary;
use followup_core::report::{write_summary, RunSummary};
use followup_core::scoring::format_accuracy;
use std::path::PathBuf;

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let taxonomy = resolve_taxonomy(&args.selector)?;
    let client = build_client(&args.provider)?;

    let records = read_records(&args.input, &taxonomy.ground_truth_column)
        .with_context(|| format!("failed to load dataset {}", args.input.display()))?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}_model_responses.csv", taxonomy.name)));
    let mut writer = ResultWriter::create(&output, &taxonomy.ground_truth_column)
        .with_context(|| format!("failed to create output {}", output.display()))?;

    let runner = Runner::new(
        ClassifierGateway::new(client),
        taxonomy,
        RunOptions {
            few_shot: args.few_shot,
            concurrency: usize::from(args.concurrency),
        },
    );
    let aggregate = runner.run(&records, &mut writer).await?;
    tracing::info!(rows = writer.rows(), path = %output.display(), "wrote results");

    print_run_summary(&aggregate, &output);

    if let Some(path) = &args.summary_json {
        let summary = RunSummary::new(
            &runner.taxonomy().name,
            runner.gateway().provider_name(),
            runner.gateway().model(),
            runner.codec(),
            &aggregate,
        );
        write_summary(&summary, path)
            .with_context(|| format!("failed to write summary {}", path.display()))?;
    }

    if let Some(min) = args.min_accuracy {
        if aggregate.accuracy() < min {
            tracing::warn!(
                accuracy = %format_accuracy(aggregate.accuracy()),
                threshold = %format_accuracy(min),
                "accuracy below threshold"
            );
            return Ok(BELOW_THRESHOLD);
        }
    }
    Ok(SUCCESS)
}
