use crate::dataset::ResultSink;
use crate::gateway::ClassifierGateway;
use crate::model::{ClassificationResult, TranscriptRecord};
use crate::prompt::{PromptBuilder, PromptOptions};
use crate::scoring::{self, RunAggregate};
use crate::taxonomy::{Taxonomy, TaxonomyCodec};
use anyhow::Context;
use futures::stream::{self, StreamExt, TryStreamExt};

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub few_shot: bool,
    /// Classification calls in flight; `1` is strictly sequential.
    pub concurrency: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            few_shot: false,
            concurrency: 1,
        }
    }
}

/// Drives one evaluation pass: prompt, classify, decode, score, write, fold.
pub struct Runner {
    gateway: ClassifierGateway,
    taxonomy: Taxonomy,
    codec: TaxonomyCodec,
    prompts: PromptBuilder,
    options: RunOptions,
}

impl Runner {
    pub fn new(gateway: ClassifierGateway, taxonomy: Taxonomy, options: RunOptions) -> Self {
        let codec = taxonomy.codec();
        let prompts = PromptBuilder::new(
            &taxonomy,
            PromptOptions {
                few_shot: options.few_shot,
            },
        );
        Self {
            gateway,
            taxonomy,
            codec,
            prompts,
            options,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn gateway(&self) -> &ClassifierGateway {
        &self.gateway
    }

    pub fn codec(&self) -> &TaxonomyCodec {
        &self.codec
    }

    /// Classifies every record and streams verdicts to `sink` in input order.
    ///
    /// Calls may overlap up to `concurrency`, but decoding, scoring, writing and
    /// the aggregate fold happen here, one record at a time. The first
    /// classifier failure aborts the run; rows already written stay written.
    pub async fn run(
        &self,
        records: &[TranscriptRecord],
        sink: &mut dyn ResultSink,
    ) -> anyhow::Result<RunAggregate> {
        let multi_label = self.taxonomy.is_multi_label();
        let concurrency = self.options.concurrency.max(1);
        tracing::info!(
            taxonomy = self.taxonomy.name.as_str(),
            provider = self.gateway.provider_name(),
            model = self.gateway.model(),
            records = records.len(),
            concurrency,
            "starting classification run"
        );

        let mut replies = stream::iter(records.iter().map(|record| async move {
            let request = self.prompts.build(record);
            self.gateway
                .classify(&request)
                .await
                .with_context(|| format!("classification failed at row {}", record.row))
                .map(|text| (record, text))
        }))
        .buffered(concurrency);

        let mut aggregate = RunAggregate::default();
        while let Some((record, label_text)) = replies.try_next().await? {
            let result = self.evaluate(record, label_text, multi_label);
            sink.write(&result)
                .with_context(|| format!("failed to write result for row {}", record.row))?;
            aggregate.record(&result, multi_label);
        }

        tracing::info!(
            total = aggregate.total,
            correct = aggregate.correct,
            unrecognized = aggregate.unrecognized,
            accuracy = aggregate.accuracy(),
            "classification run finished"
        );
        Ok(aggregate)
    }

    fn evaluate(
        &self,
        record: &TranscriptRecord,
        label_text: String,
        multi_label: bool,
    ) -> ClassificationResult {
        let predicted = self.codec.decode(&label_text);
        if TaxonomyCodec::is_sentinel(&predicted) {
            tracing::debug!(row = record.row, label = label_text.as_str(), "unrecognized label");
        }
        let result = scoring::score(record, label_text, predicted, multi_label);
        tracing::debug!(
            row = result.row,
            predicted = result.predicted_code.as_str(),
            correct = result.is_correct,
            "scored record"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::NO_RESPONSE;
    use crate::providers::llm::fake::{FakeClient, FakeReply};
    use crate::taxonomy::{Axis, SENTINEL_CODE};
    use std::sync::Arc;

    fn record(row: usize, gt: &str) -> TranscriptRecord {
        TranscriptRecord {
            row,
            query: "Q1: X R: Y Q2: Z".into(),
            ground_truth: gt.into(),
        }
    }

    fn runner(client: FakeClient, axis: Axis, concurrency: usize) -> (Runner, Arc<FakeClient>) {
        let client = Arc::new(client);
        let gateway = ClassifierGateway::new(client.clone());
        let runner = Runner::new(
            gateway,
            axis.taxonomy(),
            RunOptions {
                few_shot: false,
                concurrency,
            },
        );
        (runner, client)
    }

    #[tokio::test]
    async fn matching_label_is_correct() {
        let (r, _) = runner(
            FakeClient::new("m".into()).with_response("Narrowing Down"),
            Axis::Axis1,
            1,
        );
        let mut out: Vec<ClassificationResult> = Vec::new();
        let agg = r.run(&[record(1, "4")], &mut out).await.unwrap();
        assert_eq!(out[0].raw_label_text, "Narrowing Down");
        assert_eq!(out[0].predicted_code, "4");
        assert!(out[0].is_correct);
        assert_eq!(agg.accuracy(), 1.0);
    }

    #[tokio::test]
    async fn other_label_is_wrong() {
        let (r, _) = runner(
            FakeClient::new("m".into()).with_response("Exploring Domain"),
            Axis::Axis1,
            1,
        );
        let mut out: Vec<ClassificationResult> = Vec::new();
        r.run(&[record(1, "4")], &mut out).await.unwrap();
        assert_eq!(out[0].predicted_code, "2");
        assert!(!out[0].is_correct);
    }

    #[tokio::test]
    async fn free_text_answer_is_unrecognized() {
        let (r, _) = runner(
            FakeClient::new("m".into()).with_response("I'm not sure, possibly category 4"),
            Axis::Axis1,
            1,
        );
        let mut out: Vec<ClassificationResult> = Vec::new();
        let agg = r.run(&[record(1, "4")], &mut out).await.unwrap();
        assert_eq!(out[0].predicted_code, SENTINEL_CODE);
        assert!(!out[0].is_correct);
        assert_eq!(agg.unrecognized, 1);
    }

    #[tokio::test]
    async fn empty_completion_is_recorded_as_miss() {
        let (r, _) = runner(FakeClient::new("m".into()), Axis::Axis1, 1);
        let mut out: Vec<ClassificationResult> = Vec::new();
        let agg = r.run(&[record(1, "4")], &mut out).await.unwrap();
        assert_eq!(out[0].raw_label_text, NO_RESPONSE);
        assert_eq!(out[0].predicted_code, SENTINEL_CODE);
        assert_eq!(agg.correct, 0);
    }

    #[tokio::test]
    async fn one_of_two_is_half() {
        let (r, _) = runner(
            FakeClient::new("m".into()).with_response("Narrowing Down"),
            Axis::Axis1,
            1,
        );
        let mut out: Vec<ClassificationResult> = Vec::new();
        let agg = r
            .run(&[record(1, "4"), record(2, "2")], &mut out)
            .await
            .unwrap();
        assert_eq!(scoring::format_accuracy(agg.accuracy()), "50.00%");
    }

    #[tokio::test]
    async fn empty_dataset_has_zero_accuracy() {
        let (r, client) = runner(FakeClient::new("m".into()), Axis::Axis1, 1);
        let mut out: Vec<ClassificationResult> = Vec::new();
        let agg = r.run(&[], &mut out).await.unwrap();
        assert!(out.is_empty());
        assert_eq!(agg.accuracy(), 0.0);
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn concurrent_run_keeps_input_order() {
        let script = [
            "Clarifying Queries",
            "Narrowing Down",
            "Exploring Domain",
            "Understanding Response",
        ]
        .map(|s| FakeReply::Text(s.into()));
        let (r, _) = runner(
            FakeClient::new("m".into()).with_script(script),
            Axis::Axis1,
            3,
        );
        let records: Vec<_> = (1..=4).map(|i| record(i, "4")).collect();
        let mut out: Vec<ClassificationResult> = Vec::new();
        r.run(&records, &mut out).await.unwrap();
        let rows: Vec<usize> = out.iter().map(|o| o.row).collect();
        assert_eq!(rows, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn transport_failure_aborts_but_keeps_earlier_rows() {
        let (r, _) = runner(
            FakeClient::new("m".into()).with_script([
                FakeReply::Text("Narrowing Down".into()),
                FakeReply::Fail("connection reset".into()),
            ]),
            Axis::Axis1,
            1,
        );
        let mut out: Vec<ClassificationResult> = Vec::new();
        let err = r
            .run(&[record(1, "4"), record(2, "4"), record(3, "4")], &mut out)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("row 2"));
        assert_eq!(out.len(), 1);
    }

    #[tokio::test]
    async fn compound_axis2_answer_matches_compound_truth() {
        let (r, _) = runner(
            FakeClient::new("m".into())
                .with_response("Affirming Response, Requesting Additional Information"),
            Axis::Axis2,
            1,
        );
        let mut out: Vec<ClassificationResult> = Vec::new();
        let agg = r.run(&[record(1, "7, 6")], &mut out).await.unwrap();
        assert_eq!(out[0].predicted_code, "6,7");
        assert!(out[0].is_correct);
        assert_eq!(agg.by_code["6,7"].correct, 1);
    }

    #[tokio::test]
    async fn each_request_carries_instructions_and_query() {
        let (r, client) = runner(
            FakeClient::new("m".into()).with_response("Narrowing Down"),
            Axis::Axis1,
            1,
        );
        let mut out: Vec<ClassificationResult> = Vec::new();
        r.run(&[record(1, "4")], &mut out).await.unwrap();
        let seen = client.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].system, r.taxonomy().instructions);
        assert_eq!(seen[0].user, "Q1: X R: Y Q2: Z");
        assert!(seen[0].examples.is_empty());
    }
}
