//! Dataset in, verdict table and summary out, with a scripted classifier.

use followup_core::dataset::{read_records, ResultWriter};
use followup_core::engine::{RunOptions, Runner};
use followup_core::gateway::ClassifierGateway;
use followup_core::model::ClassificationResult;
use followup_core::providers::llm::fake::{FakeClient, FakeReply};
use followup_core::report::{write_summary, RunSummary};
use followup_core::taxonomy::Axis;
use std::sync::Arc;

const INPUT: &str = "id,query,0226 axis1\n\
1,\"Q1: X R: Y Q2: Z\",4\n\
2,\"Q1: X R: Y Q2: Z\",4\n\
3,\"Q1: X R: Y Q2: Z\",4\n\
4,\"Q1: X R: Y Q2: Z\", 3 \n";

fn script() -> Vec<FakeReply> {
    vec![
        FakeReply::Text("Narrowing Down".into()),
        FakeReply::Text("Exploring Domain".into()),
        FakeReply::Text("I'm not sure, possibly category 4".into()),
        FakeReply::NoChoices,
    ]
}

#[tokio::test]
async fn writes_every_row_and_folds_accuracy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Manualcodingoutput.csv");
    let output = dir.path().join("axis1_model_responses.csv");
    std::fs::write(&input, INPUT).unwrap();

    let taxonomy = Axis::Axis1.taxonomy();
    let records = read_records(&input, &taxonomy.ground_truth_column).unwrap();
    assert_eq!(records.len(), 4);

    let client = Arc::new(FakeClient::new("fake-model".into()).with_script(script()));
    let runner = Runner::new(
        ClassifierGateway::new(client.clone()),
        taxonomy,
        RunOptions::default(),
    );
    let mut writer = ResultWriter::create(&output, "0226 axis1").unwrap();
    let aggregate = runner.run(&records, &mut writer).await.unwrap();
    drop(writer);

    assert_eq!(aggregate.total, 4);
    assert_eq!(aggregate.correct, 1);
    assert_eq!(aggregate.unrecognized, 2);
    assert_eq!(aggregate.by_code["4"].total, 3);
    assert_eq!(aggregate.by_code["3"].correct, 0);
    assert_eq!(client.requests().len(), 4);

    let table = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].ends_with("Narrowing Down,4,Narrowing Down,true"));
    assert!(lines[2].ends_with("Exploring Domain,4,Exploring Domain,false"));
    assert!(lines[3].contains("\"I'm not sure, possibly category 4\""));
    assert!(lines[4].ends_with("No response, 3 ,No response,false"));

    let summary_path = dir.path().join("summary.json");
    let summary = RunSummary::new(
        "axis1",
        "fake",
        "fake-model",
        runner.codec(),
        &aggregate,
    );
    write_summary(&summary, &summary_path).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(v["unrecognized"], 2);
    assert_eq!(v["accuracy"], 0.25);
    assert_eq!(v["by_code"]["3"]["label"], "Understanding Response");
}

#[tokio::test]
async fn failure_midway_keeps_scored_rows_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, INPUT).unwrap();

    let records = read_records(&input, "0226 axis1").unwrap();
    let client = FakeClient::new("m".into()).with_script([
        FakeReply::Text("Narrowing Down".into()),
        FakeReply::Fail("HTTP 401".into()),
    ]);
    let runner = Runner::new(
        ClassifierGateway::new(Arc::new(client)),
        Axis::Axis1.taxonomy(),
        RunOptions::default(),
    );
    let mut writer = ResultWriter::create(&output, "0226 axis1").unwrap();
    assert!(runner.run(&records, &mut writer).await.is_err());

    let table = std::fs::read_to_string(&output).unwrap();
    assert_eq!(table.lines().count(), 2);
}

#[tokio::test]
async fn few_shot_replays_worked_examples() {
    let client = Arc::new(FakeClient::new("m".into()).with_response("Narrowing Down"));
    let taxonomy = Axis::Axis1.taxonomy();
    let examples = taxonomy.worked_examples.len();
    let runner = Runner::new(
        ClassifierGateway::new(client.clone()),
        taxonomy,
        RunOptions {
            few_shot: true,
            concurrency: 2,
        },
    );
    let records = followup_core::dataset::read_records_from(
        "query,0226 axis1\nq,4\n".as_bytes(),
        "mem",
        "0226 axis1",
    )
    .unwrap();
    let mut sink: Vec<ClassificationResult> = Vec::new();
    runner.run(&records, &mut sink).await.unwrap();

    let seen = client.requests();
    assert_eq!(seen[0].examples.len(), examples * 2);
    assert_eq!(seen[0].user, "q");
}
