//! Machine-readable run summary (`--summary-json`).

use crate::scoring::RunAggregate;
use crate::taxonomy::TaxonomyCodec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const SCHEMA_VERSION: u32 = 1;

/// Per ground-truth code tallies, labelled when the code is in the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub total: usize,
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub schema_version: u32,
    pub taxonomy: String,
    pub provider: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub correct: usize,
    /// Fraction in `[0, 1]`.
    pub accuracy: f64,
    /// Records whose answer matched no category.
    pub unrecognized: usize,
    pub by_code: BTreeMap<String, CodeSummary>,
}

impl RunSummary {
    pub fn new(
        taxonomy: &str,
        provider: &str,
        model: &str,
        codec: &TaxonomyCodec,
        aggregate: &RunAggregate,
    ) -> Self {
        let by_code = aggregate
            .by_code
            .iter()
            .map(|(code, tally)| {
                (
                    code.clone(),
                    CodeSummary {
                        label: codec.describe(code),
                        total: tally.total,
                        correct: tally.correct,
                    },
                )
            })
            .collect();
        Self {
            schema_version: SCHEMA_VERSION,
            taxonomy: taxonomy.to_string(),
            provider: provider.to_string(),
            model: model.to_string(),
            generated_at: Utc::now(),
            total: aggregate.total,
            correct: aggregate.correct,
            accuracy: aggregate.accuracy(),
            unrecognized: aggregate.unrecognized,
            by_code,
        }
    }
}

pub fn write_summary(summary: &RunSummary, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(out, json)?;
    Ok(())
}
