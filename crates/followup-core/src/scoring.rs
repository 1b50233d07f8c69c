//! Per-record verdicts and the run-level accuracy fold.

use crate::model::{ClassificationResult, TranscriptRecord};
use crate::taxonomy::codec::{join_codes, LABEL_SEPARATORS};
use crate::taxonomy::SENTINEL_CODE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ground truth as compared: trimmed; for multi-label taxonomies a list split
/// like a compound answer is put in compound form, so `"8; 5"` equals `"5,8"`.
pub fn normalize_ground_truth(raw: &str, multi_label: bool) -> String {
    let trimmed = raw.trim();
    if multi_label && trimmed.contains(LABEL_SEPARATORS) {
        let parts: Vec<&str> = trimmed
            .split(LABEL_SEPARATORS)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        return join_codes(parts);
    }
    trimmed.to_string()
}

/// Pure: no normalization of case, only of surrounding whitespace (and compound order).
pub fn score(
    record: &TranscriptRecord,
    raw_label_text: String,
    predicted_code: String,
    multi_label: bool,
) -> ClassificationResult {
    let expected = normalize_ground_truth(&record.ground_truth, multi_label);
    let is_correct = predicted_code == expected;
    ClassificationResult {
        row: record.row,
        query: record.query.clone(),
        ground_truth: record.ground_truth.clone(),
        raw_label_text,
        predicted_code,
        is_correct,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTally {
    pub total: usize,
    pub correct: usize,
}

/// Running fold over scored records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunAggregate {
    pub total: usize,
    pub correct: usize,
    /// Records whose prediction decoded to the sentinel.
    pub unrecognized: usize,
    /// Keyed by normalized ground-truth code.
    pub by_code: BTreeMap<String, CodeTally>,
}

impl RunAggregate {
    pub fn record(&mut self, result: &ClassificationResult, multi_label: bool) {
        self.total += 1;
        if result.is_correct {
            self.correct += 1;
        }
        if result.predicted_code == SENTINEL_CODE {
            self.unrecognized += 1;
        }
        let tally = self
            .by_code
            .entry(normalize_ground_truth(&result.ground_truth, multi_label))
            .or_default();
        tally.total += 1;
        if result.is_correct {
            tally.correct += 1;
        }
    }

    /// `correct / total`; zero for an empty run.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// `0.5` → `"50.00%"`.
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.2}%", accuracy * 100.0)
}
