//! Taxonomy value object: label/code table, instruction text, worked examples
//! and the data-contract details (ground-truth column, label cardinality) of one axis.

pub mod builtin;
pub mod codec;

use crate::errors::TaxonomyError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use builtin::Axis;
pub use codec::TaxonomyCodec;

/// Code reserved for classifier output that matches no category.
pub const SENTINEL_CODE: &str = "0";

/// Supported `version` of taxonomy files.
pub const TAXONOMY_FILE_VERSION: u32 = 1;

/// Output column names owned by the writer; a ground-truth column may not reuse them.
const RESERVED_COLUMNS: [&str; 4] = [
    "query",
    "response",
    "classification",
    "correct_classification",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub code: String,
    pub label: String,
    /// Alternate spellings the classifier is known to produce.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Category {
    pub fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }
}

/// A transcript with its resolved label, replayable as a user/assistant turn pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedExample {
    pub transcript: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    /// Input column holding the reference code for this axis.
    pub ground_truth_column: String,
    /// Maximum number of labels a single answer may carry.
    #[serde(default = "default_max_labels")]
    pub max_labels: usize,
    /// Labels allowed to appear alongside one other label.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub co_occurring: Vec<String>,
    pub categories: Vec<Category>,
    /// System instruction text, sent unmodified with every request.
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub worked_examples: Vec<WorkedExample>,
}

fn default_version() -> u32 {
    TAXONOMY_FILE_VERSION
}

fn default_max_labels() -> usize {
    1
}

impl Taxonomy {
    pub fn is_multi_label(&self) -> bool {
        self.max_labels > 1
    }

    pub fn codec(&self) -> TaxonomyCodec {
        TaxonomyCodec::new(self)
    }

    /// Checks the invariants the codec relies on: unique numeric codes, the
    /// sentinel never used as a real code, labels unambiguous after normalization.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        let name = self.name.clone();
        let invalid = |detail: String| TaxonomyError::Invalid {
            taxonomy: name.clone(),
            detail,
        };

        if self.version != TAXONOMY_FILE_VERSION {
            return Err(TaxonomyError::UnsupportedVersion {
                found: self.version,
                supported: TAXONOMY_FILE_VERSION,
            });
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".into()));
        }
        if self.categories.is_empty() {
            return Err(TaxonomyError::Empty(self.name.clone()));
        }
        let column = self.ground_truth_column.trim();
        if column.is_empty() {
            return Err(invalid("ground_truth_column must not be empty".into()));
        }
        if RESERVED_COLUMNS.contains(&column) {
            return Err(invalid(format!(
                "ground_truth_column '{}' collides with an output column",
                column
            )));
        }
        if self.max_labels == 0 {
            return Err(invalid("max_labels must be at least 1".into()));
        }
        if self.instructions.trim().is_empty() {
            return Err(invalid("instructions must not be empty".into()));
        }

        let mut codes = HashSet::new();
        let mut labels = HashSet::new();
        for cat in &self.categories {
            let code = cat.code.trim();
            if code == SENTINEL_CODE {
                return Err(TaxonomyError::ReservedCode {
                    taxonomy: self.name.clone(),
                    code: cat.code.clone(),
                });
            }
            if code.is_empty() || code != cat.code || code.parse::<u32>().is_err() {
                return Err(invalid(format!(
                    "code '{}' for '{}' must be a bare non-negative integer",
                    cat.code, cat.label
                )));
            }
            if !codes.insert(code.to_string()) {
                return Err(TaxonomyError::DuplicateCode {
                    taxonomy: self.name.clone(),
                    code: cat.code.clone(),
                });
            }
            for label in std::iter::once(&cat.label).chain(cat.aliases.iter()) {
                let key = codec::normalize_label(label);
                if key.is_empty() {
                    return Err(invalid(format!("code '{}' has an empty label", cat.code)));
                }
                if !labels.insert(key) {
                    return Err(TaxonomyError::DuplicateLabel {
                        taxonomy: self.name.clone(),
                        label: label.clone(),
                    });
                }
            }
        }

        for label in &self.co_occurring {
            if !self.categories.iter().any(|c| &c.label == label) {
                return Err(invalid(format!(
                    "co_occurring label '{}' is not a category",
                    label
                )));
            }
        }
        for ex in &self.worked_examples {
            if !self.categories.iter().any(|c| c.label == ex.label) {
                return Err(invalid(format!(
                    "worked example label '{}' is not a category",
                    ex.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Taxonomy {
        Taxonomy {
            version: 1,
            name: "tiny".into(),
            ground_truth_column: "gt".into(),
            max_labels: 1,
            co_occurring: vec![],
            categories: vec![Category::new("1", "Alpha"), Category::new("2", "Beta")],
            instructions: "pick one".into(),
            worked_examples: vec![],
        }
    }

    #[test]
    fn valid_taxonomy_passes() {
        tiny().validate().unwrap();
    }

    #[test]
    fn rejects_duplicate_code() {
        let mut t = tiny();
        t.categories.push(Category::new("2", "Gamma"));
        assert!(matches!(
            t.validate(),
            Err(TaxonomyError::DuplicateCode { code, .. }) if code == "2"
        ));
    }

    #[test]
    fn rejects_sentinel_as_real_code() {
        let mut t = tiny();
        t.categories.push(Category::new("0", "Gamma"));
        assert!(matches!(
            t.validate(),
            Err(TaxonomyError::ReservedCode { .. })
        ));
    }

    #[test]
    fn rejects_labels_equal_after_normalization() {
        let mut t = tiny();
        t.categories.push(Category::new("3", "  alpha "));
        assert!(matches!(
            t.validate(),
            Err(TaxonomyError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_code() {
        let mut t = tiny();
        t.categories.push(Category::new("x", "Gamma"));
        assert!(t.validate().is_err());
    }

    #[test]
    fn rejects_reserved_ground_truth_column() {
        let mut t = tiny();
        t.ground_truth_column = "classification".into();
        assert!(t.validate().is_err());
    }

    #[test]
    fn rejects_unknown_co_occurring_label() {
        let mut t = tiny();
        t.max_labels = 2;
        t.co_occurring = vec!["Delta".into()];
        assert!(t.validate().is_err());
    }
}
