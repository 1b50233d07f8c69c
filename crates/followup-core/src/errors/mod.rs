//! Domain error types. Orchestration code wraps these in `anyhow` with context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse taxonomy YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unsupported taxonomy version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("taxonomy '{0}' has no categories")]
    Empty(String),
    #[error("taxonomy '{taxonomy}': duplicate code '{code}'")]
    DuplicateCode { taxonomy: String, code: String },
    #[error("taxonomy '{taxonomy}': label '{label}' is declared more than once")]
    DuplicateLabel { taxonomy: String, label: String },
    #[error("taxonomy '{taxonomy}': code '{code}' is reserved for unrecognized output")]
    ReservedCode { taxonomy: String, code: String },
    #[error("taxonomy '{taxonomy}': {detail}")]
    Invalid { taxonomy: String, detail: String },
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: missing required column '{column}' (found: {found})")]
    MissingColumn {
        path: String,
        column: String,
        found: String,
    },
    #[error("{path}: malformed row {row}: {source}")]
    MalformedRow {
        path: String,
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} API error (status {status}): {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },
    #[error("{provider} transport error: {source}")]
    Transport {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} returned a malformed body: {detail}")]
    MalformedBody { provider: String, detail: String },
}
