//! CSV ingestion of transcript records and streaming output of verdicts.

use crate::errors::DatasetError;
use crate::model::{ClassificationResult, TranscriptRecord};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const QUERY_COLUMN: &str = "query";
pub const RESPONSE_COLUMN: &str = "response";
pub const CLASSIFICATION_COLUMN: &str = "classification";
pub const CORRECT_COLUMN: &str = "correct_classification";

pub fn read_records(
    path: &Path,
    ground_truth_column: &str,
) -> Result<Vec<TranscriptRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_records_from(file, &path.display().to_string(), ground_truth_column)
}

/// Header row required; `query` and the ground-truth column must be present.
/// Any malformed row aborts ingestion.
pub fn read_records_from<R: Read>(
    reader: R,
    source: &str,
    ground_truth_column: &str,
) -> Result<Vec<TranscriptRecord>, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    let find = |column: &str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DatasetError::MissingColumn {
                path: source.to_string(),
                column: column.to_string(),
                found: headers.join(", "),
            })
    };
    let query_idx = find(QUERY_COLUMN)?;
    let truth_idx = find(ground_truth_column)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row_no = i + 1;
        let row = row.map_err(|source_err| DatasetError::MalformedRow {
            path: source.to_string(),
            row: row_no,
            source: source_err,
        })?;
        // The reader is not flexible: every record has as many fields as the header.
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        records.push(TranscriptRecord {
            row: row_no,
            query: field(query_idx),
            ground_truth: field(truth_idx),
        });
    }
    tracing::debug!(source, rows = records.len(), "loaded transcript records");
    Ok(records)
}

/// Receives each verdict as soon as it is scored.
pub trait ResultSink {
    fn write(&mut self, result: &ClassificationResult) -> anyhow::Result<()>;
}

impl ResultSink for Vec<ClassificationResult> {
    fn write(&mut self, result: &ClassificationResult) -> anyhow::Result<()> {
        self.push(result.clone());
        Ok(())
    }
}

/// Output table writer; flushes after every row so a failed run keeps what it scored.
pub struct ResultWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl ResultWriter<File> {
    pub fn create(path: &Path, ground_truth_column: &str) -> Result<Self, DatasetError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path).map_err(|source| DatasetError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(file, ground_truth_column)
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn new(writer: W, ground_truth_column: &str) -> Result<Self, DatasetError> {
        let mut inner = csv::WriterBuilder::new().from_writer(writer);
        inner.write_record([
            QUERY_COLUMN,
            RESPONSE_COLUMN,
            ground_truth_column,
            CLASSIFICATION_COLUMN,
            CORRECT_COLUMN,
        ])?;
        inner.flush()?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `classification` repeats the text label; the code stays internal.
    pub fn write_result(&mut self, result: &ClassificationResult) -> Result<(), DatasetError> {
        let verdict = if result.is_correct { "true" } else { "false" };
        self.inner.write_record([
            result.query.as_str(),
            result.raw_label_text.as_str(),
            result.ground_truth.as_str(),
            result.raw_label_text.as_str(),
            verdict,
        ])?;
        self.inner.flush()?;
        self.rows += 1;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, DatasetError> {
        self.inner
            .into_inner()
            .map_err(|e| DatasetError::Io(e.into_error()))
    }
}

impl<W: Write> ResultSink for ResultWriter<W> {
    fn write(&mut self, result: &ClassificationResult) -> anyhow::Result<()> {
        self.write_result(result)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXIS1: &str = "0226 axis1";

    #[test]
    fn reads_query_and_ground_truth_verbatim() {
        let data = "id,query,0226 axis1\n1,\"Q1: X, R: Y\nQ2: Z\", 4 \n2,plain,2\n";
        let records = read_records_from(data.as_bytes(), "mem", AXIS1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row, 1);
        assert_eq!(records[0].query, "Q1: X, R: Y\nQ2: Z");
        assert_eq!(records[0].ground_truth, " 4 ");
        assert_eq!(records[1].query, "plain");
    }

    #[test]
    fn ignores_bom_on_first_header() {
        let data = "\u{feff}query,AXIS2\nq,5\n";
        let records = read_records_from(data.as_bytes(), "mem", "AXIS2").unwrap();
        assert_eq!(records[0].ground_truth, "5");
    }

    #[test]
    fn missing_ground_truth_column_is_fatal() {
        let data = "query,AXIS2\nq,5\n";
        let err = read_records_from(data.as_bytes(), "mem", AXIS1).unwrap_err();
        match err {
            DatasetError::MissingColumn { column, found, .. } => {
                assert_eq!(column, AXIS1);
                assert_eq!(found, "query, AXIS2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_row_is_fatal() {
        let data = "query,0226 axis1\nq,4\nshort\n";
        let err = read_records_from(data.as_bytes(), "mem", AXIS1).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedRow { row: 2, .. }));
    }

    #[test]
    fn overlong_row_is_fatal() {
        let data = "query,0226 axis1\nq,4,extra\n";
        let err = read_records_from(data.as_bytes(), "mem", AXIS1).unwrap_err();
        assert!(matches!(err, DatasetError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn empty_table_has_no_records() {
        let data = "query,0226 axis1\n";
        assert!(read_records_from(data.as_bytes(), "mem", AXIS1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn writes_header_and_rows() {
        let mut w = ResultWriter::new(Vec::new(), AXIS1).unwrap();
        w.write_result(&ClassificationResult {
            row: 1,
            query: "Q1: X R: Y Q2: Z".into(),
            ground_truth: " 4".into(),
            raw_label_text: "Narrowing Down".into(),
            predicted_code: "4".into(),
            is_correct: true,
        })
        .unwrap();
        w.write_result(&ClassificationResult {
            row: 2,
            query: "a, b".into(),
            ground_truth: "4".into(),
            raw_label_text: "No response".into(),
            predicted_code: "0".into(),
            is_correct: false,
        })
        .unwrap();
        assert_eq!(w.rows(), 2);
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "query,response,0226 axis1,classification,correct_classification"
        );
        assert_eq!(
            lines[1],
            "Q1: X R: Y Q2: Z,Narrowing Down, 4,Narrowing Down,true"
        );
        assert_eq!(lines[2], "\"a, b\",No response,4,No response,false");
    }
}
