//! Tabular preview of uploaded CSV and Excel files.
//!
//! The first record is the header. Rows and columns count the data below it,
//! so a 10-row CSV with a header line previews as 10 × 3, not 11 × 3.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, XlsxError};
use serde::Serialize;
use thiserror::Error;

use crate::file_kind::FileKind;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Excel(#[from] XlsxError),

    #[error("No columns to parse from file")]
    EmptyData,

    #[error("workbook contains no worksheets")]
    NoWorksheet,

    #[error("{0} files have no tabular preview")]
    NotTabular(String),
}

/// Head of a parsed table plus its full dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPreview {
    pub rows: usize,
    pub columns: usize,
    pub headers: Vec<String>,
    pub head: Vec<Vec<String>>,
}

impl DataPreview {
    pub fn shape_label(&self) -> String {
        format!("Shape: {} rows × {} columns", self.rows, self.columns)
    }
}

/// Parse `content` as `kind` and keep the first `head_rows` data rows.
pub fn preview_table(kind: &FileKind, content: &[u8], head_rows: usize) -> Result<DataPreview, PreviewError> {
    match kind {
        FileKind::Csv  => preview_csv(content, head_rows),
        FileKind::Xlsx => preview_xlsx(content, head_rows),
        other          => Err(PreviewError::NotTabular(other.as_str().to_string())),
    }
}

/// Strict CSV: every record must have as many fields as the header.
pub fn preview_csv(content: &[u8], head_rows: usize) -> Result<DataPreview, PreviewError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(content);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(PreviewError::EmptyData);
    }

    let mut rows = 0;
    let mut head = Vec::with_capacity(head_rows);
    for record in rdr.records() {
        let record = record?;
        if head.len() < head_rows {
            head.push(record.iter().map(str::to_string).collect());
        }
        rows += 1;
    }

    Ok(DataPreview { rows, columns: headers.len(), headers, head })
}

/// First worksheet of an .xlsx workbook. An empty sheet previews as 0 × 0.
pub fn preview_xlsx(content: &[u8], head_rows: usize) -> Result<DataPreview, PreviewError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(content))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(PreviewError::NoWorksheet)??;

    let mut iter = range.rows();
    let headers: Vec<String> = match iter.next() {
        Some(first) => first.iter().map(cell_text).collect(),
        None => Vec::new(),
    };

    let head = iter
        .by_ref()
        .take(head_rows)
        .map(|row| row.iter().map(cell_text).collect())
        .collect::<Vec<Vec<String>>>();
    let rows = head.len() + iter.count();

    Ok(DataPreview { rows, columns: range.width(), headers, head })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
