//! Upload handling: accept a file into the session and describe what to show for it.

use acadia_common::config::UploadConfig;
use acadia_common::{Capability, SessionState, UploadedFile};
use thiserror::Error;
use tracing::{debug, warn};

use crate::file_kind::{extension_of, FileKind};
use crate::pdf_text::{preview_text, ExtractError, SharedExtractor};
use crate::tabular::{preview_table, DataPreview, PreviewError};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file type '{extension}' for {name}: accepted types are {accepted}")]
    Unsupported {
        name: String,
        extension: String,
        accepted: String,
    },
}

/// Validate the extension and make `file` the session's current upload.
pub fn receive(
    session: &mut SessionState,
    file: UploadedFile,
    config: &UploadConfig,
) -> Result<FileKind, UploadError> {
    let extension = extension_of(&file.name);
    if !config.accepts(&extension) {
        return Err(UploadError::Unsupported {
            name: file.name,
            extension,
            accepted: config.accepted_extensions.join(", "),
        });
    }

    let kind = FileKind::from_name(&file.name);
    debug!(name = %file.name, kind = kind.as_str(), bytes = file.size(), "upload received");
    session.store_upload(file);
    Ok(kind)
}

/// What the page shows for the current upload. Recomputed on every render.
#[derive(Debug)]
pub enum UploadOutcome {
    Pdf {
        name: String,
    },
    Table {
        name: String,
        preview: Result<DataPreview, PreviewError>,
    },
    /// Stored without a preview (txt and anything unmapped).
    Stored {
        name: String,
        kind: FileKind,
    },
}

impl UploadOutcome {
    pub fn describe(file: &UploadedFile, config: &UploadConfig) -> Self {
        let kind = FileKind::from_name(&file.name);
        match kind {
            FileKind::Pdf => UploadOutcome::Pdf { name: file.name.clone() },
            FileKind::Csv | FileKind::Xlsx => {
                let preview = preview_table(&kind, &file.content, config.preview_rows);
                if let Err(e) = &preview {
                    warn!(name = %file.name, error = %e, "data file could not be parsed");
                }
                UploadOutcome::Table { name: file.name.clone(), preview }
            }
            kind => UploadOutcome::Stored { name: file.name.clone(), kind },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UploadOutcome::Pdf { name }
            | UploadOutcome::Table { name, .. }
            | UploadOutcome::Stored { name, .. } => name,
        }
    }
}

/// Text preview of the session's PDF, at most `pdf_preview_chars` characters.
pub fn pdf_preview(
    file: &UploadedFile,
    extractor: &Capability<SharedExtractor>,
    config: &UploadConfig,
) -> Result<String, ExtractError> {
    let result = preview_text(extractor, &file.content, config.pdf_preview_chars);
    if let Err(e) = &result {
        warn!(name = %file.name, error = %e, "PDF text extraction failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf_text::TextExtractor;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    struct Repeat(usize);

    impl TextExtractor for Repeat {
        fn extract_text(&self, _content: &[u8]) -> Result<String, ExtractError> {
            Ok("x".repeat(self.0))
        }
    }

    fn session() -> SessionState {
        SessionState::new(&Capability::unavailable("no R"))
    }

    #[test]
    fn test_receive_stores_and_classifies() {
        let mut s = session();
        let kind = receive(&mut s, UploadedFile::new("Sample.CSV", "a\n1\n"), &UploadConfig::default()).unwrap();
        assert_eq!(kind, FileKind::Csv);
        assert_eq!(s.uploaded_data.unwrap().name, "Sample.CSV");
    }

    #[test]
    fn test_receive_rejects_unaccepted_extension() {
        let mut s = session();
        s.store_upload(UploadedFile::new("keep.csv", "a\n"));
        let err = receive(&mut s, UploadedFile::new("notes.docx", "x"), &UploadConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported file type 'docx' for notes.docx: accepted types are csv, xlsx, pdf, txt"
        );
        assert_eq!(s.uploaded_data.unwrap().name, "keep.csv");
    }

    #[test]
    fn test_txt_is_stored_without_preview() {
        let file = UploadedFile::new("readme.txt", "plain");
        match UploadOutcome::describe(&file, &UploadConfig::default()) {
            UploadOutcome::Stored { name, kind } => {
                assert_eq!(name, "readme.txt");
                assert_eq!(kind, FileKind::Txt);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_csv_outcome_carries_preview() {
        let mut body = String::from("a,b,c\n");
        for i in 0..10 {
            body.push_str(&format!("{i},{i},{i}\n"));
        }
        let file = UploadedFile::new("sample.csv", body);
        match UploadOutcome::describe(&file, &UploadConfig::default()) {
            UploadOutcome::Table { preview, .. } => {
                let preview = preview.unwrap();
                assert_eq!((preview.rows, preview.columns, preview.head.len()), (10, 3, 5));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_xlsx_outcome_carries_error() {
        let file = UploadedFile::new("data.xlsx", "not a zip archive");
        match UploadOutcome::describe(&file, &UploadConfig::default()) {
            UploadOutcome::Table { name, preview } => {
                assert_eq!(name, "data.xlsx");
                assert!(preview.is_err());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_pdf_preview_respects_configured_limit() {
        let file = UploadedFile::new("report.pdf", "%PDF-1.4");
        let cap = Capability::Available(Arc::new(Repeat(5000)) as SharedExtractor);
        let text = pdf_preview(&file, &cap, &UploadConfig::default()).unwrap();
        assert_eq!(text.len(), 1000);

        let short = UploadConfig { pdf_preview_chars: 10, ..UploadConfig::default() };
        assert_eq!(pdf_preview(&file, &cap, &short).unwrap(), "x".repeat(10));
    }
}
