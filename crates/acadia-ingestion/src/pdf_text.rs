//! PDF text extraction collaborator.
//!
//! The in-process extractor is lopdf-based and only compiled with the `pdf`
//! feature; without it [`pdf_capability`] reports the processor as unavailable.

use std::sync::Arc;

use acadia_common::Capability;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF processor unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Malformed(String),

    #[error("document is encrypted")]
    Encrypted,
}

/// Extracts plain text from a document held in memory.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, content: &[u8]) -> Result<String, ExtractError>;
}

pub type SharedExtractor = Arc<dyn TextExtractor>;

/// Resolve the PDF collaborator once at startup.
pub fn pdf_capability() -> Capability<SharedExtractor> {
    #[cfg(feature = "pdf")]
    {
        Capability::Available(Arc::new(LopdfExtractor) as SharedExtractor)
    }
    #[cfg(not(feature = "pdf"))]
    {
        Capability::unavailable("built without the `pdf` feature")
    }
}

/// Extract text and keep at most `limit` characters of it.
pub fn preview_text(
    extractor: &Capability<SharedExtractor>,
    content: &[u8],
    limit: usize,
) -> Result<String, ExtractError> {
    let extractor = match extractor {
        Capability::Available(e) => e,
        Capability::Unavailable { reason } => return Err(ExtractError::Unavailable(reason.clone())),
    };
    let text = extractor.extract_text(content)?;
    Ok(truncate_chars(&text, limit).to_string())
}

/// Prefix of `text` holding at most `limit` characters, cut on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Page-by-page text extraction with lopdf.
#[cfg(feature = "pdf")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

#[cfg(feature = "pdf")]
impl TextExtractor for LopdfExtractor {
    fn extract_text(&self, content: &[u8]) -> Result<String, ExtractError> {
        use lopdf::Document as PdfDoc;

        let pdf = PdfDoc::load_mem(content).map_err(|e| ExtractError::Malformed(e.to_string()))?;
        if pdf.is_encrypted() {
            return Err(ExtractError::Encrypted);
        }

        let pages: Vec<u32> = pdf.get_pages().keys().copied().collect();
        tracing::debug!(pages = pages.len(), "extracting PDF text");
        pdf.extract_text(&pages)
            .map_err(|e| ExtractError::Malformed(e.to_string()))
    }
}
