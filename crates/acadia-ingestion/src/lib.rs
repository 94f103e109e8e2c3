//! acadia-ingestion — Quick-look handling of uploaded research files.
//! Covers the landing page upload flow:
//! - File kind dispatch by extension
//! - CSV / Excel tabular preview
//! - PDF text extraction collaborator
//! - Analytics collaborator probe
//! - Upload outcomes for the renderer

pub mod file_kind;
pub mod tabular;
pub mod pdf_text;
pub mod analytics;
pub mod upload;

pub use file_kind::FileKind;
pub use tabular::{DataPreview, PreviewError};
pub use pdf_text::{ExtractError, SharedExtractor, TextExtractor};
pub use upload::{UploadError, UploadOutcome};
