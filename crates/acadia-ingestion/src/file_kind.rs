//! File kind dispatch by extension.

use serde::Serialize;

/// What an upload is treated as, decided from the final extension only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Csv,
    Xlsx,
    Txt,
    /// Any other extension, lower-cased.
    Other(String),
}

impl FileKind {
    pub fn from_name(name: &str) -> Self {
        match extension_of(name).as_str() {
            "pdf"  => FileKind::Pdf,
            "csv"  => FileKind::Csv,
            "xlsx" => FileKind::Xlsx,
            "txt"  => FileKind::Txt,
            other  => FileKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileKind::Pdf      => "pdf",
            FileKind::Csv      => "csv",
            FileKind::Xlsx     => "xlsx",
            FileKind::Txt      => "txt",
            FileKind::Other(e) => e,
        }
    }

    pub fn is_tabular(&self) -> bool {
        matches!(self, FileKind::Csv | FileKind::Xlsx)
    }
}

/// Lower-cased substring after the last `.`; the whole name when there is no dot.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}
