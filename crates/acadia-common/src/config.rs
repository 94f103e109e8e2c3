//! Configuration loading for Acadia.
//! Reads acadia.toml from the current directory or the path in ACADIA_CONFIG env var.
//! A missing file yields the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AcadiaError, Result};

pub const CONFIG_ENV: &str = "ACADIA_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "acadia.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Minutes without a request after which a session and its upload are dropped
    #[serde(default = "default_session_idle_minutes")]
    pub session_idle_minutes: u64,
}

fn default_host()       -> String  { "127.0.0.1".to_string() }
fn default_port()       -> u16     { 3001 }
fn default_static_dir() -> PathBuf { PathBuf::from("static") }
fn default_session_idle_minutes() -> u64 { 120 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            session_idle_minutes: default_session_idle_minutes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Head rows shown in a tabular preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    /// Characters of extracted PDF text shown in a preview
    #[serde(default = "default_pdf_preview_chars")]
    pub pdf_preview_chars: usize,
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
}

fn default_preview_rows()      -> usize { 5 }
fn default_pdf_preview_chars() -> usize { 1000 }

fn default_accepted_extensions() -> Vec<String> {
    ["csv", "xlsx", "pdf", "txt"].iter().map(|s| s.to_string()).collect()
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
            pdf_preview_chars: default_pdf_preview_chars(),
            accepted_extensions: default_accepted_extensions(),
        }
    }
}

impl UploadConfig {
    /// Case-insensitive membership check against `accepted_extensions`.
    pub fn accepts(&self, extension: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// R front-end executable, either a bare name looked up on PATH or an absolute path
    #[serde(default = "default_rscript")]
    pub rscript: String,
}

fn default_rscript() -> String { "Rscript".to_string() }

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { rscript: default_rscript() }
    }
}

impl Config {
    /// Load from `ACADIA_CONFIG` if set, otherwise `./acadia.toml`.
    /// `ACADIA_HOST` and `ACADIA_PORT` override the server section afterwards.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AcadiaError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("ACADIA_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("ACADIA_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| AcadiaError::Config(format!("ACADIA_PORT is not a port: {port}")))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    pub fn session_idle(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_idle_minutes.min(i64::MAX as u64 / 60_000) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_match_landing_page() {
        let config = Config::default();
        assert_eq!(config.upload.preview_rows, 5);
        assert_eq!(config.upload.pdf_preview_chars, 1000);
        assert_eq!(config.upload.accepted_extensions, vec!["csv", "xlsx", "pdf", "txt"]);
        assert_eq!(config.analytics.rscript, "Rscript");
    }

    #[test]
    fn test_partial_toml_keeps_field_defaults() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.session_idle_minutes, 120);
        assert_eq!(config.upload.pdf_preview_chars, 1000);
    }

    #[test]
    fn test_session_idle_from_server_section() {
        let config = Config::from_toml("[server]\nsession_idle_minutes = 15\n").unwrap();
        assert_eq!(config.server.session_idle(), chrono::Duration::minutes(15));
    }

    #[test]
    fn test_accepts_is_case_insensitive() {
        let upload = UploadConfig::default();
        assert!(upload.accepts("CSV"));
        assert!(upload.accepts("Xlsx"));
        assert!(!upload.accepts("docx"));
    }

    #[test]
    fn test_from_file_reads_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[upload]\npreview_rows = 10\n[analytics]\nrscript = \"/opt/R/bin/Rscript\"").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.upload.preview_rows, 10);
        assert_eq!(config.analytics.rscript, "/opt/R/bin/Rscript");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml("[server\nport = ").unwrap_err();
        assert!(matches!(err, AcadiaError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::from_file(Path::new("/nonexistent/acadia.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
