//! R analytics collaborator probe.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use acadia_common::config::AnalyticsConfig;
use acadia_common::{AnalyticsEngine, AnalyticsFactory, AnalyticsHandle, Capability};
use tracing::info;

/// Handle to an R installation driven through its `Rscript` front-end.
#[derive(Debug, Clone)]
pub struct RscriptAnalytics {
    program: PathBuf,
}

impl RscriptAnalytics {
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl AnalyticsEngine for RscriptAnalytics {
    fn name(&self) -> &str {
        "R"
    }
}

/// Resolve the analytics collaborator. Missing R is not an error.
pub fn probe_analytics(config: &AnalyticsConfig) -> Capability<AnalyticsFactory> {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    let search: Vec<PathBuf> = std::env::split_paths(&path_var).collect();

    match find_executable(&config.rscript, &search) {
        Some(program) => {
            info!(program = %program.display(), "R analytics available");
            let factory: AnalyticsFactory = Arc::new(move || {
                Arc::new(RscriptAnalytics { program: program.clone() }) as AnalyticsHandle
            });
            Capability::Available(factory)
        }
        None => {
            info!(rscript = %config.rscript, "R analytics not available, continuing without it");
            Capability::unavailable(format!("{} not found", config.rscript))
        }
    }
}

/// An explicit path must exist; a bare name is looked up in `search`.
fn find_executable(program: &str, search: &[PathBuf]) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    search.iter().find_map(|dir| {
        [program.to_string(), format!("{program}.exe")]
            .into_iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_found_in_search_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Rscript"), b"#!/bin/sh\n").unwrap();

        let found = find_executable("Rscript", &[PathBuf::from("/nonexistent"), dir.path().to_path_buf()]);
        assert_eq!(found, Some(dir.path().join("Rscript")));
    }

    #[test]
    fn test_bare_name_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_executable("Rscript", &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("Rscript");
        let as_str = program.to_string_lossy().to_string();
        assert_eq!(find_executable(&as_str, &[]), None);

        std::fs::write(&program, b"").unwrap();
        assert_eq!(find_executable(&as_str, &[]), Some(program));
    }

    #[test]
    fn test_probe_without_r_is_unavailable() {
        let config = AnalyticsConfig { rscript: "/nonexistent/bin/Rscript".to_string() };
        let cap = probe_analytics(&config);
        assert!(!cap.is_available());
        assert_eq!(cap.reason(), Some("/nonexistent/bin/Rscript not found"));
    }

    #[test]
    fn test_probe_with_r_builds_handles() {
        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("Rscript");
        std::fs::write(&program, b"").unwrap();

        let config = AnalyticsConfig { rscript: program.to_string_lossy().to_string() };
        let cap = probe_analytics(&config);
        let factory = cap.get().unwrap();
        assert_eq!(factory().name(), "R");
    }
}
