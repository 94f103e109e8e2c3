//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use acadia_common::{AnalyticsFactory, Capability, Config, SessionStore};
use acadia_ingestion::analytics::probe_analytics;
use acadia_ingestion::pdf_text::{pdf_capability, SharedExtractor};
use minijinja::Environment;
use tracing::{debug, info};

use crate::render;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// PDF text extraction collaborator
    pub pdf: Capability<SharedExtractor>,
    pub templates: Environment<'static>,
}

impl AppState {
    /// Probe the optional collaborators and build the state.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let analytics = probe_analytics(&config.analytics);
        let pdf = pdf_capability();
        if let Some(reason) = pdf.reason() {
            info!(%reason, "PDF preview disabled");
        }
        Self::with_collaborators(config, analytics, pdf)
    }

    /// Build with explicit collaborators instead of probing.
    pub fn with_collaborators(
        config: Config,
        analytics: Capability<AnalyticsFactory>,
        pdf: Capability<SharedExtractor>,
    ) -> anyhow::Result<Self> {
        let sessions = SessionStore::with_idle_timeout(analytics, config.server.session_idle());
        Ok(Self {
            config,
            sessions,
            pdf,
            templates: render::environment()?,
        })
    }

    pub fn analytics_available(&self) -> bool {
        self.sessions.analytics().is_available()
    }
}

pub type SharedState = Arc<AppState>;

/// How often idle sessions are swept, on top of the sweep done when a session is created.
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Background task dropping idle sessions until the process exits.
pub fn spawn_session_sweeper(state: SharedState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let purged = state.sessions.purge_idle(chrono::Utc::now()).await;
            if purged > 0 {
                debug!(purged, "idle sessions dropped");
            }
        }
    })
}
