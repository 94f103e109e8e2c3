//! Per-browser-session state and the store that owns it.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::collaborator::{AnalyticsFactory, AnalyticsHandle, Capability};

/// The file most recently uploaded in a session. Held in memory only.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content: Bytes,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            uploaded_at: Utc::now(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Mutable state of one session.
#[derive(Clone, Default)]
pub struct SessionState {
    pub uploaded_data: Option<UploadedFile>,
    /// Output handed over by the analysis pages; shape is not inspected here.
    pub analysis_results: Option<serde_json::Value>,
    pub r_analytics: Option<AnalyticsHandle>,
}

impl SessionState {
    /// Fresh state. The analytics handle is only built when the collaborator is available.
    pub fn new(analytics: &Capability<AnalyticsFactory>) -> Self {
        Self {
            uploaded_data: None,
            analysis_results: None,
            r_analytics: analytics.get().map(|factory| factory()),
        }
    }

    /// Replaces any previously uploaded file.
    pub fn store_upload(&mut self, file: UploadedFile) {
        self.uploaded_data = Some(file);
    }

    pub fn set_results(&mut self, results: serde_json::Value) {
        self.analysis_results = Some(results);
    }

    pub fn clear_results(&mut self) {
        self.analysis_results = None;
    }

    /// Results worth showing: present and not null, `{}`, `[]`, `""`, `false` or zero.
    pub fn recent_results(&self) -> Option<&serde_json::Value> {
        use serde_json::Value;
        self.analysis_results.as_ref().filter(|v| match v {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
            Value::Number(n) => n.as_f64() != Some(0.0),
        })
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("uploaded_data", &self.uploaded_data.as_ref().map(|u| &u.name))
            .field("analysis_results", &self.analysis_results)
            .field("r_analytics", &self.r_analytics.as_ref().map(|a| a.name()))
            .finish()
    }
}

/// Idle minutes before a session is dropped, unless configured otherwise.
pub const DEFAULT_IDLE_MINUTES: i64 = 120;

struct Entry {
    state: SessionState,
    last_seen: DateTime<Utc>,
}

impl Entry {
    fn new(state: SessionState, now: DateTime<Utc>) -> Self {
        Self { state, last_seen: now }
    }

    fn is_live(&self, now: DateTime<Utc>, idle: Duration) -> bool {
        now - self.last_seen <= idle
    }
}

/// All live sessions, keyed by the id carried in the session cookie.
/// A session idle for longer than `idle` is treated as gone and purged.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    analytics: Capability<AnalyticsFactory>,
    idle: Duration,
}

impl SessionStore {
    pub fn new(analytics: Capability<AnalyticsFactory>) -> Self {
        Self::with_idle_timeout(analytics, Duration::minutes(DEFAULT_IDLE_MINUTES))
    }

    pub fn with_idle_timeout(analytics: Capability<AnalyticsFactory>, idle: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            analytics,
            idle,
        }
    }

    pub fn analytics(&self) -> &Capability<AnalyticsFactory> {
        &self.analytics
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle
    }

    /// Creates the session's state unless it already exists, and marks it as seen.
    /// Returns `true` when a new session was created; idle sessions are purged then.
    pub async fn initialize(&self, id: Uuid) -> bool {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        if let Some(entry) = sessions.get_mut(&id) {
            if entry.is_live(now, self.idle) {
                entry.last_seen = now;
                return false;
            }
        }
        let purged = Self::purge_locked(&mut sessions, now, self.idle);
        sessions.insert(id, Entry::new(SessionState::new(&self.analytics), now));
        debug!(session = %id, purged, "session initialized");
        true
    }

    /// Whether the session exists and has not gone idle.
    pub async fn contains(&self, id: Uuid) -> bool {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(&id)
            .is_some_and(|e| e.is_live(now, self.idle))
    }

    /// Clone of the session's current state.
    pub async fn snapshot(&self, id: Uuid) -> Option<SessionState> {
        self.sessions.read().await.get(&id).map(|e| e.state.clone())
    }

    /// Mutates the session's state, initializing it first if needed.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .entry(id)
            .or_insert_with(|| Entry::new(SessionState::new(&self.analytics), now));
        entry.last_seen = now;
        f(&mut entry.state)
    }

    /// Drops every session idle at `now`. Returns how many were dropped.
    pub async fn purge_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::purge_locked(&mut sessions, now, self.idle)
    }

    fn purge_locked(sessions: &mut HashMap<Uuid, Entry>, now: DateTime<Utc>, idle: Duration) -> usize {
        let before = sessions.len();
        sessions.retain(|_, e| e.is_live(now, idle));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
