//! JSON endpoints: session summary, results hand-over from the analysis pages, health.

use acadia_common::SessionState;
use acadia_ingestion::FileKind;
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::WebError;
use crate::session;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct UploadedFileSummary {
    pub name: String,
    pub kind: FileKind,
    pub size: usize,
    pub uploaded_at: String,
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub uploaded_file: Option<UploadedFileSummary>,
    pub analysis_results: Option<Value>,
    pub analytics_available: bool,
}

impl From<&SessionState> for SessionSummary {
    fn from(s: &SessionState) -> Self {
        Self {
            uploaded_file: s.uploaded_data.as_ref().map(|f| UploadedFileSummary {
                name: f.name.clone(),
                kind: FileKind::from_name(&f.name),
                size: f.size(),
                uploaded_at: f.uploaded_at.to_rfc3339(),
            }),
            analysis_results: s.analysis_results.clone(),
            analytics_available: s.r_analytics.is_some(),
        }
    }
}

pub async fn api_session(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<SessionSummary>), WebError> {
    let (jar, id) = session::resolve(jar, &state.sessions).await;
    let snapshot = state.sessions.snapshot(id).await.ok_or(WebError::SessionExpired)?;
    Ok((jar, Json(SessionSummary::from(&snapshot))))
}

pub async fn put_results(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(results): Json<Value>,
) -> (CookieJar, Json<SessionSummary>) {
    let (jar, id) = session::resolve(jar, &state.sessions).await;
    let summary = state
        .sessions
        .update(id, |s| {
            s.set_results(results);
            SessionSummary::from(&*s)
        })
        .await;
    (jar, Json(summary))
}

pub async fn clear_results(State(state): State<SharedState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let (jar, id) = session::resolve(jar, &state.sessions).await;
    state.sessions.update(id, |s| s.clear_results()).await;
    (jar, StatusCode::NO_CONTENT)
}

pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "analytics": state.analytics_available(),
        "pdf": state.pdf.is_available(),
    }))
}
