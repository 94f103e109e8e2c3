//! Dashboard handler — main landing page, re-rendered top to bottom on every interaction.

use acadia_common::config::UploadConfig;
use acadia_common::{SessionState, UploadedFile};
use acadia_ingestion::upload::{pdf_preview, UploadOutcome};
use std::sync::Arc;

use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::catalog::Module;
use crate::error::WebError;
use crate::render::{render_dashboard, DashboardView, Notice, PdfActions, PdfPreviewPanel, UploadSection};
use crate::session;
use crate::state::{AppState, SharedState};

pub const VALIDATE_MESSAGE: &str = "Navigate to 'Data Import' page to run automatic validation";

pub const PDF_TIP: &str = "💡 Tip: Upload your PDF in the Data Import module for comprehensive automatic \
    validation including statistical analysis, citation checking, and methodology assessment.";

/// What triggered this render.
#[derive(Debug, Clone)]
pub enum Interaction {
    View,
    OpenModule(&'static Module),
    UploadRejected(String),
    ValidatePdf,
    PreviewPdf,
}

pub type PageResponse = Result<(CookieJar, Html<String>), WebError>;

pub async fn dashboard(State(state): State<SharedState>, jar: CookieJar) -> PageResponse {
    respond(&state, jar, Interaction::View).await
}

/// Resolve the session and render the page for `interaction`.
pub async fn respond(state: &SharedState, jar: CookieJar, interaction: Interaction) -> PageResponse {
    let (jar, id) = session::resolve(jar, &state.sessions).await;
    render_for(state, jar, id, interaction).await
}

/// File parsing and PDF extraction run on the blocking pool so one slow
/// upload does not hold up other sessions.
pub async fn render_for(state: &SharedState, jar: CookieJar, id: Uuid, interaction: Interaction) -> PageResponse {
    let snapshot = state
        .sessions
        .snapshot(id)
        .await
        .ok_or(WebError::SessionExpired)?;
    let shared = Arc::clone(state);
    let view = tokio::task::spawn_blocking(move || build_view(&shared, &snapshot, &interaction)).await?;
    let html = render_dashboard(&state.templates, &view)?;
    Ok((jar, Html(html)))
}

pub fn build_view(state: &AppState, session: &SessionState, interaction: &Interaction) -> DashboardView {
    let pressed = match interaction {
        Interaction::OpenModule(module) => Some(*module),
        _ => None,
    };
    let mut view = DashboardView::with_cards(pressed);
    view.accept = accept_attr(&state.config.upload);

    // A rejected upload leaves the previous file in place, so it is still shown.
    if let Some(file) = &session.uploaded_data {
        view.upload = upload_section(state, file, interaction);
    }
    if let Interaction::UploadRejected(reason) = interaction {
        view.upload.notices.insert(0, Notice::error(reason.clone()));
    }

    view.results = session
        .recent_results()
        .and_then(|results| serde_json::to_string_pretty(results).ok());
    view
}

fn upload_section(state: &AppState, file: &UploadedFile, interaction: &Interaction) -> UploadSection {
    let config = &state.config.upload;
    let mut section = UploadSection::default();

    match UploadOutcome::describe(file, config) {
        UploadOutcome::Pdf { name } => {
            section.notices.push(Notice::success(format!("PDF uploaded: {name}")));
            let mut actions = PdfActions {
                tip: PDF_TIP.to_string(),
                limit: config.pdf_preview_chars,
                ..Default::default()
            };
            match interaction {
                Interaction::ValidatePdf => {
                    actions.validate_notice = Some(Notice::info(VALIDATE_MESSAGE));
                }
                Interaction::PreviewPdf => {
                    actions.preview = Some(match pdf_preview(file, &state.pdf, config) {
                        Ok(text) => PdfPreviewPanel { text: Some(text), error: None },
                        Err(e) => PdfPreviewPanel {
                            text: None,
                            error: Some(Notice::error(format!("Error processing PDF: {e}"))),
                        },
                    });
                }
                _ => {}
            }
            section.pdf = Some(actions);
        }
        UploadOutcome::Table { name, preview } => {
            section.notices.push(Notice::success(format!("Data file uploaded: {name}")));
            match preview {
                Ok(table) => {
                    section.shape = Some(table.shape_label());
                    section.table = Some(table);
                }
                Err(e) => section.notices.push(Notice::error(format!("Error reading data file: {e}"))),
            }
        }
        // txt and unmapped kinds: stored, nothing to show
        UploadOutcome::Stored { .. } => {}
    }
    section
}

/// `accept` attribute for the file input, e.g. `.csv,.xlsx,.pdf,.txt`.
fn accept_attr(config: &UploadConfig) -> String {
    config
        .accepted_extensions
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Level;
    use acadia_common::{Capability, Config};
    use acadia_ingestion::pdf_text::{ExtractError, SharedExtractor, TextExtractor};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    struct Broken;

    impl TextExtractor for Broken {
        fn extract_text(&self, _content: &[u8]) -> Result<String, ExtractError> {
            Err(ExtractError::Malformed("trailer not found".into()))
        }
    }

    fn state(pdf: Capability<SharedExtractor>) -> AppState {
        AppState::with_collaborators(Config::default(), Capability::unavailable("no R"), pdf).unwrap()
    }

    fn session_with(file: UploadedFile) -> SessionState {
        let mut s = SessionState::default();
        s.store_upload(file);
        s
    }

    #[test]
    fn test_fresh_session_has_no_upload_section() {
        let view = build_view(&state(Capability::unavailable("off")), &SessionState::default(), &Interaction::View);
        assert!(view.upload.notices.is_empty());
        assert!(view.upload.pdf.is_none());
        assert!(view.results.is_none());
        assert_eq!(view.accept, ".csv,.xlsx,.pdf,.txt");
    }

    #[test]
    fn test_pdf_actions_follow_interaction() {
        let st = state(Capability::unavailable("off"));
        let session = session_with(UploadedFile::new("report.pdf", "%PDF-1.4"));

        let view = build_view(&st, &session, &Interaction::View);
        assert_eq!(view.upload.notices[0].text, "PDF uploaded: report.pdf");
        let pdf = view.upload.pdf.unwrap();
        assert!(pdf.validate_notice.is_none());
        assert!(pdf.preview.is_none());

        let view = build_view(&st, &session, &Interaction::ValidatePdf);
        assert_eq!(view.upload.pdf.unwrap().validate_notice.unwrap().text, VALIDATE_MESSAGE);
    }

    #[test]
    fn test_pdf_preview_error_is_rendered_not_raised() {
        let st = state(Capability::Available(Arc::new(Broken) as SharedExtractor));
        let session = session_with(UploadedFile::new("report.pdf", "%PDF-1.4"));
        let view = build_view(&st, &session, &Interaction::PreviewPdf);
        let panel = view.upload.pdf.unwrap().preview.unwrap();
        assert!(panel.text.is_none());
        let error = panel.error.unwrap();
        assert_eq!(error.level, Level::Error);
        assert_eq!(error.text, "Error processing PDF: trailer not found");
    }

    #[test]
    fn test_unparseable_csv_shows_success_then_error() {
        let st = state(Capability::unavailable("off"));
        let session = session_with(UploadedFile::new("bad.csv", "a,b\n1,2,3\n"));
        let view = build_view(&st, &session, &Interaction::View);
        let levels: Vec<Level> = view.upload.notices.iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![Level::Success, Level::Error]);
        assert!(view.upload.notices[1].text.starts_with("Error reading data file: "));
        assert!(view.upload.table.is_none());
    }

    #[test]
    fn test_txt_upload_shows_nothing() {
        let st = state(Capability::unavailable("off"));
        let session = session_with(UploadedFile::new("notes.txt", "hello"));
        let view = build_view(&st, &session, &Interaction::View);
        assert!(view.upload.notices.is_empty());
        assert!(view.upload.table.is_none());
        assert!(view.upload.pdf.is_none());
    }

    #[test]
    fn test_rejected_upload_shows_error() {
        let st = state(Capability::unavailable("off"));
        let view = build_view(&st, &SessionState::default(), &Interaction::UploadRejected("nope".into()));
        assert_eq!(view.upload.notices[0].level, Level::Error);
    }

    #[test]
    fn test_rejected_upload_keeps_stored_preview() {
        let st = state(Capability::unavailable("off"));
        let session = session_with(UploadedFile::new("sample.csv", "a,b\n1,2\n3,4\n"));
        let view = build_view(&st, &session, &Interaction::UploadRejected("Unsupported file type: docx".into()));

        let texts: Vec<&str> = view.upload.notices.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Unsupported file type: docx", "Data file uploaded: sample.csv"]);
        assert_eq!(view.upload.shape.as_deref(), Some("Shape: 2 rows × 2 columns"));
        assert!(view.upload.table.is_some());
    }
}
