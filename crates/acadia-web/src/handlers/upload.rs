//! Quick data upload and the PDF sub-actions.

use acadia_common::UploadedFile;
use acadia_ingestion::upload::receive;
use axum::extract::{Multipart, State};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::handlers::dashboard::{render_for, respond, Interaction, PageResponse};
use crate::session;
use crate::state::SharedState;

/// Form field carrying the file.
pub const FILE_FIELD: &str = "file";

pub async fn upload(
    State(state): State<SharedState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> PageResponse {
    let (jar, id) = session::resolve(jar, &state.sessions).await;

    // One file per upload; anything after the first file field is ignored.
    let mut received = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await?;
        if !name.is_empty() {
            received = Some(UploadedFile::new(name, content));
        }
        break;
    }

    let interaction = match received {
        Some(file) => {
            info!(session = %id, name = %file.name, bytes = file.size(), "file uploaded");
            let config = &state.config.upload;
            match state.sessions.update(id, |s| receive(s, file, config)).await {
                Ok(_) => Interaction::View,
                Err(e) => Interaction::UploadRejected(e.to_string()),
            }
        }
        None => Interaction::View,
    };

    render_for(&state, jar, id, interaction).await
}

pub async fn validate_pdf(State(state): State<SharedState>, jar: CookieJar) -> PageResponse {
    respond(&state, jar, Interaction::ValidatePdf).await
}

pub async fn preview_pdf(State(state): State<SharedState>, jar: CookieJar) -> PageResponse {
    respond(&state, jar, Interaction::PreviewPdf).await
}
