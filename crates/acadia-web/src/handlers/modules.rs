//! Module buttons. A press only shows where the module lives.

use axum::extract::{Path, State};
use axum_extra::extract::cookie::CookieJar;

use crate::catalog;
use crate::error::WebError;
use crate::handlers::dashboard::{respond, Interaction, PageResponse};
use crate::state::SharedState;

pub async fn open_module(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
    jar: CookieJar,
) -> PageResponse {
    let module = catalog::find(&slug).ok_or(WebError::UnknownModule(slug))?;
    respond(&state, jar, Interaction::OpenModule(module)).await
}
