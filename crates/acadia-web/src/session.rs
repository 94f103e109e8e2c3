//! Session cookie handling.

use acadia_common::SessionStore;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "acadia_session";

/// Session id for this request. Unknown or missing cookies get a fresh id,
/// which is written back to the jar. The state is initialized either way;
/// initialization is a no-op for existing sessions.
pub async fn resolve(jar: CookieJar, store: &SessionStore) -> (CookieJar, Uuid) {
    let presented = jar
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok());

    let (jar, id) = match presented {
        Some(id) if store.contains(id).await => (jar, id),
        _ => {
            let id = Uuid::new_v4();
            let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            (jar.add(cookie), id)
        }
    };

    store.initialize(id).await;
    (jar, id)
}
