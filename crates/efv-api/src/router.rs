//! Router factory and trailing-slash handling.
//!
//! Axum matches paths exactly, so `/health` and `/health/` are distinct.
//! Routes added through [`StrictSlash::get_strict`] also answer on the
//! slashed form with a `301 Moved Permanently` pointing at the canonical path.

use axum::extract::OriginalUri;
use axum::handler::Handler;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

/// Creates an empty router. Register routes with [`StrictSlash`].
pub fn new_router() -> Router {
    Router::new()
}

/// Route registration that treats `/p` and `/p/` as the same endpoint.
pub trait StrictSlash<S> {
    /// Routes `GET path` to `handler` and redirects `GET path/` to it.
    fn get_strict<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static;
}

impl<S> StrictSlash<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn get_strict<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let canonical = path.trim_end_matches('/');
        if canonical.is_empty() {
            return self.route("/", get(handler));
        }
        self.route(canonical, get(handler))
            .route(&format!("{canonical}/"), get(redirect_to_canonical))
    }
}

/// Redirects to the request path without its trailing slash.
///
/// Uses [`OriginalUri`] so redirects from nested routers keep their prefix.
async fn redirect_to_canonical(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, canonical_location(&uri))],
    )
}

fn canonical_location(uri: &Uri) -> String {
    let path = match uri.path().trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    }
}
