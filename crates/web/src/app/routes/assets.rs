//! Embedded asset serving.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// `GET /assets/*path` — the wildcard capture is already prefix-stripped.
///
/// A miss is the asset store's own not-found behavior: a bare 404, no
/// rendered error page.
pub async fn serve(Path(path): Path<String>) -> Response {
    tracing::debug!(%path, method = "GET", "serving asset");

    match folio_assets::get(&path) {
        Some(asset) => (
            [(header::CONTENT_TYPE, asset.content_type)],
            asset.bytes,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
