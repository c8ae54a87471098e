//! Page handlers: delegate rendering to `folio-pages`, wrap in HTML
//! responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub async fn landing() -> Response {
    render(folio_pages::landing())
}

pub async fn about() -> Response {
    render(folio_pages::about())
}

pub async fn projects() -> Response {
    render(folio_pages::projects())
}

pub async fn login() -> Response {
    render(folio_pages::login_page())
}

pub async fn register() -> Response {
    render(folio_pages::register_page())
}

/// Gated: the session middleware has already run.
pub async fn change_password() -> Response {
    render(folio_pages::change_password_page())
}

pub async fn error_404() -> Response {
    render(folio_pages::error_404())
}

pub async fn error_500() -> Response {
    render(folio_pages::error_500())
}

pub async fn error_403() -> Response {
    render(folio_pages::error_403())
}

pub async fn error_401() -> Response {
    render(folio_pages::error_401())
}

fn render(result: Result<String, folio_pages::RenderError>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
