//! Auth API handlers: thin delegation to the `folio-auth` collaborator.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use folio_auth::AuthService;

use crate::app::dto::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, RegisterResponse, SessionResponse,
};
use crate::app::errors;
use crate::context::SessionContext;
use crate::middleware;

pub async fn login(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(req): Json<LoginRequest>,
) -> Response {
    match auth.login(&req.email, &req.password, Utc::now()) {
        Ok(session) => {
            let cookie = session_cookie(&session.token);
            let body = SessionResponse {
                token: session.token,
                expires_at: session.claims.exp,
            };
            ([(header::SET_COOKIE, cookie)], Json(body)).into_response()
        }
        Err(e) => errors::auth_error_to_response(e),
    }
}

pub async fn register(
    Extension(auth): Extension<Arc<AuthService>>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    match auth.register(&req.email, &req.password) {
        Ok(user_id) => {
            (StatusCode::CREATED, Json(RegisterResponse { user_id })).into_response()
        }
        Err(e) => errors::auth_error_to_response(e),
    }
}

/// Gated: `SessionContext` is guaranteed by the middleware.
pub async fn change_password(
    Extension(auth): Extension<Arc<AuthService>>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<ChangePasswordRequest>,
) -> Response {
    match auth.change_password(session.user_id(), &req.current_password, &req.new_password) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}

/// Logout succeeds regardless of session state: with a decodable token the
/// session is revoked, otherwise there is nothing to do. Either way the
/// browser cookie gets cleared.
pub async fn logout(
    Extension(auth): Extension<Arc<AuthService>>,
    headers: HeaderMap,
) -> Response {
    if let Some(token) = middleware::token_from_headers(&headers) {
        if let Err(e) = auth.logout(token) {
            tracing::debug!(error = %e, "logout with unusable token");
        }
    }

    let clear = "session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, clear.to_string())],
    )
        .into_response()
}

fn session_cookie(token: &str) -> String {
    format!("session={token}; Path=/; HttpOnly; SameSite=Lax")
}
