use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use folio_auth::AuthError;

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::InvalidCredentials => {
            json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", err.to_string())
        }
        AuthError::EmailTaken => json_error(StatusCode::CONFLICT, "email_taken", err.to_string()),
        AuthError::InvalidEmail => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_email", err.to_string())
        }
        AuthError::WeakPassword(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "weak_password", err.to_string())
        }
        AuthError::InvalidToken | AuthError::TokenExpired | AuthError::SessionRevoked => {
            json_error(StatusCode::UNAUTHORIZED, "invalid_session", err.to_string())
        }
        AuthError::UserNotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        AuthError::Hash(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "hash_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
