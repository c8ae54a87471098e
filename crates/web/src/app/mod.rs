//! HTTP application wiring (axum router + collaborator wiring).
//!
//! Layout:
//! - `routes/`: the declarative route table and the handlers, one file per
//!   concern (pages, auth API, assets, debug introspection)
//! - `dto.rs`: request/response DTOs for the auth API
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router};

use folio_auth::{AuthService, SessionValidator};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full application router (public entrypoint used by `main.rs`
/// and the black-box tests).
pub fn build_app(jwt_secret: String) -> Router {
    build_app_with(Arc::new(AuthService::new(jwt_secret.as_bytes())))
}

/// Same, but with a caller-supplied auth collaborator.
pub fn build_app_with(auth: Arc<AuthService>) -> Router {
    let sessions: Arc<dyn SessionValidator> = auth.clone();
    let auth_state = middleware::AuthState { sessions };

    // Gated routes: the session middleware must short-circuit before any
    // protected handler runs.
    let gated = routes::gated_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::session_middleware,
    ));

    routes::public_router()
        .merge(gated)
        .layer(Extension(auth))
}
