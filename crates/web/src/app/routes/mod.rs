use axum::http::Method;
use axum::{
    routing::{get, post},
    Router,
};

pub mod assets;
pub mod auth;
pub mod debug;
pub mod pages;

/// Whether a route sits behind the session middleware.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Gate {
    Public,
    Session,
}

impl Gate {
    pub fn as_str(self) -> &'static str {
        match self {
            Gate::Public => "public",
            Gate::Session => "session",
        }
    }
}

/// One declared route.
#[derive(Debug, Clone)]
pub struct RouteSpec {
    pub method: Method,
    pub path: &'static str,
    pub gate: Gate,
}

/// The full application route table.
///
/// `public_router`/`gated_router` register exactly these entries; axum
/// panics at startup on a duplicate (method, path) pair, so a conflicting
/// edit here fails fast rather than shadowing a route. The table itself
/// also feeds the debug listener's route dump and the table-driven tests.
pub static ROUTE_TABLE: &[RouteSpec] = &[
    RouteSpec { method: Method::GET, path: "/", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/about", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/projects", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/login", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/register", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/change-password", gate: Gate::Session },
    RouteSpec { method: Method::GET, path: "/error/404", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/error/500", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/error/403", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/error/401", gate: Gate::Public },
    RouteSpec { method: Method::POST, path: "/auth/login", gate: Gate::Public },
    RouteSpec { method: Method::POST, path: "/auth/register", gate: Gate::Public },
    RouteSpec { method: Method::POST, path: "/auth/change-password", gate: Gate::Session },
    RouteSpec { method: Method::GET, path: "/logout", gate: Gate::Public },
    RouteSpec { method: Method::GET, path: "/assets/*path", gate: Gate::Public },
];

/// Router for everything reachable without a session.
pub fn public_router() -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        .route("/error/404", get(pages::error_404))
        .route("/error/500", get(pages::error_500))
        .route("/error/403", get(pages::error_403))
        .route("/error/401", get(pages::error_401))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/logout", get(auth::logout))
        .route("/assets/*path", get(assets::serve))
}

/// Router for session-gated endpoints; the caller wraps this with the
/// session middleware before merging.
pub fn gated_router() -> Router {
    Router::new()
        .route("/change-password", get(pages::change_password))
        .route("/auth/change-password", post(auth::change_password))
}
