//! Introspection routes for the debug listener.
//!
//! Served only on the debug port; never merged into the application router.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::app::routes::ROUTE_TABLE;

pub fn router() -> Router {
    Router::new()
        .route("/debug/status", get(status))
        .route("/debug/routes", get(route_table))
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "pid": std::process::id(),
    }))
}

async fn route_table() -> Json<Value> {
    let routes: Vec<Value> = ROUTE_TABLE
        .iter()
        .map(|route| {
            json!({
                "method": route.method.as_str(),
                "path": route.path,
                "gate": route.gate.as_str(),
            })
        })
        .collect();

    Json(json!({ "routes": routes }))
}
