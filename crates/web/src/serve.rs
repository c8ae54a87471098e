//! The two listening endpoints.
//!
//! Wiring is synchronous and happens once; serving blocks forever. The
//! debug listener lives in its own task and shares nothing with the
//! application listener beyond process-level logging.

use axum::Router;
use tokio::net::TcpListener;

use crate::app::routes::debug;

/// Application traffic.
pub const APP_ADDR: &str = "0.0.0.0:8090";

/// Introspection only; loopback so it is never exposed by accident.
pub const DEBUG_ADDR: &str = "127.0.0.1:6060";

/// Serve the application on the fixed ports. Blocks until a fatal
/// listener error.
pub async fn run(app: Router) {
    run_with(app, APP_ADDR, DEBUG_ADDR).await;
}

/// Same, with caller-chosen addresses (tests bind ephemeral ports).
///
/// Debug listener failure is logged and non-fatal; application listener
/// failure terminates the process.
pub async fn run_with(app: Router, app_addr: &str, debug_addr: &str) {
    tokio::spawn(serve_debug(debug_addr.to_string()));

    let listener = match TcpListener::bind(app_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = app_addr, "failed to bind main listener");
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "main listener started"),
        Err(e) => tracing::warn!(error = %e, "main listener address unavailable"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "main listener failed");
        std::process::exit(1);
    }
}

async fn serve_debug(addr: String) {
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            // Non-fatal: the application keeps serving without introspection.
            tracing::error!(error = %e, %addr, "failed to start debug listener");
            return;
        }
    };

    tracing::info!(%addr, "debug listener started");

    if let Err(e) = axum::serve(listener, debug::router()).await {
        tracing::error!(error = %e, "debug listener stopped");
    }
}
