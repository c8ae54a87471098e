use reqwest::StatusCode;
use serde_json::json;

use folio_web::app::routes::{Gate, ROUTE_TABLE};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the same router as prod, but bind to an ephemeral port.
        Self::spawn_router(folio_web::app::build_app("test-secret".to_string())).await
    }

    async fn spawn_router(router: axum::Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn register_and_login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> String {
    let res = client
        .post(format!("{}/auth/register", base_url))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn every_declared_route_is_registered() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for route in ROUTE_TABLE {
        let path = if route.path.contains('*') {
            "/assets/css/site.css".to_string()
        } else {
            route.path.to_string()
        };

        let method = reqwest::Method::from_bytes(route.method.as_str().as_bytes()).unwrap();
        let mut req = client.request(method, format!("{}{}", srv.base_url, path));
        if route.method == axum::http::Method::POST {
            req = req.json(&json!({}));
        }

        let status = req.send().await.unwrap().status();
        assert_ne!(status, StatusCode::NOT_FOUND, "unregistered: {}", route.path);
        assert_ne!(
            status,
            StatusCode::METHOD_NOT_ALLOWED,
            "wrong method for: {}",
            route.path
        );

        if route.gate == Gate::Session {
            // Without a session the gate must have short-circuited.
            assert_eq!(status, StatusCode::UNAUTHORIZED, "ungated: {}", route.path);
        }
    }
}

#[tokio::test]
async fn pages_render_and_unknown_paths_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/about", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("<h1>About</h1>"));

    let res = client
        .get(format!("{}/nonexistent", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn change_password_page_requires_a_session() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/change-password", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    // The protected page must not have rendered.
    assert!(!res.text().await.unwrap().contains("Change password"));
}

#[tokio::test]
async fn session_grants_access_via_bearer_and_cookie() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "ana@example.com", "longenough").await;

    let res = client
        .get(format!("{}/change-password", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Change password"));

    let res = client
        .get(format!("{}/change-password", srv.base_url))
        .header("Cookie", format!("session={}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_sets_a_session_cookie() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&json!({ "email": "ana@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/auth/login", srv.base_url))
        .json(&json!({ "email": "ana@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let cookie = res
        .headers()
        .get("set-cookie")
        .expect("login sets the session cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn change_password_rotates_the_credential() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "ana@example.com", "old-password").await;

    let res = client
        .post(format!("{}/auth/change-password", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "current_password": "old-password", "new_password": "new-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .post(format!("{}/auth/login", srv.base_url))
        .json(&json!({ "email": "ana@example.com", "password": "old-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/auth/login", srv.base_url))
        .json(&json!({ "email": "ana@example.com", "password": "new-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_current_password_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "ana@example.com", "longenough").await;

    let res = client
        .post(format!("{}/auth/change-password", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "current_password": "bad-guess", "new_password": "new-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = json!({ "email": "ana@example.com", "password": "longenough" });
    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn logout_revokes_the_session_and_clears_the_cookie() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "ana@example.com", "longenough").await;

    let res = client
        .get(format!("{}/logout", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let cookie = res.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));

    // The revoked token no longer opens gated routes.
    let res = client
        .get(format!("{}/change-password", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_a_session_still_succeeds() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/logout", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn assets_are_served_with_the_prefix_stripped() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/assets/css/site.css", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "text/css; charset=utf-8"
    );
    let expected = folio_assets::get("css/site.css").unwrap().bytes;
    assert_eq!(res.bytes().await.unwrap().as_ref(), expected);

    let res = client
        .get(format!("{}/assets/missing.css", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn debug_bind_failure_leaves_the_main_listener_serving() {
    // Hold a port so the debug bind fails.
    let debug_guard = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let debug_addr = debug_guard.local_addr().unwrap().to_string();

    // Reserve an address for the app listener, then release it for run_with.
    let probe = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let app_addr = probe.local_addr().unwrap().to_string();
    drop(probe);

    let app = folio_web::app::build_app("test-secret".to_string());
    let handle = tokio::spawn({
        let app_addr = app_addr.clone();
        async move { folio_web::serve::run_with(app, &app_addr, &debug_addr).await }
    });

    let client = reqwest::Client::new();
    let mut served = false;
    for _ in 0..50 {
        if let Ok(res) = client.get(format!("http://{}/about", app_addr)).send().await {
            assert_eq!(res.status(), StatusCode::OK);
            served = true;
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert!(served, "main listener did not come up with the debug port held");

    handle.abort();
    drop(debug_guard);
}

#[tokio::test]
async fn main_bind_failure_terminates_the_process() {
    // Occupy the fixed application port so the binary cannot bind it.
    let Ok(guard) = tokio::net::TcpListener::bind(folio_web::serve::APP_ADDR).await else {
        // Someone else already owns the port on this host; skip rather than
        // assert against a failure we did not cause.
        return;
    };

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_folio-web"))
        .output()
        .await
        .expect("failed to spawn server binary");

    assert_eq!(output.status.code(), Some(1));
    let logs = String::from_utf8_lossy(&output.stdout);
    assert!(
        logs.contains("failed to bind main listener"),
        "missing fatal log, got: {logs}"
    );

    drop(guard);
}

#[tokio::test]
async fn debug_router_exposes_the_route_table() {
    let srv = TestServer::spawn_router(folio_web::app::routes::debug::router()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/debug/routes", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), ROUTE_TABLE.len());
    assert!(routes
        .iter()
        .any(|r| r["path"] == "/change-password" && r["gate"] == "session"));

    // The debug listener serves no application routes.
    let res = client
        .get(format!("{}/about", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/debug/status", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["service"], "folio-web");
}
