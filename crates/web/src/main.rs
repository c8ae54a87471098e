#[tokio::main]
async fn main() {
    // Logging must be usable before any listener opens; the serving code
    // reports its failures through it.
    if let Err(e) = folio_observability::init() {
        eprintln!("failed to initialize logging: {e}");
        std::process::exit(1);
    }

    tracing::info!("starting application");

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let app = folio_web::app::build_app(jwt_secret);

    folio_web::serve::run(app).await;
}
