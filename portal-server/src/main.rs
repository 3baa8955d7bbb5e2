use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting workflow portal backend...");

    // Seqera configuration is resolved once at startup. A misconfigured
    // deployment still serves /health; launch requests then fail with 500.
    let state = api::AppState::from_env();
    if let Err(e) = &state.seqera {
        tracing::warn!("Seqera client unavailable: {}", e);
    }

    let app = api::create_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
