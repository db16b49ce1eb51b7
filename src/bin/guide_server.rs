// Reading guide server entry point
//
// Usage: cargo run --bin guide_server
// Settings come from the environment (see `reading_guide::config`).

use reading_guide::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "reading_guide=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting guide server...");

    let config = ServerConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    match &config.content_path {
        Some(path) => tracing::info!("  GUIDE_CONTENT: {}", path.display()),
        None => tracing::info!("  GUIDE_CONTENT: (bundled)"),
    }

    // Content is loaded and validated once, before accepting requests
    let state = AppState::new(&config)?;
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
