//! Document QR Server
//!
//! Self-hosted PDF document server with styled QR code generation. QR codes
//! are generated once at startup and served statically afterwards.

use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doc_qr_server::app::build_router;
use doc_qr_server::config::Config;
use doc_qr_server::library::{generate_qr_codes, DocumentScanner};
use doc_qr_server::qr::RenderOptions;
use doc_qr_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_qr_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Starting Document QR Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Docs directory: {}", config.paths.docs_dir.display());
    tracing::info!("Public URL: {}", config.server.public_url);

    let state = AppState::new(config.clone());

    // Batch-generate QR codes before serving. Failures are per-document and
    // never prevent the server from starting.
    let options = RenderOptions {
        scale: config.qr.scale,
        border: config.qr.border,
        dot_scale: config.qr.dot_scale,
    };
    let scanner = DocumentScanner::new(config.paths.docs_dir.clone(), state.logos_dir());
    match scanner.scan() {
        Ok(entries) => {
            match generate_qr_codes(&entries, &state.qr_dir(), &config.server.public_url, &options)
            {
                Ok(summary) => {
                    tracing::info!(
                        "Startup QR generation: {} generated, {} failed",
                        summary.generated,
                        summary.failed
                    );
                }
                Err(e) => tracing::warn!("QR generation skipped: {}", e),
            }
        }
        Err(e) => tracing::warn!("Document scan failed: {}", e),
    }

    let app = build_router(state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("invalid SERVER_HOST/SERVER_PORT");
    tracing::info!("Document QR Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
