pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{Config, CorsConfig, ServerConfig},
    summary::Summarizer,
};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub use handlers::AppState;

pub async fn run(config: Config) -> Result<()> {
    let summarizer = Summarizer::new(config.llm.clone())?;

    if !summarizer.is_configured() {
        warn!("OPENAI_API_KEY is not set; /summarize-text will answer with HTTP 500");
    }

    let app_state = AppState {
        summarizer: Arc::new(summarizer),
    };

    let app = build_router(app_state, &config.server)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

pub fn build_router(app_state: AppState, server: &ServerConfig) -> Result<Router> {
    let router = Router::new()
        .route("/", get(handlers::health))
        .route("/summarize-text", post(handlers::summarize_text))
        .route("/summarize-pdf", post(handlers::summarize_pdf))
        .with_state(app_state)
        .layer(cors_layer(&server.cors)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::config(format!("Invalid CORS origin: '{}'", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
