//! Anclora Flow placeholder service
//!
//! Serves the single read-only health endpoint and nothing else. The
//! process shares no state or protocol with the administration CLI.

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

/// Port the service listens on unless `PORT` overrides it
const DEFAULT_PORT: u16 = 8020;

/// Static confirmation payload for `GET /health`
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}

fn app() -> Router {
    Router::new().route("/health", get(health))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anclora_server=info".into()),
        )
        .init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {:?}", raw))?,
        Err(_) => DEFAULT_PORT,
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("health endpoint ready on http://localhost:{}/health", port);

    axum::serve(listener, app()).await?;
    Ok(())
}
