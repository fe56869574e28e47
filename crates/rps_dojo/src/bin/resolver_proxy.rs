//! Fronting proxy for the Round Resolver.
//!
//! Sits between game clients and the resolver's real network location,
//! forwarding the two resolver endpoints. Bearer credentials pass through
//! untouched; the proxy neither acquires nor validates them.
//!
//! Failure mapping:
//! - upstream unreachable (connect error, reset, timeout) → `502` with a
//!   single `"Resolver unreachable"` signal;
//! - upstream authentication rejection (401/403) passes through with its
//!   original status, so clients can tell the two apart.
//!
//! ## Usage
//! ```bash
//! # Terminal 1: Start the opponent service
//! cargo run -- opponent --port 5000
//!
//! # Terminal 2: Start the proxy
//! cargo run --bin resolver_proxy
//!
//! # Point the game at the proxy
//! # rps_dojo.toml: resolver_url = "http://127.0.0.1:3001"
//! ```

use axum::{
    Json, Router,
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::Response,
    routing::post,
};
use http_body_util::BodyExt;
use hyper_util::{client::legacy::Client, rt::TokioExecutor};
use rps_dojo::wire::ErrorReply;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Configuration for the proxy server
#[derive(Debug, Clone)]
struct ProxyConfig {
    /// Port to listen on
    proxy_port: u16,
    /// Resolver base URL to forward to
    target_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            proxy_port: 3001,
            target_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl ProxyConfig {
    /// Environment overrides: `RPS_PROXY_PORT`, `RPS_RESOLVER_URL`.
    fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(port) = std::env::var("RPS_PROXY_PORT") {
            match port.parse() {
                Ok(port) => config.proxy_port = port,
                Err(_) => warn!(port = %port, "ignoring unparseable RPS_PROXY_PORT"),
            }
        }
        if let Ok(url) = std::env::var("RPS_RESOLVER_URL") {
            config.target_url = url;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env();

    info!("🔧 Starting resolver proxy");
    info!("📡 Listening on: http://127.0.0.1:{}", config.proxy_port);
    info!("🎯 Forwarding to: {}", config.target_url);

    let state = Arc::new(config.clone());

    let app = Router::new()
        .route("/train", post(forward))
        .route("/battle", post(forward))
        .with_state(state);

    let addr = format!("127.0.0.1:{}", config.proxy_port);
    let listener = TcpListener::bind(&addr).await?;

    info!("✅ Proxy ready - clients can connect");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Forwards one resolver request upstream.
#[tracing::instrument(skip(config, req), fields(method = %req.method(), uri = %req.uri()))]
async fn forward(
    State(config): State<Arc<ProxyConfig>>,
    mut req: Request,
) -> Result<Response, (StatusCode, Json<ErrorReply>)> {
    let path = req.uri().path();
    let target_uri = format!("{}{}", config.target_url, path);

    debug!(target_uri = %target_uri, "forwarding request upstream");

    *req.uri_mut() = target_uri.parse().map_err(|e| {
        error!(error = ?e, target_uri = %target_uri, "failed to parse target URI");
        unreachable_signal()
    })?;

    let client = Client::builder(TokioExecutor::new()).build_http();

    let resp = client.request(req).await.map_err(|e| {
        error!(error = %e, target = %config.target_url, "upstream unreachable");
        unreachable_signal()
    })?;

    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        // Pass the rejection through untouched so it stays distinguishable
        // from the resolver being down.
        warn!(%status, "upstream rejected credentials");
    }

    // Convert the upstream response body to an axum body
    let (mut parts, body) = resp.into_parts();
    let collected = body.collect().await.map_err(|e| {
        error!(error = ?e, %status, "failed to collect upstream response body");
        unreachable_signal()
    })?;
    let body_bytes = collected.to_bytes();

    // The full body is in hand now: drop chunked framing, set the length.
    parts.headers.remove("transfer-encoding");
    if let Ok(len) = body_bytes.len().to_string().parse() {
        parts.headers.insert("content-length", len);
    }

    debug!(%status, bytes = body_bytes.len(), "forwarding upstream response to client");
    Ok(Response::from_parts(parts, Body::from(body_bytes)))
}

/// The single signal every upstream transport failure maps to.
fn unreachable_signal() -> (StatusCode, Json<ErrorReply>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorReply {
            error: "Resolver unreachable".to_string(),
        }),
    )
}
