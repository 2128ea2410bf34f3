//! HTTP surface: `GET /?path=<raw>` (also `/resolve`) and `/health`.
//!
//! Each request builds its own [`CurlFetcher`]; nothing is shared between
//! requests except the read-only [`AppState`]. If the client disconnects,
//! axum drops the handler future and the remaining probes are never issued.
//!
//! Probe targets are always absolute (`https://` is added to scheme-less
//! input), so the inbound request's own origin never enters resolution.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::config::{HttpConfig, LocateConfig};
use crate::fetch::CurlFetcher;
use crate::pipeline;

/// Read-only state shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub http: HttpConfig,
}

impl AppState {
    pub fn from_config(cfg: &LocateConfig) -> Self {
        Self {
            http: cfg.http.clone(),
        }
    }
}

/// Query parameter holding the raw location.
pub const PATH_PARAM: &str = "path";

/// First value of [`PATH_PARAM`], or empty if absent. Repeated keys are
/// allowed; later values are ignored.
pub fn path_param(pairs: &[(String, String)]) -> &str {
    pairs
        .iter()
        .find(|(key, _)| key == PATH_PARAM)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

/// Build the router with permissive CORS.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_resolve))
        .route("/resolve", get(handle_resolve))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until the process exits.
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .context("HTTP server failed")?;
    Ok(())
}

async fn handle_resolve(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let fetcher = CurlFetcher::new(state.http.clone());
    let resolution = pipeline::resolve(&fetcher, path_param(&pairs)).await;
    let status = if resolution.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(resolution.body())).into_response()
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn path_param_takes_first_value() {
        let p = pairs(&[("path", "example.com/a"), ("path", "example.com/b")]);
        assert_eq!(path_param(&p), "example.com/a");
    }

    #[test]
    fn path_param_skips_other_keys() {
        let p = pairs(&[("v", "2"), ("path", "example.com")]);
        assert_eq!(path_param(&p), "example.com");
    }

    #[test]
    fn path_param_defaults_to_empty() {
        assert_eq!(path_param(&[]), "");
        assert_eq!(path_param(&pairs(&[("other", "x")])), "");
        assert_eq!(path_param(&pairs(&[("path", ""), ("path", "late")])), "");
    }

    #[test]
    fn state_from_config() {
        let cfg = LocateConfig::default();
        assert_eq!(AppState::from_config(&cfg).http, cfg.http);
    }
}
