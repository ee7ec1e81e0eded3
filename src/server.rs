//! HTTP API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/extract` | Run the pipeline for `{ "url": string }` |
//! | `GET`  | `/api/taxonomy` | The classification rules in evaluation order |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Errors are returned as `{ "error": "<message>" }`. Bad input and upstream
//! fetch failures answer `400` with a specific message; anything else answers
//! `500` with a generic message and the cause is only logged.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::pipeline::{Pipeline, PipelineError, PipelineResult};
use crate::taxonomy::Taxonomy;

/// Message returned for any failure not caused by the caller
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Failed to process URL. Please check the URL and try again.";

/// Shared state handed to every handler
#[derive(Clone)]
struct AppState {
    pipeline: Arc<Pipeline>,
}

/// Build the application router around `pipeline`
pub fn router(pipeline: Pipeline) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/extract", post(handle_extract))
        .route("/api/taxonomy", get(handle_taxonomy))
        .route("/health", get(handle_health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `bind_addr` until interrupted
pub async fn run_server(bind_addr: &str, pipeline: Pipeline) -> anyhow::Result<()> {
    let app = router(pipeline);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("pagelens listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error that renders as the `{ "error": ... }` contract
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        if err.is_client_error() {
            warn!("Rejected request: {}", err);
            ApiError {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            }
        } else {
            error!("Error processing URL: {}", err);
            ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: INTERNAL_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

// ============ POST /api/extract ============

#[derive(Debug, Deserialize)]
struct ExtractRequest {
    #[serde(default)]
    url: Option<Value>,
}

impl ExtractRequest {
    /// The url field as pipeline input.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) count as missing. Any other
    /// non-string value is passed on as its JSON text, which never parses as
    /// an absolute URL.
    fn into_url(self) -> Option<String> {
        match self.url? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(url) => Some(url),
            other => Some(other.to_string()),
        }
    }
}

/// Read the request body as JSON regardless of its content type
fn parse_extract_request(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<ExtractRequest>(body) {
        Ok(request) => request.into_url(),
        Err(e) => {
            warn!("Unreadable extract request: {}", e);
            None
        }
    }
}

async fn handle_extract(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PipelineResult>, ApiError> {
    let url = parse_extract_request(&body);

    // Run detached so a panic inside the pipeline becomes a 500
    let pipeline = state.pipeline.clone();
    let result = tokio::spawn(async move { pipeline.run(url.as_deref()).await })
        .await
        .map_err(|e| PipelineError::Internal(format!("pipeline task failed: {}", e)))??;

    Ok(Json(result))
}

// ============ GET /api/taxonomy ============

async fn handle_taxonomy(State(state): State<AppState>) -> Json<Taxonomy> {
    Json(state.pipeline.classifier().taxonomy().clone())
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
