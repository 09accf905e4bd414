// Axum API Server Module
//
// Purpose: expose the zone distribution engine over HTTP
// Every request is computed from scratch; no state is shared between requests.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::ZoneError;
use crate::formatters::DistributionReport;
use crate::zones::{
    self, tables, DistributionResult, LatitudeBand, ZoneQuery, DEFAULT_BASE_TEMPERATURE,
    DEFAULT_MOUNTAIN_HEIGHT,
};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone, Debug)]
pub struct AppState {
    /// Upper bound on queries accepted by POST /api/zones/batch
    pub max_batch_queries: usize,
}

impl AppState {
    pub fn new(max_batch_queries: usize) -> Self {
        Self { max_batch_queries }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(1000)
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Reference table
        .route("/api/latitude-bands", get(list_latitude_bands))
        .route("/api/latitude-bands/:key", get(get_latitude_band))

        // Distribution endpoints
        .route("/api/zones", get(get_zones))
        .route("/api/zones/batch", post(get_zones_batch))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ZonesQuery {
    pub latitude: Option<String>,
    pub base_temp: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    pub latitude: String,
    pub base_temp: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct BatchZonesRequest {
    pub queries: Vec<BatchQuery>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_latitude_bands() -> Json<serde_json::Value> {
    let configs: Vec<_> = tables::all_configs().collect();
    Json(serde_json::json!({ "latitude_bands": configs }))
}

async fn get_latitude_band(Path(key): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let latitude: LatitudeBand = key.parse()?;
    Ok(Json(serde_json::json!(latitude.config())))
}

async fn get_zones(Query(params): Query<ZonesQuery>) -> Result<Json<serde_json::Value>, AppError> {
    let latitude = match params.latitude.as_deref() {
        Some(key) => key.parse()?,
        None => zones::DEFAULT_LATITUDE,
    };
    let base_temperature = params.base_temp.unwrap_or(DEFAULT_BASE_TEMPERATURE);
    let mountain_height = params.height.unwrap_or(DEFAULT_MOUNTAIN_HEIGHT);

    let result = zones::distribute(latitude, base_temperature, mountain_height)?;
    report_json(&result).map(Json)
}

/// Batch distribution for many mountains
///
/// POST /api/zones/batch
/// Body: { "queries": [{ "latitude": "subtropical", "base_temp": 15, "height": 7800 }, ...] }
///
/// Invalid queries do not fail the batch; each slot carries either
/// `{"ok": ...}` or `{"error": "..."}` in request order.
async fn get_zones_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchZonesRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if req.queries.len() > state.max_batch_queries {
        return Err(AppError::BadRequest(format!(
            "Batch of {} queries exceeds limit of {}",
            req.queries.len(),
            state.max_batch_queries
        )));
    }

    let start = std::time::Instant::now();
    let count = req.queries.len();

    // Parse keys up front; unknown keys become per-slot errors
    let parsed: Vec<Result<ZoneQuery, ZoneError>> = req
        .queries
        .iter()
        .map(|q| {
            q.latitude
                .parse::<LatitudeBand>()
                .map(|latitude| ZoneQuery::new(latitude, q.base_temp, q.height))
        })
        .collect();

    // CPU-bound: run rayon on a blocking thread
    let results = tokio::task::spawn_blocking(move || {
        use rayon::prelude::*;
        parsed
            .par_iter()
            .map(|query| query.clone().and_then(|q| q.run()))
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| AppError::Internal(format!("Batch task failed: {}", e)))?;

    let mut items = Vec::with_capacity(results.len());
    for result in &results {
        let item = match result {
            Ok(distribution) => serde_json::json!({ "ok": report_json(distribution)? }),
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };
        items.push(item);
    }

    tracing::info!("Batch of {} distributions computed in {:?}", count, start.elapsed());

    Ok(Json(serde_json::json!({
        "count": count,
        "results": items
    })))
}

fn report_json(result: &DistributionResult) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(DistributionReport::new(result))
        .map_err(|e| AppError::Internal(format!("Serialization failed: {}", e)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ZoneError> for AppError {
    fn from(err: ZoneError) -> Self {
        if err.is_not_found() {
            AppError::NotFound(err.to_string())
        } else {
            AppError::BadRequest(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
