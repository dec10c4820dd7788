// Axum API Server Module
//
// Purpose: REST API over the placement planner
// The planner is immutable, so state is a single Arc shared by all handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::planner::{report, AnalysisResponse, Planner};
use crate::{Locale, PlacementError};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Planner>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog endpoints (read-only)
        .route("/api/species", get(list_species))
        .route("/api/enclosures", get(list_enclosures))

        // Placement analysis
        .route("/api/analyze", post(analyze))
        .route("/api/explain", post(explain))

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
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

async fn list_species(State(state): State<AppState>) -> Json<Value> {
    let species: Vec<_> = state.planner.catalog().traits().iter().collect();
    Json(serde_json::json!({
        "rows": species.len(),
        "data": species,
    }))
}

async fn list_enclosures(State(state): State<AppState>) -> Json<Value> {
    let enclosures = state.planner.catalog().enclosures();
    Json(serde_json::json!({
        "rows": enclosures.len(),
        "data": enclosures,
    }))
}

/// Quantity is kept as raw JSON so that `1.5`, `"2"` or `null` reach the
/// validator and come back as `InvalidQuantity` instead of a 400 from serde.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub species: String,
    #[serde(default)]
    pub quantity: Value,
}

async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let locale = state.planner.config().locale;
    let result = state.planner.analyze_json(&request.species, &request.quantity);

    if let Err(e) = &result {
        tracing::debug!("Analyze {:?} rejected: {}", request.species, e);
        return Err(AppError::placement(e, locale));
    }
    Ok(Json(AnalysisResponse::from_result(&result, locale)))
}

async fn explain(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, AppError> {
    let locale = state.planner.config().locale;
    let verdicts = state
        .planner
        .explain_json(&request.species, &request.quantity)
        .map_err(|e| AppError::placement(&e, locale))?;

    Ok(Json(serde_json::json!({ "enclosures": verdicts })))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Placement(String),
}

impl AppError {
    fn placement(error: &PlacementError, locale: Locale) -> Self {
        AppError::Placement(report::error_message(error, locale).to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Placement(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
