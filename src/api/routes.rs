//! Receipt routes

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::processor::ReceiptProcessor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub processor: ReceiptProcessor,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET / - Service banner
async fn index() -> &'static str {
    "Receipt Processor Service"
}

/// POST /receipts/process - Validate, score and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));
    if !is_json {
        return Err(ApiError::UnsupportedContentType);
    }

    let raw: Value = serde_json::from_slice(&body).map_err(ApiError::MalformedJson)?;
    let scored = state.processor.process(&raw)?;

    Ok(Json(ProcessResponse { id: scored.id }))
}

/// GET /receipts/:id/points - Points recorded for a receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.processor.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// Build the router with all routes, without middleware
pub fn create_router(processor: ReceiptProcessor) -> Router {
    let state = AppState { processor };

    Router::new()
        .route("/", get(index))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
}
