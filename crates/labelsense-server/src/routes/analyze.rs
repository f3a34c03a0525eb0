//! Text analysis route — runs the pipeline on already-translated text.
//!
//! Usable without GCP credentials; this is also the debugging entry point
//! for the segmentation heuristics.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::routes::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze_text))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// POST /api/analyze — classify translated label text.
async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    match state.analyzer.analyze(&request.text) {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}
