//! HTTP route handlers.

pub mod analyze;
pub mod scan;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use labelsense_core::Error;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().merge(scan::routes()).merge(analyze::routes())
}

/// GET / — service banner.
async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "LabelSense API is running. POST a label image to /api/scan or translated text to /api/analyze.",
    }))
}

/// Map a core error to an HTTP response. Classifier absence is 503 so a
/// caller can tell "cannot classify right now" apart from a genuine all-false
/// verdict; upstream OCR/translation failures are 502.
pub(crate) fn error_response(err: &Error) -> (StatusCode, Json<serde_json::Value>) {
    let (status, kind) = match err {
        Error::ClassifierUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "classifier_unavailable"),
        Error::Ocr(_) => (StatusCode::BAD_GATEWAY, "ocr_failed"),
        Error::Translate(_) => (StatusCode::BAD_GATEWAY, "translation_failed"),
        Error::Http(_) => (StatusCode::BAD_GATEWAY, "upstream_unreachable"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };

    (
        status,
        Json(serde_json::json!({
            "status": "error",
            "kind": kind,
            "message": err.to_string(),
        })),
    )
}
