//! LabelSense — food-label scanning server.
//!
//! Accepts a label photo, OCRs and translates it, extracts ingredients and
//! declared allergens, and classifies the product on the four dietary axes.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("LABELSENSE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = labelsense_core::LabelSenseConfig::from_env(&data_dir)?;
    let port = config.port;

    // Classifier: ONNX if the feature is on and model files are present,
    // otherwise a backend that reports unavailability per request.
    let classifier = labelsense_classify::create_classifier(&config.data_paths.models);

    let state = Arc::new(AppState::new(config, classifier));

    if state.ocr.is_none() {
        info!("GOOGLE_API_KEY not set; /api/scan disabled, /api/analyze still works");
    }

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("LabelSense server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
