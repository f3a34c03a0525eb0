//! Label scanning route — image upload through the full pipeline.
//!
//! Flow per upload: save the image under `uploads/`, OCR it, translate the
//! text, run segmentation + detection + classification, persist the full
//! result record under `results/`, delete the image, respond with counts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use labelsense_core::{Error, ProductReport, Result};

use crate::routes::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/scan", post(scan_label))
}

/// POST /api/scan — multipart image upload.
async fn scan_label(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let (Some(ocr), Some(translate)) = (&state.ocr, &state.translate) else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "error",
                "kind": "ocr_not_configured",
                "message": "GOOGLE_API_KEY is not set; image scanning is disabled",
            })),
        )
            .into_response();
    };

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(filename) = field.file_name().map(|n| n.to_string()) else {
            continue;
        };
        match field.bytes().await {
            Ok(bytes) => {
                upload = Some((filename, bytes.to_vec()));
                break;
            }
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                        "status": "error",
                        "kind": "upload_failed",
                        "message": format!("Failed to read upload: {}", e),
                    })),
                )
                    .into_response();
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "status": "error",
                "kind": "upload_failed",
                "message": "No file field in multipart body",
            })),
        )
            .into_response();
    };

    // Keep the image on disk while upstream calls run, like any other upload.
    let stamped = timestamped_filename(&filename);
    let image_path = state.config.data_paths.uploads.join(&stamped);
    if let Err(e) = std::fs::write(&image_path, &bytes) {
        return error_response(&Error::Io(e)).into_response();
    }

    let outcome = process_scan(&state, ocr, translate, &bytes, &stamped).await;

    // The image is only needed for the duration of the request.
    if let Err(e) = std::fs::remove_file(&image_path) {
        warn!("Failed to remove upload {}: {}", image_path.display(), e);
    }

    match outcome {
        Ok((saved_file, report)) => Json(serde_json::json!({
            "status": "success",
            "saved_file": saved_file,
            "ingredients_count": report.ingredients.len(),
            "allergens_count": report.allergens.len(),
        }))
        .into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// OCR → translate → analyze → persist. Returns the saved result path.
async fn process_scan(
    state: &AppState,
    ocr: &labelsense_gcloud::VisionOcrClient,
    translate: &labelsense_gcloud::TranslateClient,
    image: &[u8],
    stamped_filename: &str,
) -> Result<(String, ProductReport)> {
    let source_text = ocr.extract_text(image).await?;
    let translated = translate.to_english(&source_text).await?;
    let report = state.analyzer.analyze(&translated)?;

    let save_path = result_path(&state.config.data_paths.results, stamped_filename);
    save_record(&save_path, &source_text, &translated, &report)?;

    info!(
        ingredients = report.ingredients.len(),
        allergens = report.allergens.len(),
        "saved scan result to {}",
        save_path.display()
    );

    Ok((save_path.to_string_lossy().into_owned(), report))
}

/// Prefix the sanitized original filename with an upload timestamp.
fn timestamped_filename(filename: &str) -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}", timestamp, sanitize_filename(filename))
}

/// Strip path separators and shell metacharacters from a client filename.
fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        format!("upload_{}", uuid::Uuid::new_v4())
    } else {
        cleaned
    }
}

/// `results/<image stem>_data.json`.
fn result_path(results_dir: &Path, stamped_filename: &str) -> PathBuf {
    let stem = Path::new(stamped_filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(stamped_filename);
    results_dir.join(format!("{}_data.json", stem))
}

/// Persist the full analysis record: source and translated text plus the
/// report fields, flattened to one object.
fn save_record(
    path: &Path,
    source_text: &str,
    translated: &str,
    report: &ProductReport,
) -> Result<()> {
    let record = serde_json::json!({
        "source_text": source_text,
        "translated_text": translated,
        "ingredients": report.ingredients,
        "allergens": report.allergens,
        "product_classification": report.product_classification,
        "friendly_summary": report.friendly_summary,
    });
    std::fs::write(path, serde_json::to_string_pretty(&record)?)?;
    Ok(())
}
