//! Error types for LabelSense.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("Translation error: {0}")]
    Translate(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
