//! Google Cloud Vision OCR — extracts source-language text from a label
//! image.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use labelsense_core::{Error, Result};

const ANNOTATE_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Client for the Vision `images:annotate` endpoint with TEXT_DETECTION.
pub struct VisionOcrClient {
    client: Client,
    api_key: String,
}

impl VisionOcrClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Run text detection on raw image bytes and return the full detected
    /// text block. An image with no readable text yields an empty string,
    /// not an error.
    pub async fn extract_text(&self, image: &[u8]) -> Result<String> {
        let body = json!({
            "requests": [{
                "image": { "content": BASE64.encode(image) },
                "features": [{ "type": "TEXT_DETECTION" }],
            }]
        });

        debug!(bytes = image.len(), "submitting image for OCR");

        let response = self
            .client
            .post(ANNOTATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Vision request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Ocr(format!("Vision API error {}: {}", status, body)));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| Error::Ocr(format!("Invalid Vision response: {}", e)))?;

        parse_annotate_response(&value)
    }
}

/// Extract the detected text from an `images:annotate` response. The first
/// annotation is the full text block; per-word annotations follow it.
fn parse_annotate_response(value: &Value) -> Result<String> {
    let first = &value["responses"][0];

    if let Some(message) = first["error"]["message"].as_str() {
        return Err(Error::Ocr(message.to_string()));
    }

    Ok(first["textAnnotations"][0]["description"]
        .as_str()
        .unwrap_or("")
        .trim()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_text_annotation() {
        let value = json!({
            "responses": [{
                "textAnnotations": [
                    { "description": "원재료명: 밀가루, 설탕\n" },
                    { "description": "원재료명:" }
                ]
            }]
        });
        assert_eq!(
            parse_annotate_response(&value).unwrap(),
            "원재료명: 밀가루, 설탕"
        );
    }

    #[test]
    fn test_no_annotations_is_empty_text() {
        let value = json!({ "responses": [{}] });
        assert_eq!(parse_annotate_response(&value).unwrap(), "");
    }

    #[test]
    fn test_api_error_surfaces() {
        let value = json!({
            "responses": [{ "error": { "message": "image too large" } }]
        });
        let err = parse_annotate_response(&value).unwrap_err();
        assert!(matches!(err, Error::Ocr(_)));
        assert!(err.to_string().contains("image too large"));
    }
}
