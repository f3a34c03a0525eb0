//! Google Translate v2 — source-language label text to English.
//!
//! The source language is pinned to Korean rather than auto-detected:
//! label text is short and full of romanized brand names, which makes
//! detection unreliable.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use labelsense_core::{Error, Result};

const TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Client for the Translate v2 endpoint, ko → en.
pub struct TranslateClient {
    client: Client,
    api_key: String,
}

impl TranslateClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Translate Korean text to English. Empty or whitespace-only input
    /// short-circuits to an empty string without calling the API.
    pub async fn to_english(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        debug!(chars = text.chars().count(), "translating label text");

        let response = self
            .client
            .post(TRANSLATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "q": text,
                "source": "ko",
                "target": "en",
            }))
            .send()
            .await
            .map_err(|e| Error::Http(format!("Translate request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Translate(format!(
                "Translate API error {}: {}",
                status, body
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| Error::Translate(format!("Invalid Translate response: {}", e)))?;

        parse_translate_response(&value)
    }
}

/// Extract and clean the translated text from a v2 response.
fn parse_translate_response(value: &Value) -> Result<String> {
    let translated = value["data"]["translations"][0]["translatedText"]
        .as_str()
        .ok_or_else(|| Error::Translate("response has no translation".to_string()))?;

    Ok(unescape_html(translated).trim().to_string())
}

/// The v2 API escapes HTML entities in translated text (`&quot;` etc.).
/// Only the standard five occur in practice; `&amp;` goes last so it does
/// not re-expose entities produced by the other replacements.
fn unescape_html(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
