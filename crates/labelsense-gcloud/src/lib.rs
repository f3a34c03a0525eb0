//! LabelSense GCloud — external collaborators behind thin REST clients.
//!
//! Image acquisition (Vision OCR) and translation (Translate v2) sit outside
//! the analysis core: the core consumes their string output and is agnostic
//! to how it was produced. Both clients authenticate with the `GOOGLE_API_KEY`
//! environment variable.

pub mod ocr;
pub mod translate;

pub use ocr::VisionOcrClient;
pub use translate::TranslateClient;

/// API key shared by both clients.
pub fn api_key_from_env() -> Option<String> {
    std::env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty())
}
