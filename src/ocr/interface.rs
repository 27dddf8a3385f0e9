//! OCR interface - cloud and local engines implement the same contract

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR service error: {0}")]
    Service(String),

    #[error("image could not be processed: {0}")]
    Image(#[from] image::ImageError),

    #[error("text recognition failed: {0}")]
    Recognition(String),

    #[error("OCR engine unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A source of text extracted from image bytes
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Extract the text contained in an encoded image (PNG/JPEG bytes).
    /// An image without text is `Ok` with an empty string.
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError>;

    /// Short name used in logs, e.g. "textract" or "tesseract"
    fn provider_name(&self) -> &str;
}
