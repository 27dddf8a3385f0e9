use async_trait::async_trait;
use image::ImageFormat;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::{debug, info};

use super::{OcrError, OcrProvider};

/// Local OCR fallback: decodes the upload and runs the Tesseract CLI on it.
pub struct TesseractOcr {
    command: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(command: String, language: String) -> Self {
        info!("Initialized TesseractOcr: command={}, language={}", command, language);
        Self { command, language }
    }

    /// Decode the bytes and re-encode them as a temporary PNG Tesseract can read.
    async fn stage_png(bytes: &[u8]) -> Result<NamedTempFile, OcrError> {
        let bytes = bytes.to_vec();
        tokio::task::spawn_blocking(move || -> Result<NamedTempFile, OcrError> {
            let decoded = image::load_from_memory(&bytes)?;
            let mut staged = tempfile::Builder::new().suffix(".png").tempfile()?;
            decoded.write_to(staged.as_file_mut(), ImageFormat::Png)?;
            Ok(staged)
        })
        .await
        .map_err(|e| OcrError::Recognition(format!("decode task failed: {}", e)))?
    }
}

#[async_trait]
impl OcrProvider for TesseractOcr {
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError> {
        let staged = Self::stage_png(image).await?;

        let output = Command::new(&self.command)
            .arg(staged.path())
            .arg("stdout")
            .args(["-l", self.language.as_str()])
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => OcrError::Unavailable(format!(
                    "{} not found (install tesseract-ocr)",
                    self.command
                )),
                _ => OcrError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(stderr.trim().to_string()));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Tesseract recognized {} chars", text.len());
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "tesseract"
    }
}
