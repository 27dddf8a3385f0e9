use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use tracing::{debug, info, warn};

use crate::errors::PipelineError;
use crate::state::AppState;
use crate::upload::{is_allowed_image, secure_filename};

/// Fields of the translate form as submitted.
#[derive(Debug, Default)]
pub struct Submission {
    pub language: Option<String>,
    pub text_input: Option<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Bytes,
}

/// What the result page shows: never both a translation and an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Blank,
    Translated(String),
    Failed(PipelineError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub language: String,
    pub outcome: Outcome,
}

impl PageView {
    pub fn blank(language: &str) -> Self {
        Self {
            language: language.to_string(),
            outcome: Outcome::Blank,
        }
    }
}

/// Collect the form fields; unknown fields are skipped.
pub async fn read_submission(multipart: &mut Multipart) -> Result<Submission, MultipartError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "language" => submission.language = Some(field.text().await?),
            "text_input" => submission.text_input = Some(field.text().await?),
            "image_file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty file part when nothing was chosen.
                if !filename.is_empty() {
                    submission.image = Some(ImageUpload { filename, bytes });
                }
            }
            other => debug!("Ignoring form field {:?}", other),
        }
    }

    Ok(submission)
}

/// Run one submission through OCR (if an image was sent) and translation.
pub async fn process_submission(state: &AppState, submission: Submission) -> PageView {
    let system_config = &state.config.system_config;
    let language = submission
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(&system_config.default_language)
        .to_string();

    let outcome = match resolve_text(state, submission).await {
        Ok(text) if text.trim().is_empty() => Outcome::Failed(PipelineError::NoTextFound),
        Ok(text) => match state.orchestrator.translate(&text, &language).await {
            Ok(translated) => {
                info!("Translated {} bytes into {}", text.len(), language);
                Outcome::Translated(translated)
            }
            Err(e) => Outcome::Failed(e),
        },
        Err(e) => Outcome::Failed(e),
    };

    PageView { language, outcome }
}

/// Pick the text source: OCR output when an image is attached, typed text otherwise.
async fn resolve_text(state: &AppState, submission: Submission) -> Result<String, PipelineError> {
    let Some(upload) = submission.image else {
        debug!("No image attached, using typed text");
        return Ok(submission.text_input.unwrap_or_default().trim().to_string());
    };

    let filename = secure_filename(&upload.filename);
    if !is_allowed_image(&filename, &state.config.system_config.allowed_image_exts) {
        info!("Rejected upload {:?}", upload.filename);
        return Err(PipelineError::UnsupportedImageType);
    }

    match state.staging.stage(&filename, &upload.bytes).await {
        Ok(image) => Ok(state.resolver.resolve(&image).await),
        Err(e) => {
            warn!("Failed to stage upload {}: {}", filename, e);
            Ok(String::new())
        }
    }
}
