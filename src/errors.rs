use thiserror::Error;

/// User-facing outcome of a failed request. Exactly one of these, or the
/// translated text, is rendered per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("Unsupported image type. Please upload PNG/JPG/JPEG.")]
    UnsupportedImageType,

    #[error("No text found to translate. Provide text or a clear image.")]
    NoTextFound,

    #[error("Translation failed. Check AWS credentials/region.")]
    TranslationFailed,
}
