//! Translate interface - cloud translation services implement this contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation service error: {0}")]
    Service(String),
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `request.text`; the raw service output is returned untrimmed.
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslateError>;

    /// Language codes the service accepts
    async fn list_languages(&self) -> Result<Vec<String>, TranslateError>;
}
