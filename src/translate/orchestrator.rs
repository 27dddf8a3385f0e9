use std::sync::Arc;
use tracing::{error, info, warn};

use super::interface::{TranslateRequest, Translator};
use crate::errors::PipelineError;

/// Validates input text, calls the translator and classifies the outcome.
pub struct TranslationOrchestrator {
    translator: Arc<dyn Translator>,
    source_language: String,
}

impl TranslationOrchestrator {
    pub fn new(translator: Arc<dyn Translator>, source_language: String) -> Self {
        Self {
            translator,
            source_language,
        }
    }

    /// Returns the trimmed translation. Blank input never reaches the translator.
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::NoTextFound);
        }

        let request = TranslateRequest {
            text: text.to_string(),
            source_language: self.source_language.clone(),
            target_language: target_language.to_string(),
        };

        match self.translator.translate(&request).await {
            Ok(translated) => {
                let translated = translated.trim();
                if translated.is_empty() {
                    // An empty reply is indistinguishable from a failure here.
                    error!("Translate failed: empty output for target {}", target_language);
                    Err(PipelineError::TranslationFailed)
                } else {
                    Ok(translated.to_string())
                }
            }
            Err(e) => {
                error!("Translate failed: {}", e);
                Err(PipelineError::TranslationFailed)
            }
        }
    }

    /// Log a sample of supported languages; failures only warn.
    pub async fn probe_languages(&self) {
        match self.translator.list_languages().await {
            Ok(languages) => {
                let sample: Vec<&str> = languages.iter().take(3).map(String::as_str).collect();
                info!(
                    "Translation service reachable: {} languages, e.g. {:?}",
                    languages.len(),
                    sample
                );
            }
            Err(e) => warn!("Could not list translation languages: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTranslator;

    fn orchestrator(translator: Arc<FakeTranslator>) -> TranslationOrchestrator {
        TranslationOrchestrator::new(translator, "auto".to_string())
    }

    #[tokio::test]
    async fn blank_text_is_rejected_without_calling_translator() {
        let translator = FakeTranslator::returning("unused");
        let orchestrator = orchestrator(translator.clone());

        for text in ["", "   ", "\n\t  \r\n"] {
            assert_eq!(
                orchestrator.translate(text, "fr").await,
                Err(PipelineError::NoTextFound)
            );
        }
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn success_returns_trimmed_translation() {
        let translator = FakeTranslator::returning("  Bonjour le monde \n");
        let orchestrator = orchestrator(translator.clone());

        let result = orchestrator.translate("Hello\nWorld", "fr").await;
        assert_eq!(result, Ok("Bonjour le monde".to_string()));

        let requests = translator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "Hello\nWorld");
        assert_eq!(requests[0].source_language, "auto");
        assert_eq!(requests[0].target_language, "fr");
    }

    #[tokio::test]
    async fn translator_error_is_translation_failed() {
        let orchestrator = orchestrator(FakeTranslator::failing());
        assert_eq!(
            orchestrator.translate("Hello", "de").await,
            Err(PipelineError::TranslationFailed)
        );
    }

    #[tokio::test]
    async fn empty_translation_is_translation_failed() {
        let orchestrator = orchestrator(FakeTranslator::returning("   "));
        assert_eq!(
            orchestrator.translate("Hello", "de").await,
            Err(PipelineError::TranslationFailed)
        );
    }

    #[tokio::test]
    async fn probe_survives_any_translator() {
        orchestrator(FakeTranslator::failing()).probe_languages().await;
        orchestrator(FakeTranslator::returning("x")).probe_languages().await;
    }
}
