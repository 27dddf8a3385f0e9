use async_trait::async_trait;
use aws_sdk_translate::error::DisplayErrorContext;
use aws_sdk_translate::Client;
use tracing::{debug, info};

use super::{TranslateError, TranslateRequest, Translator};

/// AWS Translate client; the region comes from the shared SDK config.
pub struct AwsTranslator {
    client: Client,
}

impl AwsTranslator {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        info!("Initialized AwsTranslator");
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslateError> {
        debug!(
            "Translating {} chars: {} -> {}",
            request.text.len(),
            request.source_language,
            request.target_language
        );

        let output = self
            .client
            .translate_text()
            .text(&request.text)
            .source_language_code(&request.source_language)
            .target_language_code(&request.target_language)
            .send()
            .await
            .map_err(|e| TranslateError::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(output.translated_text().to_string())
    }

    async fn list_languages(&self) -> Result<Vec<String>, TranslateError> {
        let output = self
            .client
            .list_languages()
            .send()
            .await
            .map_err(|e| TranslateError::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .languages()
            .iter()
            .map(|language| language.language_code().to_string())
            .collect())
    }
}
