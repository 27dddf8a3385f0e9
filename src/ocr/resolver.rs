use std::sync::Arc;
use tracing::{debug, warn};

use super::interface::OcrProvider;

/// Tries OCR providers in priority order and keeps the first usable text.
///
/// Provider failures are logged and treated as "no text"; resolving never fails.
pub struct OcrResolver {
    providers: Vec<Arc<dyn OcrProvider>>,
}

impl OcrResolver {
    pub fn new(providers: Vec<Arc<dyn OcrProvider>>) -> Self {
        Self { providers }
    }

    pub async fn resolve(&self, image: &[u8]) -> String {
        for provider in &self.providers {
            match provider.extract_text(image).await {
                Ok(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        debug!("{} extracted {} chars", provider.provider_name(), text.len());
                        return text.to_string();
                    }
                    debug!("{} found no text", provider.provider_name());
                }
                Err(e) => {
                    warn!("{} failed: {}", provider.provider_name(), e);
                }
            }
        }
        String::new()
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.provider_name()).collect()
    }
}
