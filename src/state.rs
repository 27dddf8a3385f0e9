use aws_config::BehaviorVersion;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::ocr::tesseract::TesseractOcr;
use crate::ocr::textract::TextractOcr;
use crate::ocr::{OcrProvider, OcrResolver};
use crate::translate::{AwsTranslator, TranslationOrchestrator, Translator};
use crate::upload::StagingArea;

/// Read-only collaborators built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub staging: StagingArea,
    pub resolver: Arc<OcrResolver>,
    pub orchestrator: Arc<TranslationOrchestrator>,
}

impl AppState {
    /// Build the AWS-backed clients; region and credentials come from the environment.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let ocr_config = &config.ocr_config;
        let mut providers: Vec<Arc<dyn OcrProvider>> = Vec::new();
        if ocr_config.cloud_enabled {
            providers.push(Arc::new(TextractOcr::new(&sdk_config)));
        }
        providers.push(Arc::new(TesseractOcr::new(
            ocr_config.tesseract_cmd.clone(),
            ocr_config.tesseract_lang.clone(),
        )));

        let translator: Arc<dyn Translator> = Arc::new(AwsTranslator::new(&sdk_config));

        Ok(Self::with_collaborators(config, providers, translator))
    }

    /// Wire state from explicit collaborators, in OCR priority order.
    pub fn with_collaborators(
        config: Config,
        providers: Vec<Arc<dyn OcrProvider>>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let resolver = OcrResolver::new(providers);
        info!("OCR chain: {:?}", resolver.provider_names());

        let orchestrator = TranslationOrchestrator::new(
            translator,
            config.translate_config.source_language.clone(),
        );

        Self {
            staging: StagingArea::new(&config.system_config.upload_dir),
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
