//! Scripted collaborators shared by unit and router tests.

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::ocr::{OcrError, OcrProvider};
use crate::state::AppState;
use crate::translate::{TranslateError, TranslateRequest, Translator};

/// OCR double: `None` fails like a service/decode error, `Some` returns the text.
pub struct FakeOcr {
    name: &'static str,
    reply: Option<String>,
    calls: AtomicUsize,
}

impl FakeOcr {
    pub fn returning(name: &'static str, text: &str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrProvider for FakeOcr {
    async fn extract_text(&self, _image: &[u8]) -> Result<String, OcrError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(OcrError::Service(format!("{} scripted failure", self.name))),
        }
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

/// Translation double recording every request it receives.
pub struct FakeTranslator {
    reply: Option<String>,
    requests: Mutex<Vec<TranslateRequest>>,
}

impl FakeTranslator {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<TranslateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslateError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .clone()
            .ok_or_else(|| TranslateError::Service("scripted failure".to_string()))
    }

    async fn list_languages(&self) -> Result<Vec<String>, TranslateError> {
        Ok(vec!["en".to_string(), "fr".to_string(), "de".to_string()])
    }
}

/// Application state wired to the given doubles, staging uploads under `upload_dir`.
pub fn test_state(
    upload_dir: &Path,
    providers: Vec<Arc<dyn OcrProvider>>,
    translator: Arc<dyn Translator>,
) -> AppState {
    let mut config = Config::default();
    config.system_config.upload_dir = upload_dir.to_string_lossy().into_owned();
    AppState::with_collaborators(config, providers, translator)
}
