use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `OCR_TRANSLATE__SYSTEM_CONFIG__PORT=8080`
const ENV_PREFIX: &str = "OCR_TRANSLATE";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub system_config: SystemConfig,
    pub ocr_config: OcrConfig,
    pub translate_config: TranslateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: String,
    pub static_dir: String,
    pub max_upload_bytes: usize,
    pub allowed_image_exts: Vec<String>,
    pub default_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Try Textract before the local engine
    pub cloud_enabled: bool,
    pub tesseract_cmd: String,
    pub tesseract_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub source_language: String,
}

fn default_allowed_image_exts() -> Vec<String> {
    ["png", "jpg", "jpeg"].iter().map(|s| s.to_string()).collect()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            upload_dir: "uploads".to_string(),
            static_dir: "static".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            allowed_image_exts: default_allowed_image_exts(),
            default_language: "en".to_string(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            cloud_enabled: true,
            tesseract_cmd: "tesseract".to_string(),
            tesseract_lang: "eng".to_string(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            source_language: "auto".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional YAML file, then apply environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::new(path, ::config::FileFormat::Yaml).required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("system_config.allowed_image_exts"),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        let exts = &mut self.system_config.allowed_image_exts;
        for ext in exts.iter_mut() {
            *ext = ext.trim().trim_start_matches('.').to_lowercase();
        }
        exts.retain(|ext| !ext.is_empty());
    }
}
