pub mod aws_translate;
pub mod interface;
pub mod orchestrator;

pub use aws_translate::AwsTranslator;
pub use interface::{TranslateError, TranslateRequest, Translator};
pub use orchestrator::TranslationOrchestrator;
