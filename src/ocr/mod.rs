pub mod interface;
pub mod resolver;
pub mod tesseract;
pub mod textract;

pub use interface::{OcrError, OcrProvider};
pub use resolver::OcrResolver;
