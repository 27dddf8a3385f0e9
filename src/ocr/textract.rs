use async_trait::async_trait;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{Block, BlockType, Document};
use aws_sdk_textract::Client;
use tracing::{debug, info};

use super::{OcrError, OcrProvider};

/// Cloud OCR backed by AWS Textract `DetectDocumentText`
pub struct TextractOcr {
    client: Client,
}

impl TextractOcr {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        info!(
            "Initialized TextractOcr: region={}",
            sdk_config
                .region()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "<unset>".to_string())
        );
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl OcrProvider for TextractOcr {
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError> {
        let document = Document::builder().bytes(Blob::new(image.to_vec())).build();

        let output = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| OcrError::Service(DisplayErrorContext(&e).to_string()))?;

        debug!("Textract returned {} blocks", output.blocks().len());
        Ok(join_line_blocks(output.blocks()))
    }

    fn provider_name(&self) -> &str {
        "textract"
    }
}

/// Keep LINE blocks that carry text, in the order Textract returned them.
fn join_line_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|block| block.block_type() == Some(&BlockType::Line))
        .filter_map(|block| block.text())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(block_type: BlockType, text: Option<&str>) -> Block {
        let builder = Block::builder().block_type(block_type);
        match text {
            Some(text) => builder.text(text).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn joins_only_line_blocks_in_order() {
        let blocks = vec![
            block(BlockType::Page, None),
            block(BlockType::Line, Some("Hello")),
            block(BlockType::Word, Some("Hello")),
            block(BlockType::Line, Some("World")),
            block(BlockType::Word, Some("World")),
        ];
        assert_eq!(join_line_blocks(&blocks), "Hello\nWorld");
    }

    #[test]
    fn skips_lines_without_text() {
        let blocks = vec![
            block(BlockType::Line, None),
            block(BlockType::Line, Some("  only line ")),
        ];
        assert_eq!(join_line_blocks(&blocks), "only line");
    }

    #[test]
    fn no_lines_yields_empty_text() {
        let blocks = vec![block(BlockType::Page, None), block(BlockType::Word, Some("x"))];
        assert_eq!(join_line_blocks(&blocks), "");
        assert_eq!(join_line_blocks(&[]), "");
    }
}
