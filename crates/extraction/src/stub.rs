//! In-process extractor doubles for tests and offline development.

use async_trait::async_trait;

use crate::extractor::{DocumentExtractor, ExtractedFields, ExtractionError};

/// Extractor that always returns the same fields, ignoring the document.
#[derive(Debug, Clone, Default)]
pub struct FixedExtractor {
    fields: ExtractedFields,
}

impl FixedExtractor {
    pub fn new(fields: ExtractedFields) -> Self {
        Self { fields }
    }
}

#[async_trait]
impl DocumentExtractor for FixedExtractor {
    async fn extract(&self, _document: &[u8]) -> Result<ExtractedFields, ExtractionError> {
        Ok(self.fields.clone())
    }
}

/// Extractor that always fails with a transport error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingExtractor;

#[async_trait]
impl DocumentExtractor for FailingExtractor {
    async fn extract(&self, _document: &[u8]) -> Result<ExtractedFields, ExtractionError> {
        Err(ExtractionError::Transport(
            "collaborator unreachable".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_extractor_echoes_fields() {
        let extractor = FixedExtractor::new(ExtractedFields {
            invoice_number: Some("B-0452-11234".to_string()),
            amount: Some(89_000.0),
            currency: Some("ARS".to_string()),
        });
        let fields = extractor.extract(b"image bytes").await.unwrap();
        assert_eq!(fields.amount, Some(89_000.0));
    }

    #[tokio::test]
    async fn failing_extractor_reports_transport_error() {
        let err = FailingExtractor.extract(b"image bytes").await.unwrap_err();
        assert!(matches!(err, ExtractionError::Transport(_)));
    }
}
