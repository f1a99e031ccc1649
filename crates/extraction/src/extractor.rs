use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Best-effort structured guess produced by the collaborator.
///
/// Mirrors the collaborator's JSON response shape. All fields are optional:
/// the service may return any subset, and the domain layer degrades missing
/// or out-of-range values to defaults rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    /// Free-text invoice number as printed on the document.
    pub invoice_number: Option<String>,
    /// Total amount, plain number without symbols.
    pub amount: Option<f64>,
    /// Currency code; expected to be "ARS" or "USD" but not guaranteed.
    pub currency: Option<String>,
}

impl ExtractedFields {
    /// Parse the collaborator's JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, ExtractionError> {
        serde_json::from_str(payload)
            .map_err(|e| ExtractionError::MalformedResponse(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("extraction timed out")]
    Timeout,
}

/// Async boundary to the external extraction service.
///
/// Implementations receive raw document bytes (an invoice image) and return
/// a structured guess or an error. They must not assume the call succeeds
/// and must not block the caller beyond awaiting the future.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, document: &[u8]) -> Result<ExtractedFields, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let fields = ExtractedFields::from_json(
            r#"{"invoiceNumber":"A-0001-00234","amount":25000,"currency":"ARS"}"#,
        )
        .unwrap();
        assert_eq!(fields.invoice_number.as_deref(), Some("A-0001-00234"));
        assert_eq!(fields.amount, Some(25000.0));
        assert_eq!(fields.currency.as_deref(), Some("ARS"));
    }

    #[test]
    fn parses_partial_payload() {
        let fields = ExtractedFields::from_json(r#"{"amount":89000}"#).unwrap();
        assert!(fields.invoice_number.is_none());
        assert_eq!(fields.amount, Some(89000.0));
        assert!(fields.currency.is_none());
    }

    #[test]
    fn rejects_non_json_payload() {
        let err = ExtractedFields::from_json("not json").unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedResponse(_)));
    }
}
