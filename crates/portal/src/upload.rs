//! Single-slot upload flow against the extraction collaborator.
//!
//! One extraction may be outstanding at a time per desk: while it is, the
//! desk reports a processing state to the presentation layer and rejects
//! further submissions. The rest of the system stays responsive; only the
//! submitting caller awaits the collaborator.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use tracing::warn;

use huerta_core::{DomainError, DomainResult, SupplierId};
use huerta_extraction::DocumentExtractor;
use huerta_invoicing::Invoice;

use crate::store::PortalStore;

/// The upload slot: holds the in-flight flag for the one suspending
/// operation in the system.
#[derive(Debug, Default)]
pub struct UploadDesk {
    in_flight: AtomicBool,
}

impl UploadDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an extraction is currently outstanding.
    pub fn is_processing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run a document through extraction and, on success, create the
    /// invoice in `store`.
    ///
    /// Fails with `UploadInFlight` if another extraction is outstanding.
    /// On extraction failure no invoice is created, the processing flag is
    /// cleared, and the caller is left in the pre-upload state.
    pub async fn submit(
        &self,
        store: &PortalStore,
        extractor: &dyn DocumentExtractor,
        supplier_id: SupplierId,
        document: &[u8],
        on: NaiveDate,
    ) -> DomainResult<Invoice> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DomainError::UploadInFlight);
        }

        let result = match extractor.extract(document).await {
            Ok(fields) => Ok(store.create_invoice(supplier_id, &fields, on)),
            Err(e) => {
                warn!(error = %e, "document extraction failed, no invoice created");
                Err(DomainError::extraction(e.to_string()))
            }
        };

        self.in_flight.store(false, Ordering::SeqCst);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed;
    use huerta_extraction::{ExtractedFields, FailingExtractor, FixedExtractor};
    use huerta_invoicing::{Currency, InvoiceStatus};

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
    }

    #[tokio::test]
    async fn successful_upload_creates_pending_invoice() {
        let store = PortalStore::new(seed());
        let desk = UploadDesk::new();
        let extractor = FixedExtractor::new(ExtractedFields {
            invoice_number: None,
            amount: Some(89_000.0),
            currency: None,
        });

        let before = store.invoices().len();
        let invoice = desk
            .submit(&store, &extractor, SupplierId::new("S2"), b"jpeg", test_date())
            .await
            .unwrap();

        assert_eq!(store.invoices().len(), before + 1);
        assert_eq!(invoice.status(), InvoiceStatus::Pending);
        assert_eq!(invoice.currency(), Currency::Ars);
        assert!(invoice.invoice_number().starts_with("TMP-"));
        assert!(!desk.is_processing());
    }

    #[tokio::test]
    async fn failed_extraction_leaves_set_unchanged() {
        let store = PortalStore::new(seed());
        let desk = UploadDesk::new();

        let before = store.invoices().len();
        let err = desk
            .submit(&store, &FailingExtractor, SupplierId::new("S2"), b"jpeg", test_date())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Extraction(_)));
        assert_eq!(store.invoices().len(), before);
        assert!(!desk.is_processing());
    }

    #[tokio::test]
    async fn desk_allows_sequential_uploads() {
        let store = PortalStore::new(seed());
        let desk = UploadDesk::new();
        let extractor = FixedExtractor::new(ExtractedFields::default());

        for _ in 0..2 {
            desk.submit(&store, &extractor, SupplierId::new("S1"), b"jpeg", test_date())
                .await
                .unwrap();
        }
        assert_eq!(store.invoices().len(), seed().invoices.len() + 2);
    }

    #[tokio::test]
    async fn desk_rejects_concurrent_submission() {
        let desk = UploadDesk::new();
        // Simulate an outstanding extraction.
        desk.in_flight.store(true, Ordering::SeqCst);
        assert!(desk.is_processing());

        let store = PortalStore::empty();
        let err = desk
            .submit(
                &store,
                &FixedExtractor::default(),
                SupplierId::new("S1"),
                b"jpeg",
                test_date(),
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::UploadInFlight);
        assert!(store.invoices().is_empty());
    }
}
