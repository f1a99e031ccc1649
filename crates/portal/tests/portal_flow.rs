//! End-to-end flows over the seeded portal: aggregation figures, the
//! approval/settlement lifecycle, role gating, and the upload path.

use chrono::NaiveDate;

use huerta_auth::Role;
use huerta_core::{DomainError, Entity, InvoiceId, SupplierId, UserId};
use huerta_extraction::{ExtractedFields, FailingExtractor, FixedExtractor};
use huerta_invoicing::{Currency, InvoiceStatus};
use huerta_portal::{
    PortalStore, UploadDesk, outstanding_by_supplier, seed, total_outstanding,
    visible_invoices_for,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
}

fn seeded_store() -> PortalStore {
    huerta_observability::init_with_default("warn");
    PortalStore::new(seed())
}

#[test]
fn seeded_totals_match_reference_figures() {
    let store = seeded_store();
    let invoices = store.invoices();

    assert_eq!(total_outstanding(&invoices), 134_000);
    assert_eq!(outstanding_by_supplier(&invoices, &SupplierId::new("S1")), 45_000);
    assert_eq!(outstanding_by_supplier(&invoices, &SupplierId::new("S2")), 89_000);
}

#[test]
fn approve_then_settle_reaches_paid_and_stays_there() {
    let store = seeded_store();
    let i3 = InvoiceId::new("I3");

    let approved = store
        .transition(&i3, Role::Admin, InvoiceStatus::Scheduled, today())
        .unwrap();
    assert_eq!(approved.status(), InvoiceStatus::Scheduled);
    assert_eq!(approved.estimated_payment_date(), Some(today()));

    let settled = store
        .transition(&i3, Role::Admin, InvoiceStatus::Paid, today())
        .unwrap();
    assert_eq!(settled.status(), InvoiceStatus::Paid);
    assert_eq!(settled.payment_date(), Some(today()));

    let err = store
        .transition(&i3, Role::Admin, InvoiceStatus::Scheduled, today())
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition(_)));
    assert_eq!(store.invoice(&i3).unwrap().status(), InvoiceStatus::Paid);
}

#[test]
fn settlement_updates_outstanding_totals() {
    let store = seeded_store();
    let i3 = InvoiceId::new("I3");

    store
        .transition(&i3, Role::Admin, InvoiceStatus::Scheduled, today())
        .unwrap();
    store
        .transition(&i3, Role::Admin, InvoiceStatus::Paid, today())
        .unwrap();

    let invoices = store.invoices();
    assert_eq!(total_outstanding(&invoices), 45_000);
    assert_eq!(outstanding_by_supplier(&invoices, &SupplierId::new("S2")), 0);
}

#[test]
fn supplier_actor_cannot_transition_anything() {
    let store = seeded_store();
    let i3 = InvoiceId::new("I3");

    for target in [
        InvoiceStatus::Pending,
        InvoiceStatus::Scheduled,
        InvoiceStatus::Paid,
        InvoiceStatus::Rejected,
    ] {
        let err = store
            .transition(&i3, Role::Supplier, target, today())
            .unwrap_err();
        assert_eq!(err, DomainError::Forbidden);
    }
    assert_eq!(store.invoice(&i3).unwrap().status(), InvoiceStatus::Pending);
}

#[test]
fn supplier_visibility_is_scoped_to_own_invoices() {
    let store = seeded_store();
    let user = huerta_auth::User::supplier(
        UserId::new("S-S1"),
        "LimpiaTodo SRL",
        "externo@huerta.com",
        SupplierId::new("S1"),
    );

    let visible = visible_invoices_for(&user, &store.invoices());
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|i| i.supplier_id().as_str() == "S1"));
}

#[tokio::test]
async fn partial_extraction_degrades_to_defaults() {
    let store = seeded_store();
    let desk = UploadDesk::new();
    let extractor = FixedExtractor::new(ExtractedFields {
        invoice_number: None,
        amount: Some(89_000.0),
        currency: None,
    });

    let invoice = desk
        .submit(&store, &extractor, SupplierId::new("S2"), b"jpeg", today())
        .await
        .unwrap();

    assert_eq!(invoice.status(), InvoiceStatus::Pending);
    assert_eq!(invoice.amount(), 89_000);
    assert_eq!(invoice.currency(), Currency::Ars);
    assert!(invoice.invoice_number().starts_with("TMP-"));

    // Newest-first: the fresh invoice leads the snapshot.
    let invoices = store.invoices();
    assert_eq!(invoices[0].id(), invoice.id());
}

#[tokio::test]
async fn extraction_failure_appends_nothing() {
    let store = seeded_store();
    let desk = UploadDesk::new();

    let before = store.invoices().len();
    let err = desk
        .submit(&store, &FailingExtractor, SupplierId::new("S2"), b"jpeg", today())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Extraction(_)));
    assert_eq!(store.invoices().len(), before);
    assert!(!desk.is_processing());
}
