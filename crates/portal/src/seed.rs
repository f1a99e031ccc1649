//! Fixed initial state for the Huerta organization.
//!
//! The only form of "persistence" in scope: the portal always starts from
//! this set (or from any other [`PortalSeed`] injected by the caller).

use chrono::NaiveDate;

use huerta_core::{InvoiceId, SupplierId};
use huerta_invoicing::{Currency, Invoice, InvoiceStatus};
use huerta_suppliers::seed_suppliers;

use crate::store::PortalSeed;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The seed supplier and invoice sets.
pub fn seed() -> PortalSeed {
    PortalSeed {
        suppliers: seed_suppliers(),
        invoices: vec![
            Invoice::restore(
                InvoiceId::new("I1"),
                SupplierId::new("S1"),
                "A-0001-00234",
                25_000,
                Currency::Ars,
                date(2024, 3, 1),
                None,
                Some(date(2024, 3, 15)),
                InvoiceStatus::Paid,
            ),
            Invoice::restore(
                InvoiceId::new("I2"),
                SupplierId::new("S1"),
                "A-0001-00235",
                45_000,
                Currency::Ars,
                date(2024, 3, 20),
                Some(date(2024, 4, 5)),
                None,
                InvoiceStatus::Scheduled,
            ),
            Invoice::restore(
                InvoiceId::new("I3"),
                SupplierId::new("S2"),
                "B-0452-11234",
                89_000,
                Currency::Ars,
                date(2024, 3, 22),
                None,
                None,
                InvoiceStatus::Pending,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huerta_core::Entity;

    #[test]
    fn seed_invoices_reference_seeded_suppliers() {
        let seed = seed();
        for invoice in &seed.invoices {
            assert!(
                seed.suppliers.iter().any(|s| s.id() == invoice.supplier_id()),
                "orphan seed invoice {}",
                invoice.id()
            );
        }
    }

    #[test]
    fn seed_statuses_match_reference_data() {
        let seed = seed();
        let statuses: Vec<_> = seed.invoices.iter().map(|i| i.status()).collect();
        assert_eq!(
            statuses,
            vec![
                InvoiceStatus::Paid,
                InvoiceStatus::Scheduled,
                InvoiceStatus::Pending
            ]
        );
    }
}
