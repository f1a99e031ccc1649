use serde::{Deserialize, Serialize};

use huerta_core::{Entity, SupplierId};

/// An external vendor entity with an associated outstanding balance.
///
/// `balance` and `total_paid` are independently tracked snapshots carried
/// over from the seed data. Nothing recomputes them from the invoice
/// ledger, so they can drift from the derived per-supplier aggregates in
/// `huerta-portal`; callers that need ledger-consistent figures should use
/// those aggregates instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    email: String,
    tax_id: String,
    /// Current outstanding liability snapshot, in whole currency units.
    balance: u64,
    /// Cumulative settled total, in whole currency units.
    total_paid: u64,
}

impl Supplier {
    pub fn new(
        id: SupplierId,
        name: impl Into<String>,
        email: impl Into<String>,
        tax_id: impl Into<String>,
        balance: u64,
        total_paid: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            tax_id: tax_id.into(),
            balance,
            total_paid,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn total_paid(&self) -> u64 {
        self.total_paid
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The fixed initial supplier set for the Huerta organization.
pub fn seed_suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new(
            SupplierId::new("S1"),
            "LimpiaTodo SRL",
            "limpieza@huerta.com",
            "30-12345678-9",
            45_000,
            120_000,
        ),
        Supplier::new(
            SupplierId::new("S2"),
            "Electricidad Sur",
            "energia@elsur.com",
            "30-87654321-0",
            89_000,
            250_000,
        ),
        Supplier::new(
            SupplierId::new("S3"),
            "Catering Huerta",
            "chef@catering.com",
            "20-11223344-5",
            12_000,
            45_000,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_supplier_ids_are_unique() {
        let suppliers = seed_suppliers();
        let ids: HashSet<_> = suppliers.iter().map(|s| s.id().clone()).collect();
        assert_eq!(ids.len(), suppliers.len());
    }

    #[test]
    fn seed_carries_expected_balances() {
        let suppliers = seed_suppliers();
        let s1 = suppliers
            .iter()
            .find(|s| s.id() == &SupplierId::new("S1"))
            .unwrap();
        assert_eq!(s1.name(), "LimpiaTodo SRL");
        assert_eq!(s1.balance(), 45_000);
        assert_eq!(s1.total_paid(), 120_000);
    }
}
