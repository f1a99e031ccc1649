//! The portal store: one mutual-exclusion boundary around the invoice and
//! supplier collections.
//!
//! All mutations go through read-modify-write sequences under the write
//! lock, so a status transition is atomic with respect to concurrent
//! transitions on the same id and readers never observe a half-initialized
//! record.

use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::{info, warn};

use huerta_auth::{Role, require_admin};
use huerta_core::{DomainError, DomainResult, Entity, InvoiceId, SupplierId};
use huerta_extraction::ExtractedFields;
use huerta_invoicing::{Invoice, InvoiceStatus};
use huerta_suppliers::Supplier;

/// Injectable initial state for a [`PortalStore`].
#[derive(Debug, Clone, Default)]
pub struct PortalSeed {
    pub suppliers: Vec<Supplier>,
    pub invoices: Vec<Invoice>,
}

#[derive(Debug)]
struct PortalState {
    suppliers: Vec<Supplier>,
    /// Newest-first by convention; `create_invoice` prepends.
    invoices: Vec<Invoice>,
}

/// Explicit store object owned by the application root.
///
/// Passed by reference to the lifecycle and aggregation layers; reads hand
/// out snapshots so the aggregation functions stay pure.
#[derive(Debug)]
pub struct PortalStore {
    state: RwLock<PortalState>,
}

impl PortalStore {
    pub fn new(seed: PortalSeed) -> Self {
        Self {
            state: RwLock::new(PortalState {
                suppliers: seed.suppliers,
                invoices: seed.invoices,
            }),
        }
    }

    pub fn empty() -> Self {
        Self::new(PortalSeed::default())
    }

    /// Snapshot of the supplier set.
    pub fn suppliers(&self) -> Vec<Supplier> {
        self.read(|state| state.suppliers.clone())
    }

    /// Snapshot of the invoice set, newest-first order preserved.
    pub fn invoices(&self) -> Vec<Invoice> {
        self.read(|state| state.invoices.clone())
    }

    pub fn invoice(&self, id: &InvoiceId) -> Option<Invoice> {
        self.read(|state| state.invoices.iter().find(|i| i.id() == id).cloned())
    }

    pub fn supplier(&self, id: &SupplierId) -> Option<Supplier> {
        self.read(|state| state.suppliers.iter().find(|s| s.id() == id).cloned())
    }

    /// Materialize a new invoice from extraction output and make it visible.
    ///
    /// Always succeeds: partial extraction output degrades to defaults (see
    /// [`Invoice::from_extraction`]). The new record only becomes visible to
    /// readers once fully initialized. An unknown supplier id is accepted
    /// but logged; such orphans are excluded from per-supplier aggregates.
    pub fn create_invoice(
        &self,
        supplier_id: SupplierId,
        fields: &ExtractedFields,
        on: NaiveDate,
    ) -> Invoice {
        let invoice = Invoice::from_extraction(supplier_id, fields, on);

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if !state.suppliers.iter().any(|s| s.id() == invoice.supplier_id()) {
            warn!(
                supplier_id = %invoice.supplier_id(),
                invoice_id = %invoice.id(),
                "invoice created for unknown supplier"
            );
        }
        state.invoices.insert(0, invoice.clone());
        info!(
            invoice_id = %invoice.id(),
            supplier_id = %invoice.supplier_id(),
            amount = invoice.amount(),
            "invoice created"
        );
        invoice
    }

    /// Apply a status transition on behalf of `actor`.
    ///
    /// The capability check runs first: a non-admin actor is rejected with
    /// `Forbidden` regardless of target or current status. The mutation is
    /// applied to a working copy and committed only on success, so a failed
    /// request leaves the set unchanged.
    pub fn transition(
        &self,
        invoice_id: &InvoiceId,
        actor: Role,
        target: InvoiceStatus,
        on: NaiveDate,
    ) -> DomainResult<Invoice> {
        require_admin(actor)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let idx = state
            .invoices
            .iter()
            .position(|i| i.id() == invoice_id)
            .ok_or(DomainError::NotFound)?;

        let mut updated = state.invoices[idx].clone();
        updated.transition_to(target, on)?;
        state.invoices[idx] = updated.clone();

        info!(invoice_id = %invoice_id, status = %target, "invoice transitioned");
        Ok(updated)
    }

    fn read<T>(&self, f: impl FnOnce(&PortalState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}
