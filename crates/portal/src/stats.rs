//! Aggregation engine: pure, side-effect-free views over the invoice and
//! supplier sets, recomputed on every invocation.
//!
//! Every function treats an empty input as yielding zero/empty results;
//! chart-facing outputs guard against a zero total denominator.

use serde::Serialize;

use huerta_auth::{Role, User};
use huerta_core::{Entity, SupplierId};
use huerta_invoicing::{Invoice, InvoiceStatus};
use huerta_suppliers::Supplier;

/// Per-status partitions of the invoice set.
///
/// Rejected invoices are excluded from all three buckets, mirroring the
/// dashboard of the original system.
#[derive(Debug, Clone, Default)]
pub struct StatusBuckets {
    pub pending: Vec<Invoice>,
    pub scheduled: Vec<Invoice>,
    pub paid: Vec<Invoice>,
}

/// One slice of the status-distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSlice {
    pub status: InvoiceStatus,
    pub count: usize,
    /// Share of the total, in [0, 1]; 0 when the total itself is 0.
    pub fraction: f64,
}

/// Partition the invoice set by status.
pub fn bucket_by_status(invoices: &[Invoice]) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();
    for invoice in invoices {
        match invoice.status() {
            InvoiceStatus::Pending => buckets.pending.push(invoice.clone()),
            InvoiceStatus::Scheduled => buckets.scheduled.push(invoice.clone()),
            InvoiceStatus::Paid => buckets.paid.push(invoice.clone()),
            InvoiceStatus::Rejected => {}
        }
    }
    buckets
}

/// Total outstanding debt: sum of amounts over invoices still awaiting
/// settlement (pending or scheduled).
pub fn total_outstanding(invoices: &[Invoice]) -> u64 {
    invoices
        .iter()
        .filter(|i| i.is_outstanding())
        .map(Invoice::amount)
        .sum()
}

/// Outstanding liability toward one supplier.
pub fn outstanding_by_supplier(invoices: &[Invoice], supplier_id: &SupplierId) -> u64 {
    invoices
        .iter()
        .filter(|i| i.supplier_id() == supplier_id && i.is_outstanding())
        .map(Invoice::amount)
        .sum()
}

/// Total settled toward one supplier (the "Total Liquidado" figure).
pub fn total_settled_for(invoices: &[Invoice], supplier_id: &SupplierId) -> u64 {
    invoices
        .iter()
        .filter(|i| i.supplier_id() == supplier_id && i.status() == InvoiceStatus::Paid)
        .map(Invoice::amount)
        .sum()
}

/// Per-supplier outstanding series for the liability chart.
///
/// Keyed by the supplier set, so invoices referencing an unknown supplier
/// are excluded rather than crashing the aggregator.
pub fn liability_by_supplier(
    suppliers: &[Supplier],
    invoices: &[Invoice],
) -> Vec<(SupplierId, u64)> {
    suppliers
        .iter()
        .map(|s| (s.id().clone(), outstanding_by_supplier(invoices, s.id())))
        .collect()
}

/// The invoices a user may see.
///
/// Admins see the full set, order preserved. Suppliers see only their own
/// invoices; a supplier user with no matching invoices gets an empty
/// sequence, never an error.
pub fn visible_invoices_for(user: &User, invoices: &[Invoice]) -> Vec<Invoice> {
    match user.role() {
        Role::Admin => invoices.to_vec(),
        Role::Supplier => match user.supplier_id() {
            Some(supplier_id) => invoices
                .iter()
                .filter(|i| i.supplier_id() == supplier_id)
                .cloned()
                .collect(),
            None => Vec::new(),
        },
    }
}

/// Donut-chart slices over the status buckets.
pub fn status_distribution(buckets: &StatusBuckets) -> Vec<StatusSlice> {
    let counts = [
        (InvoiceStatus::Pending, buckets.pending.len()),
        (InvoiceStatus::Scheduled, buckets.scheduled.len()),
        (InvoiceStatus::Paid, buckets.paid.len()),
    ];
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    counts
        .into_iter()
        .map(|(status, count)| StatusSlice {
            status,
            count,
            fraction: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}
