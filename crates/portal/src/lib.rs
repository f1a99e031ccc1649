//! `huerta-portal` — application root for the invoice-tracking core.
//!
//! Owns the explicit store object holding the supplier and invoice
//! collections (no ambient/static mutable state), exposes the lifecycle
//! operations and the aggregation functions the presentation layer
//! consumes, and runs the single-slot upload flow against the extraction
//! collaborator.

pub mod seed;
pub mod stats;
pub mod store;
pub mod upload;

pub use seed::seed;
pub use stats::{
    StatusBuckets, StatusSlice, bucket_by_status, liability_by_supplier, outstanding_by_supplier,
    status_distribution, total_outstanding, total_settled_for, visible_invoices_for,
};
pub use store::{PortalSeed, PortalStore};
pub use upload::UploadDesk;
