//! `huerta-invoicing` — invoice lifecycle domain model.
//!
//! Defines the invoice record, the closed currency set, and the status
//! state machine (approval before settlement). Role gating lives one layer
//! up, in `huerta-portal`; this crate only decides which status changes are
//! reachable and stamps the associated dates.

pub mod invoice;

pub use invoice::{Currency, Invoice, InvoiceStatus};
