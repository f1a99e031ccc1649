//! `huerta-suppliers` — supplier reference data.
//!
//! Suppliers are created at system initialization and treated as
//! read-mostly reference data; there are no create/update/delete
//! operations in this system.

pub mod supplier;

pub use supplier::{Supplier, seed_suppliers};
