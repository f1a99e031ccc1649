//! `huerta-extraction`
//!
//! **Responsibility:** boundary to the external document-understanding
//! service.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on portal aggregates (Invoice/Supplier).
//! - It must not mutate domain state.
//! - It emits a **best-effort structured guess**, not a domain record.
//!
//! The collaborator is treated as opaque, slow (network round trip) and
//! possibly unreliable: every field of its output is optional and any
//! transport or parse problem surfaces as [`ExtractionError`].

pub mod extractor;
pub mod stub;

pub use extractor::{DocumentExtractor, ExtractedFields, ExtractionError};
pub use stub::{FailingExtractor, FixedExtractor};
