//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings: seed data uses short stable tokens
//! ("S1", "I1") while generated identifiers derive from UUIDv7.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a supplier, stable for the supplier's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

/// Identifier of an invoice, assigned at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

/// Identifier of a user (actor identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_string_newtype!(SupplierId);
impl_string_newtype!(InvoiceId);
impl_string_newtype!(UserId);

impl InvoiceId {
    /// Generate a fresh unique invoice identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(format!("INV-{}", Uuid::now_v7().simple()))
    }
}

impl UserId {
    /// Generate a fresh unique user identifier.
    pub fn generate() -> Self {
        Self(format!("U-{}", Uuid::now_v7().simple()))
    }
}
