//! Capability checks at mutating operation boundaries.

use huerta_core::{DomainError, DomainResult};

use crate::Role;

/// Require the actor to hold the admin role.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Every mutating lifecycle operation calls this at its entry, independent
/// of any rendering concern.
pub fn require_admin(actor: Role) -> DomainResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}
