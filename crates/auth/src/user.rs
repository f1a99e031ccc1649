use serde::{Deserialize, Serialize};

use huerta_core::{DomainError, DomainResult, Entity, SupplierId, UserId};

use crate::Role;

/// A portal user.
///
/// The `supplier_id` link is present if and only if the role is
/// [`Role::Supplier`]; it determines visibility scope for invoice reads.
/// Construct through [`User::admin`] / [`User::supplier`] to keep the link
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: Role,
    supplier_id: Option<SupplierId>,
}

impl User {
    /// Create a treasury admin user.
    pub fn admin(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: Role::Admin,
            supplier_id: None,
        }
    }

    /// Create an external supplier user scoped to `supplier_id`.
    pub fn supplier(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        supplier_id: SupplierId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: Role::Supplier,
            supplier_id: Some(supplier_id),
        }
    }

    /// Validate the role/supplier-link invariant on an arbitrary record.
    pub fn validate(&self) -> DomainResult<()> {
        match (self.role, &self.supplier_id) {
            (Role::Supplier, None) => Err(DomainError::validation(
                "supplier user must carry a supplier_id",
            )),
            (Role::Admin, Some(_)) => Err(DomainError::validation(
                "admin user must not carry a supplier_id",
            )),
            _ => Ok(()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn supplier_id(&self) -> Option<&SupplierId> {
        self.supplier_id.as_ref()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
