use serde::{Deserialize, Serialize};

/// Actor role.
///
/// The set is closed: treasury staff (full mutation rights) and external
/// suppliers (scoped read + upload rights only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Supplier,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::Supplier => f.write_str("SUPPLIER"),
        }
    }
}
