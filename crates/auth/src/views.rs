//! View policy: which screens a role may open.
//!
//! The presentation layer consumes this instead of branching on role at
//! render time.

use serde::{Deserialize, Serialize};

use crate::Role;

/// Navigable screens of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    Login,
    SupplierDashboard,
    AdminDashboard,
    InvoiceUpload,
    SupplierList,
}

/// Views a role is allowed to open (beyond the login screen).
pub fn allowed_views(role: Role) -> &'static [View] {
    match role {
        Role::Admin => &[View::AdminDashboard, View::SupplierList],
        Role::Supplier => &[View::SupplierDashboard, View::InvoiceUpload],
    }
}

/// The view a role lands on right after login.
pub fn landing_view(role: Role) -> View {
    match role {
        Role::Admin => View::AdminDashboard,
        Role::Supplier => View::SupplierDashboard,
    }
}
