//! `huerta-auth` — pure role/capability boundary.
//!
//! This crate is intentionally decoupled from rendering and storage: roles
//! are self-selected at login (no real authentication in this system) and
//! every policy check here is a pure function.

pub mod authorize;
pub mod roles;
pub mod user;
pub mod views;

pub use authorize::require_admin;
pub use roles::Role;
pub use user::User;
pub use views::{View, allowed_views, landing_view};
