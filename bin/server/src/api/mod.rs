//! JSON API routes.

pub mod roles;

pub use roles::verify_role;
