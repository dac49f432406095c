//! guildpass web server.
//!
//! This crate completes Discord logins for a single-page client: it exchanges
//! the authorization code, reads the user's profile and guild roles, and
//! redirects back to the page with the result. It also serves the page itself
//! and a small role membership check.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;

#[cfg(test)]
mod test_support;
