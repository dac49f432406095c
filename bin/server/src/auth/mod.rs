//! Authentication module for the guildpass server.
//!
//! This module provides:
//! - The Discord OAuth2/REST client (`DiscordClient`)
//! - The login and callback routes
//!
//! Nothing here is persisted. The access token obtained during a callback
//! lives only for the duration of that request; the only thing the client
//! receives is the redirect payload.

pub mod discord;
pub mod routes;

pub use discord::{DiscordClient, DiscordClientError};
pub use routes::{callback, login};

/// Shared application state.
///
/// Built once at startup and never mutated.
pub struct AppState {
    /// Client for the identity provider and guild endpoints.
    pub discord: DiscordClient,
    /// Whether cookies get the Secure flag.
    pub secure_cookies: bool,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(discord: DiscordClient, secure_cookies: bool) -> Self {
        Self {
            discord,
            secure_cookies,
        }
    }
}
