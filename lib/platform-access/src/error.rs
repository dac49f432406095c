//! Error types for the platform-access crate.
//!
//! Errors are carried inside rootcause reports:
//! - `AuthenticationError`: failures that end the login with `auth_failed`
//! - `RoleLookupError`: failures of the best-effort role resolution
//! - `VerifyRoleError`: invalid input to a role membership check

use guildpass_core::GuildId;
use std::fmt;

/// Errors from the login flow.
///
/// None of the details here are shown to the end user; they are logged
/// and the client only sees a generic error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The `state` parameter did not match the one issued at login.
    StateMismatch,
    /// Exchanging the authorization code for an access token failed.
    TokenExchange { reason: String },
    /// Fetching the current user's profile failed.
    ProfileFetch { reason: String },
    /// The payload handed back to the client could not be encoded.
    PayloadEncoding { reason: String },
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateMismatch => write!(f, "login state mismatch"),
            Self::TokenExchange { reason } => {
                write!(f, "token exchange failed: {reason}")
            }
            Self::ProfileFetch { reason } => {
                write!(f, "failed to fetch user profile: {reason}")
            }
            Self::PayloadEncoding { reason } => {
                write!(f, "failed to encode redirect payload: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthenticationError {}

/// Errors from resolving the user's guild roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleLookupError {
    /// The user's member record in the guild could not be fetched.
    MemberFetch { guild_id: GuildId, reason: String },
    /// The guild's role catalog could not be fetched.
    CatalogFetch { guild_id: GuildId, reason: String },
}

impl fmt::Display for RoleLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemberFetch { guild_id, reason } => {
                write!(f, "failed to fetch member record in guild {guild_id}: {reason}")
            }
            Self::CatalogFetch { guild_id, reason } => {
                write!(f, "failed to fetch role catalog of guild {guild_id}: {reason}")
            }
        }
    }
}

impl std::error::Error for RoleLookupError {}

/// Errors from a role membership check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyRoleError {
    /// A required parameter was absent or empty.
    MissingParameter { name: &'static str },
}

impl fmt::Display for VerifyRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter { name } => {
                write!(f, "missing required parameter: {name}")
            }
        }
    }
}

impl std::error::Error for VerifyRoleError {}
