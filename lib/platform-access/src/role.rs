//! Guild role types and role resolution.
//!
//! A member record only lists opaque role IDs. The guild's role catalog
//! maps those IDs to the names reported back to the client.

use crate::error::VerifyRoleError;
use guildpass_core::RoleId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a guild's role catalog.
///
/// Unknown fields in the provider response (color, permissions, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRole {
    id: RoleId,
    name: String,
}

impl GuildRole {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(id: RoleId, name: String) -> Self {
        Self { id, name }
    }

    /// Returns the role ID.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the role's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The current user's member record within a guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GuildMember {
    #[serde(default)]
    roles: Vec<RoleId>,
}

impl GuildMember {
    /// Returns the IDs of the roles the member holds.
    #[must_use]
    pub fn roles(&self) -> &[RoleId] {
        &self.roles
    }
}

/// Names of the roles a user holds in the configured guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet {
    names: Vec<String>,
}

impl RoleSet {
    /// Creates an empty role set.
    #[must_use]
    pub fn none() -> Self {
        Self { names: Vec::new() }
    }

    /// Resolves held role IDs to names using the guild's catalog.
    ///
    /// Names keep the order of `held`. IDs without a catalog entry are dropped.
    #[must_use]
    pub fn resolve(held: &[RoleId], catalog: &[GuildRole]) -> Self {
        let by_id: HashMap<RoleId, &str> = catalog
            .iter()
            .map(|role| (role.id(), role.name()))
            .collect();

        let names = held
            .iter()
            .filter_map(|id| by_id.get(id).map(|name| (*name).to_string()))
            .collect();

        Self { names }
    }

    /// Returns the role names as a slice.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consumes the set, returning the role names.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Reports whether `required_role` is one of `roles`, by exact name.
///
/// # Errors
///
/// Returns [`VerifyRoleError::MissingParameter`] if `roles` is absent or
/// `required_role` is absent or empty.
pub fn verify_role(
    roles: Option<&[String]>,
    required_role: Option<&str>,
) -> Result<bool, VerifyRoleError> {
    let roles = roles.ok_or(VerifyRoleError::MissingParameter { name: "roles" })?;
    let required_role = required_role
        .filter(|r| !r.is_empty())
        .ok_or(VerifyRoleError::MissingParameter {
            name: "requiredRole",
        })?;

    Ok(roles.iter().any(|r| r == required_role))
}
