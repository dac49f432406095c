//! The authenticated user's profile.
//!
//! Profiles are fetched from the identity provider's "current user"
//! endpoint once per login and never stored.

use guildpass_core::UserId;
use serde::{Deserialize, Serialize};

/// Number of default avatars the CDN serves for users without one.
const DEFAULT_AVATAR_COUNT: u64 = 5;

/// Profile of the user who completed the OAuth2 flow.
///
/// Unknown fields in the provider response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider-side user identifier.
    id: UserId,
    /// Account name shown to other users.
    username: String,
    /// Four digit tag; "0" for accounts migrated to unique usernames.
    #[serde(default = "default_discriminator")]
    discriminator: String,
    /// Avatar hash, absent when the user never uploaded one.
    #[serde(default)]
    avatar: Option<String>,
}

fn default_discriminator() -> String {
    "0".to_string()
}

impl UserProfile {
    /// Creates a profile from its parts.
    #[must_use]
    pub fn new(
        id: UserId,
        username: String,
        discriminator: String,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id,
            username,
            discriminator,
            avatar,
        }
    }

    /// Returns the user's ID.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the discriminator.
    #[must_use]
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// Returns the avatar hash, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Index of the default avatar used when no avatar hash is set.
    ///
    /// Selected by the discriminator modulo the number of default avatars.
    /// A discriminator that is not a number selects the first one.
    #[must_use]
    pub fn default_avatar_index(&self) -> u64 {
        self.discriminator
            .trim()
            .parse::<u64>()
            .map(|d| d % DEFAULT_AVATAR_COUNT)
            .unwrap_or(0)
    }

    /// Resolves the avatar image URL on the given CDN.
    #[must_use]
    pub fn avatar_url(&self, cdn_base_url: &str) -> String {
        let base = cdn_base_url.trim_end_matches('/');
        match self.avatar() {
            Some(hash) if !hash.is_empty() => {
                format!("{}/avatars/{}/{}.png", base, self.id, hash)
            }
            _ => format!(
                "{}/embed/avatars/{}.png",
                base,
                self.default_avatar_index()
            ),
        }
    }
}
