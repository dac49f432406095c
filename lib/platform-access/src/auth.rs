//! Results handed back to the client after the OAuth2 callback.
//!
//! Every callback ends in a redirect to the landing page. The query string
//! carries either the user's data or a short error code.

use crate::error::AuthenticationError;
use crate::role::RoleSet;
use crate::user::UserProfile;
use serde::{Deserialize, Serialize};

/// Page every callback redirects back to.
pub const LANDING_PAGE: &str = "/";

/// Data the client receives about the user who logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectPayload {
    username: String,
    discriminator: String,
    avatar: String,
    roles: Vec<String>,
}

impl RedirectPayload {
    /// Builds the payload from a profile and its resolved roles.
    #[must_use]
    pub fn new(profile: &UserProfile, roles: RoleSet, cdn_base_url: &str) -> Self {
        Self {
            username: profile.username().to_string(),
            discriminator: profile.discriminator().to_string(),
            avatar: profile.avatar_url(cdn_base_url),
            roles: roles.into_names(),
        }
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

    /// Returns the resolved avatar URL.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the role names.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Terminal state of a callback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Login completed; holds the JSON-encoded [`RedirectPayload`].
    Authenticated { user_json: String },
    /// The request carried no authorization code.
    NoCode,
    /// Any failure outside role resolution.
    AuthFailed,
}

impl CallbackOutcome {
    /// Encodes a payload into a successful outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::PayloadEncoding`] if the payload cannot
    /// be serialized.
    pub fn authenticated(
        payload: &RedirectPayload,
    ) -> guildpass_core::Result<Self, AuthenticationError> {
        let user_json =
            serde_json::to_string(payload).map_err(|e| AuthenticationError::PayloadEncoding {
                reason: e.to_string(),
            })?;
        Ok(Self::Authenticated { user_json })
    }

    /// Returns the error code reported to the client, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::Authenticated { .. } => None,
            Self::NoCode => Some("no_code"),
            Self::AuthFailed => Some("auth_failed"),
        }
    }

    /// Returns the location the client is redirected to.
    #[must_use]
    pub fn redirect_target(&self) -> String {
        match self {
            Self::Authenticated { user_json } => {
                format!("{LANDING_PAGE}?user={}", urlencoding::encode(user_json))
            }
            Self::NoCode | Self::AuthFailed => {
                format!(
                    "{LANDING_PAGE}?error={}",
                    self.error_code().unwrap_or("auth_failed")
                )
            }
        }
    }
}
