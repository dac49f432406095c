//! Identity, role resolution and redirect payloads for guildpass.
//!
//! This crate provides:
//! - Provider configuration (`DiscordConfig`, `DiscordConfigBuilder`)
//! - The authenticated user's profile and avatar resolution (`UserProfile`)
//! - Guild role catalog types and role resolution (`GuildRole`, `RoleSet`)
//! - The payload handed back to the client after login (`RedirectPayload`)
//! - Role membership checks (`verify_role`)
//!
//! # Example
//!
//! ```
//! use guildpass_core::{RoleId, UserId};
//! use guildpass_platform_access::{GuildRole, RedirectPayload, RoleSet, UserProfile};
//!
//! let profile = UserProfile::new(UserId::new(42), "alice".to_string(), "7".to_string(), None);
//!
//! let catalog = vec![
//!     GuildRole::new(RoleId::new(1), "Admin".to_string()),
//!     GuildRole::new(RoleId::new(2), "Member".to_string()),
//! ];
//! let roles = RoleSet::resolve(&[RoleId::new(2), RoleId::new(99)], &catalog);
//! assert_eq!(roles.names(), &["Member".to_string()]);
//!
//! let payload = RedirectPayload::new(&profile, roles, "https://cdn.discordapp.com");
//! assert_eq!(payload.avatar(), "https://cdn.discordapp.com/embed/avatars/2.png");
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod role;
pub mod user;

// Re-export main types at crate root
pub use auth::{CallbackOutcome, LANDING_PAGE, RedirectPayload};
pub use config::{DiscordConfig, DiscordConfigBuilder};
pub use error::{AuthenticationError, RoleLookupError, VerifyRoleError};
pub use role::{GuildMember, GuildRole, RoleSet, verify_role};
pub use user::UserProfile;
