//! Core domain types and utilities for guildpass.
//!
//! This crate provides the foundational identifier types and the rootcause
//! based `Result` alias shared by the rest of the workspace.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{GuildId, ParseIdError, RoleId, UserId};
