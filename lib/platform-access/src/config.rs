//! Identity provider configuration.
//!
//! This module provides configuration for talking to Discord: the OAuth2
//! client registration, the guild whose roles are resolved, and the bot
//! credential used to read that guild's role catalog.

use guildpass_core::GuildId;
use secrecy::Secret;
use serde::Deserialize;

/// Configuration for the Discord OAuth2 application and guild lookup.
///
/// Fields with defaults can be omitted when loading from environment variables.
/// Secrets are wrapped so they never show up in `Debug` output.
#[derive(Debug, Deserialize)]
pub struct DiscordConfig {
    /// The OAuth2 client ID registered with Discord.
    client_id: String,
    /// The OAuth2 client secret.
    client_secret: Secret<String>,
    /// The redirect URI for the OAuth2 callback (e.g., "https://app.example.com/callback").
    redirect_uri: String,
    /// The guild whose role assignments are reported back to the client.
    guild_id: GuildId,
    /// Bot token with access to the guild's role catalog.
    bot_token: Secret<String>,
    /// Base URL of the REST API, also hosting the token endpoint.
    /// Default: "https://discord.com/api"
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    /// URL users are sent to in order to grant consent.
    /// Default: "https://discord.com/oauth2/authorize"
    #[serde(default = "default_authorize_url")]
    authorize_url: String,
    /// Base URL of the CDN serving avatars.
    /// Default: "https://cdn.discordapp.com"
    #[serde(default = "default_cdn_base_url")]
    cdn_base_url: String,
    /// OAuth2 scopes to request as a comma-separated string.
    /// Default: "identify,guilds.members.read"
    #[serde(default = "default_scopes")]
    scopes: String,
}

fn default_api_base_url() -> String {
    "https://discord.com/api".to_string()
}

fn default_authorize_url() -> String {
    "https://discord.com/oauth2/authorize".to_string()
}

fn default_cdn_base_url() -> String {
    "https://cdn.discordapp.com".to_string()
}

fn default_scopes() -> String {
    "identify,guilds.members.read".to_string()
}

impl DiscordConfig {
    /// Creates a configuration builder with the required fields.
    #[must_use]
    pub fn builder(
        client_id: String,
        client_secret: String,
        redirect_uri: String,
        guild_id: GuildId,
        bot_token: String,
    ) -> DiscordConfigBuilder {
        DiscordConfigBuilder::new(client_id, client_secret, redirect_uri, guild_id, bot_token)
    }

    /// Returns the OAuth2 client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the OAuth2 client secret.
    #[must_use]
    pub fn client_secret(&self) -> &Secret<String> {
        &self.client_secret
    }

    /// Returns the OAuth2 redirect URI.
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Returns the guild whose roles are resolved.
    #[must_use]
    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Returns the bot token used for the role catalog.
    #[must_use]
    pub fn bot_token(&self) -> &Secret<String> {
        &self.bot_token
    }

    /// Returns the authorization (consent) URL.
    #[must_use]
    pub fn authorize_url(&self) -> &str {
        &self.authorize_url
    }

    /// Returns the CDN base URL without a trailing slash.
    #[must_use]
    pub fn cdn_base_url(&self) -> &str {
        self.cdn_base_url.trim_end_matches('/')
    }

    /// Returns the OAuth2 scopes to request, parsed from comma-separated string.
    #[must_use]
    pub fn scopes(&self) -> Vec<&str> {
        self.scopes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Returns the token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.api_base())
    }

    /// Returns the URL of the current user's profile.
    #[must_use]
    pub fn current_user_url(&self) -> String {
        format!("{}/users/@me", self.api_base())
    }

    /// Returns the URL of the current user's member record in the configured guild.
    #[must_use]
    pub fn guild_member_url(&self) -> String {
        format!("{}/users/@me/guilds/{}/member", self.api_base(), self.guild_id)
    }

    /// Returns the URL of the configured guild's role catalog.
    #[must_use]
    pub fn guild_roles_url(&self) -> String {
        format!("{}/guilds/{}/roles", self.api_base(), self.guild_id)
    }

    fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Builder for `DiscordConfig`.
#[derive(Debug)]
pub struct DiscordConfigBuilder {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    guild_id: GuildId,
    bot_token: String,
    api_base_url: String,
}

impl DiscordConfigBuilder {
    /// Creates a new builder with required fields.
    #[must_use]
    pub fn new(
        client_id: String,
        client_secret: String,
        redirect_uri: String,
        guild_id: GuildId,
        bot_token: String,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            guild_id,
            bot_token,
            api_base_url: default_api_base_url(),
        }
    }

    /// Sets the REST API base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: String) -> Self {
        self.api_base_url = url;
        self
    }

    /// Builds the `DiscordConfig`.
    #[must_use]
    pub fn build(self) -> DiscordConfig {
        DiscordConfig {
            client_id: self.client_id,
            client_secret: Secret::new(self.client_secret),
            redirect_uri: self.redirect_uri,
            guild_id: self.guild_id,
            bot_token: Secret::new(self.bot_token),
            api_base_url: self.api_base_url,
            authorize_url: default_authorize_url(),
            cdn_base_url: default_cdn_base_url(),
            scopes: default_scopes(),
        }
    }
}
