//! Discord OAuth2 and REST client.
//!
//! Covers the outbound half of a login:
//! - building the consent URL for `/login`
//! - exchanging the authorization code at the token endpoint
//! - fetching the current user's profile (user bearer token)
//! - resolving the user's roles in the configured guild (member record with
//!   the user token, role catalog with the bot token)
//!
//! Every call is attempted exactly once; nothing is retried.

use guildpass_platform_access::{
    AuthenticationError, DiscordConfig, GuildMember, GuildRole, RoleLookupError, RoleSet,
    UserProfile,
};
use oauth2::{
    AccessToken, AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    RedirectUrl, Scope, TokenResponse, TokenUrl, basic::BasicClient,
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Client for the Discord endpoints involved in a login.
pub struct DiscordClient {
    http: reqwest::Client,
    auth_url: AuthUrl,
    token_url: TokenUrl,
    redirect_url: RedirectUrl,
    config: DiscordConfig,
}

impl DiscordClient {
    /// Creates a new client, validating the configured URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured URL is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: DiscordConfig) -> Result<Self, DiscordClientError> {
        let auth_url = AuthUrl::new(config.authorize_url().to_string()).map_err(|e| {
            DiscordClientError::Configuration(format!("invalid authorize URL: {}", e))
        })?;
        let token_url = TokenUrl::new(config.token_url())
            .map_err(|e| DiscordClientError::Configuration(format!("invalid token URL: {}", e)))?;
        let redirect_url = RedirectUrl::new(config.redirect_uri().to_string()).map_err(|e| {
            DiscordClientError::Configuration(format!("invalid redirect URI: {}", e))
        })?;

        // Redirects are not followed, the token endpoint must answer directly.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| {
                DiscordClientError::Configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            auth_url,
            token_url,
            redirect_url,
            config,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DiscordConfig {
        &self.config
    }

    /// Generates the consent URL for redirecting the user.
    ///
    /// Returns the URL together with the CSRF token embedded as its `state`.
    pub fn authorization_url(&self) -> (String, CsrfToken) {
        let client = BasicClient::new(ClientId::new(self.config.client_id().to_string()))
            .set_auth_uri(self.auth_url.clone())
            .set_redirect_uri(self.redirect_url.clone());

        let mut auth_request = client.authorize_url(CsrfToken::new_random);
        for scope in self.config.scopes() {
            auth_request = auth_request.add_scope(Scope::new(scope.to_string()));
        }

        let (auth_url, csrf_token) = auth_request.url();
        (auth_url.to_string(), csrf_token)
    }

    /// Exchanges the authorization code for an access token.
    ///
    /// Client credentials are sent in the form body alongside the code,
    /// the grant type and the redirect URI.
    #[instrument(skip_all)]
    pub async fn exchange_code(
        &self,
        code: &str,
    ) -> guildpass_core::Result<AccessToken, AuthenticationError> {
        let client = BasicClient::new(ClientId::new(self.config.client_id().to_string()))
            .set_client_secret(ClientSecret::new(
                self.config.client_secret().expose_secret().clone(),
            ))
            .set_auth_type(AuthType::RequestBody)
            .set_token_uri(self.token_url.clone())
            .set_redirect_uri(self.redirect_url.clone());

        let token_response = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthenticationError::TokenExchange {
                reason: e.to_string(),
            })?;

        debug!("authorization code exchanged");
        Ok(token_response.access_token().clone())
    }

    /// Fetches the profile of the user the token was issued for.
    #[instrument(skip_all)]
    pub async fn current_user(
        &self,
        token: &AccessToken,
    ) -> guildpass_core::Result<UserProfile, AuthenticationError> {
        let request = self
            .http
            .get(self.config.current_user_url())
            .bearer_auth(token.secret());

        let profile: UserProfile =
            fetch_json(request)
                .await
                .map_err(|e| AuthenticationError::ProfileFetch {
                    reason: e.to_string(),
                })?;

        debug!(user_id = %profile.id(), "fetched user profile");
        Ok(profile)
    }

    /// Fetches the user's member record in the configured guild.
    #[instrument(skip_all, fields(guild_id = %self.config.guild_id()))]
    pub async fn guild_member(
        &self,
        token: &AccessToken,
    ) -> guildpass_core::Result<GuildMember, RoleLookupError> {
        let request = self
            .http
            .get(self.config.guild_member_url())
            .bearer_auth(token.secret());

        Ok(fetch_json(request)
            .await
            .map_err(|e| RoleLookupError::MemberFetch {
                guild_id: self.config.guild_id(),
                reason: e.to_string(),
            })?)
    }

    /// Fetches the configured guild's role catalog using the bot credential.
    #[instrument(skip_all, fields(guild_id = %self.config.guild_id()))]
    pub async fn guild_roles(&self) -> guildpass_core::Result<Vec<GuildRole>, RoleLookupError> {
        let request = self.http.get(self.config.guild_roles_url()).header(
            reqwest::header::AUTHORIZATION,
            format!("Bot {}", self.config.bot_token().expose_secret()),
        );

        Ok(fetch_json(request)
            .await
            .map_err(|e| RoleLookupError::CatalogFetch {
                guild_id: self.config.guild_id(),
                reason: e.to_string(),
            })?)
    }

    /// Resolves the names of the roles the user holds in the configured guild.
    ///
    /// The member record is fetched before the catalog; a failure of either
    /// ends the lookup.
    pub async fn resolve_roles(
        &self,
        token: &AccessToken,
    ) -> guildpass_core::Result<RoleSet, RoleLookupError> {
        let member = self.guild_member(token).await?;
        let catalog = self.guild_roles().await?;

        let roles = RoleSet::resolve(member.roles(), &catalog);
        debug!(
            held = member.roles().len(),
            resolved = roles.names().len(),
            "resolved guild roles"
        );
        Ok(roles)
    }
}

/// Sends a request and decodes a successful JSON response.
async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, reqwest::Error> {
    request
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await
}

/// Discord client construction errors.
#[derive(Debug)]
pub enum DiscordClientError {
    /// Configuration error (invalid URLs, etc.)
    Configuration(String),
}

impl std::fmt::Display for DiscordClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Discord client configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DiscordClientError {}
