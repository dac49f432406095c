//! In-process stand-in for the Discord API used by tests.

use crate::auth::{AppState, DiscordClient};
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use guildpass_core::GuildId;
use guildpass_platform_access::DiscordConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const GUILD_ID: u64 = 81384788765712384;
pub const VALID_CODE: &str = "valid-code";
pub const USER_TOKEN: &str = "user-token";
pub const BOT_TOKEN: &str = "bot-token";

/// How the mock provider misbehaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockOptions {
    pub token_malformed: bool,
    pub user_fails: bool,
    pub member_fails: bool,
    pub catalog_fails: bool,
    pub without_avatar: bool,
}

/// Number of requests each endpoint received.
#[derive(Debug, Default)]
pub struct Calls {
    pub token: AtomicUsize,
    pub user: AtomicUsize,
    pub member: AtomicUsize,
    pub catalog: AtomicUsize,
}

impl Calls {
    pub fn total(&self) -> usize {
        self.token.load(Ordering::SeqCst)
            + self.user.load(Ordering::SeqCst)
            + self.member.load(Ordering::SeqCst)
            + self.catalog.load(Ordering::SeqCst)
    }
}

struct MockState {
    options: MockOptions,
    calls: Arc<Calls>,
}

pub struct MockDiscord {
    pub base_url: String,
    pub calls: Arc<Calls>,
}

impl MockDiscord {
    /// Starts the mock on an ephemeral port.
    pub async fn start(options: MockOptions) -> Self {
        let calls = Arc::new(Calls::default());
        let state = Arc::new(MockState {
            options,
            calls: calls.clone(),
        });

        let app = Router::new()
            .route("/api/oauth2/token", post(token))
            .route("/api/users/@me", get(current_user))
            .route("/api/users/@me/guilds/{guild_id}/member", get(member))
            .route("/api/guilds/{guild_id}/roles", get(catalog))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            calls,
        }
    }
}

/// Provider configuration pointing at a mock base URL.
pub fn discord_config(base_url: &str) -> DiscordConfig {
    DiscordConfig::builder(
        "client-id".to_string(),
        "client-secret".to_string(),
        "http://localhost:3000/callback".to_string(),
        GuildId::new(GUILD_ID),
        BOT_TOKEN.to_string(),
    )
    .api_base_url(format!("{base_url}/api"))
    .build()
}

/// Application state talking to the mock.
pub fn app_state(base_url: &str) -> Arc<AppState> {
    let discord = DiscordClient::new(discord_config(base_url)).unwrap();
    Arc::new(AppState::new(discord, false))
}

fn authorization(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn token(
    State(state): State<Arc<MockState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.calls.token.fetch_add(1, Ordering::SeqCst);

    let field = |name: &str| form.get(name).map(String::as_str);
    let valid = field("grant_type") == Some("authorization_code")
        && field("code") == Some(VALID_CODE)
        && field("client_id") == Some("client-id")
        && field("client_secret") == Some("client-secret")
        && field("redirect_uri") == Some("http://localhost:3000/callback");

    if !valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "invalid_grant" })),
        )
            .into_response();
    }
    if state.options.token_malformed {
        return Json(serde_json::json!({ "token_type": "Bearer" })).into_response();
    }

    Json(serde_json::json!({
        "access_token": USER_TOKEN,
        "token_type": "Bearer",
        "expires_in": 604800,
        "refresh_token": "refresh-token",
        "scope": "identify guilds.members.read"
    }))
    .into_response()
}

async fn current_user(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.calls.user.fetch_add(1, Ordering::SeqCst);

    if state.options.user_fails {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    if authorization(&headers) != format!("Bearer {USER_TOKEN}") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let avatar = if state.options.without_avatar {
        serde_json::Value::Null
    } else {
        serde_json::json!("8342729096ea3675442027381ff50dfe")
    };

    Json(serde_json::json!({
        "id": "80351110224678912",
        "username": "nelly",
        "discriminator": "7",
        "avatar": avatar,
        "verified": true
    }))
    .into_response()
}

async fn member(
    State(state): State<Arc<MockState>>,
    Path(guild_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.calls.member.fetch_add(1, Ordering::SeqCst);

    if state.options.member_fails || guild_id != GUILD_ID.to_string() {
        return StatusCode::FORBIDDEN.into_response();
    }
    if authorization(&headers) != format!("Bearer {USER_TOKEN}") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(serde_json::json!({
        "roles": ["10", "99"],
        "joined_at": "2015-04-26T06:26:56.936000+00:00"
    }))
    .into_response()
}

async fn catalog(
    State(state): State<Arc<MockState>>,
    Path(guild_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.calls.catalog.fetch_add(1, Ordering::SeqCst);

    if state.options.catalog_fails || guild_id != GUILD_ID.to_string() {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if authorization(&headers) != format!("Bot {BOT_TOKEN}") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(serde_json::json!([
        { "id": "10", "name": "Admin", "position": 2 },
        { "id": "20", "name": "Member", "position": 1 }
    ]))
    .into_response()
}
