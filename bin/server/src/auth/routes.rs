//! Authentication routes for login and the OAuth2 callback.
//!
//! The callback always answers with a redirect to the landing page. Failures
//! are split in two tiers: anything in the code exchange, profile fetch or
//! payload encoding ends the login with `auth_failed`, while a failed role
//! lookup only leaves the user with no roles.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use guildpass_platform_access::{
    AuthenticationError, CallbackOutcome, RedirectPayload, RoleSet,
};
use serde::Deserialize;
use std::sync::Arc;
use time::Duration as TimeDuration;

use super::AppState;

/// Login state cookie name (for CSRF protection during the OAuth2 flow).
const LOGIN_STATE_COOKIE: &str = "login_state";

/// Query parameters for the OAuth2 callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
}

/// Initiates the OAuth2 login flow by redirecting to Discord.
pub async fn login(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    let (auth_url, csrf_token) = state.discord.authorization_url();

    let cookie = Cookie::build((LOGIN_STATE_COOKIE, csrf_token.secret().clone()))
        .path("/")
        .http_only(true)
        .secure(state.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(10));

    (jar.add(cookie), Redirect::to(&auth_url))
}

/// Handles the OAuth2 callback after the user authorizes the application.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CallbackQuery>, QueryRejection>,
    jar: CookieJar,
) -> impl IntoResponse {
    let expected_state = jar.get(LOGIN_STATE_COOKIE).map(|c| c.value().to_string());

    let outcome = match query {
        Ok(Query(query)) => handle_callback(&state, query, expected_state.as_deref()).await,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Malformed callback query");
            CallbackOutcome::AuthFailed
        }
    };

    let remove_login_state = Cookie::build((LOGIN_STATE_COOKIE, ""))
        .path("/")
        .max_age(TimeDuration::ZERO);

    (
        jar.add(remove_login_state),
        Redirect::to(&outcome.redirect_target()),
    )
}

/// Runs the callback flow and decides where the user ends up.
///
/// `expected_state` is the state issued by [`login`], if the user came
/// through it.
pub async fn handle_callback(
    state: &AppState,
    query: CallbackQuery,
    expected_state: Option<&str>,
) -> CallbackOutcome {
    let Some(code) = query.code.filter(|c| !c.is_empty()) else {
        tracing::debug!("callback without authorization code");
        return CallbackOutcome::NoCode;
    };

    match complete_login(state, &code, query.state.as_deref(), expected_state).await {
        Ok(outcome) => outcome,
        Err(report) => {
            tracing::error!(error = %report, "OAuth login failed");
            CallbackOutcome::AuthFailed
        }
    }
}

async fn complete_login(
    state: &AppState,
    code: &str,
    returned_state: Option<&str>,
    expected_state: Option<&str>,
) -> guildpass_core::Result<CallbackOutcome, AuthenticationError> {
    if let Some(expected) = expected_state {
        if returned_state != Some(expected) {
            return Err(AuthenticationError::StateMismatch.into());
        }
    }

    let token = state.discord.exchange_code(code).await?;
    let profile = state.discord.current_user(&token).await?;

    let roles = match state.discord.resolve_roles(&token).await {
        Ok(roles) => roles,
        Err(report) => {
            tracing::warn!(
                error = %report,
                user_id = %profile.id(),
                "Role lookup failed, continuing without roles"
            );
            RoleSet::none()
        }
    };

    let payload = RedirectPayload::new(&profile, roles, state.discord.config().cdn_base_url());
    tracing::info!(
        user_id = %profile.id(),
        roles = payload.roles().len(),
        "User authenticated"
    );

    CallbackOutcome::authenticated(&payload)
}
