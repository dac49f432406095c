//! Role membership check.
//!
//! `POST /api/verify-role` answers whether a role name is in a list of role
//! names. It is stateless and makes no outbound calls.

use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of a role membership check.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRoleRequest {
    roles: Option<Vec<String>>,
    required_role: Option<String>,
}

/// Result of a role membership check.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRoleResponse {
    pub has_role: bool,
}

/// Reports whether `requiredRole` is one of `roles`.
pub async fn verify_role(
    body: Result<Json<VerifyRoleRequest>, JsonRejection>,
) -> Result<Json<VerifyRoleResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::InvalidBody {
        reason: rejection.body_text(),
    })?;

    let has_role = guildpass_platform_access::verify_role(
        request.roles.as_deref(),
        request.required_role.as_deref(),
    )?;

    Ok(Json(VerifyRoleResponse { has_role }))
}
