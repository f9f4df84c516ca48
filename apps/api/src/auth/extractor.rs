//! Session extractors.
//!
//! The token is read from:
//! - `Authorization: Bearer <token>` header
//! - the auth provider's session cookie
//!
//! `CurrentUser` rejects with 401 when no live session is found.
//! `MaybeUser` never rejects; handlers that serve anonymous callers use it.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::Session;
use crate::state::AppState;

/// An authenticated caller.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    #[allow(dead_code)]
    pub session: Session,
}

/// A caller that may or may not be authenticated.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_user(&parts.headers, state)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(resolve_user(&parts.headers, state).await?))
    }
}

/// `getSession(headers)`: token lookup against the session provider.
pub async fn resolve_user(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<Option<CurrentUser>, AppError> {
    let Some(token) = extract_token(headers, &state.session_cookie_name) else {
        return Ok(None);
    };

    let session = state.sessions.get_session(&token).await?;
    Ok(session.map(|session| CurrentUser {
        user_id: session.user_id,
        session,
    }))
}

/// Pulls the session token from the bearer header, then the session cookie.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(auth) = headers.get(header::AUTHORIZATION) {
        if let Some(token) = auth
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            return Some(token.to_string());
        }
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
