//! Authentication extractors
//!
//! Axum extractors that resolve the caller from a bearer token. A token is
//! accepted only if its signature verifies AND it is still present in the
//! owning user's active-token list, so a single database lookup covers both
//! "user exists" and "token not revoked".
//!
//! Every failure path (missing header, bad signature, no matching user,
//! wrong role, database outage) collapses to the same 401 so clients cannot
//! tell which check failed.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use blogcraft_shared::Role;
use uuid::Uuid;

/// Authenticated caller resolved from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
    /// Raw token string, kept for downstream handlers
    pub token: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::NotAuthenticated("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::NotAuthenticated("Invalid authorization format".to_string()))?;

        // Signature check needs no database round-trip
        let user_id = app_state
            .tokens()
            .verify(token)
            .map_err(|e| ApiError::NotAuthenticated(e.to_string()))?;

        // The user must exist and the token must still be in their
        // active-token list. Covers revoked tokens and deleted users.
        let user = UserRepository::find_by_id_and_token(app_state.db(), user_id, token)
            .await
            .map_err(|e| ApiError::NotAuthenticated(e.to_string()))?
            .ok_or_else(|| ApiError::NotAuthenticated("Invalid token".to_string()))?;

        Ok(AuthUser {
            user_id: user.id,
            role: user.role(),
            token: token.to_string(),
        })
    }
}

/// Authenticated caller holding the manager role
///
/// Same resolution as [`AuthUser`] plus a role gate.
#[derive(Debug, Clone)]
pub struct ManagerUser {
    pub user_id: Uuid,
    pub token: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for ManagerUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        if !auth.role.is_manager() {
            return Err(ApiError::NotAuthenticated("Wrong Credentials".to_string()));
        }

        Ok(ManagerUser {
            user_id: auth.user_id,
            token: auth.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_debug() {
        let user = AuthUser {
            user_id: Uuid::new_v4(),
            role: Role::User,
            token: "tok".to_string(),
        };
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("AuthUser"));
    }
}
