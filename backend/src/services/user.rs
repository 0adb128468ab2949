//! User service for signup and login
//!
//! Password hashing and verification run on the blocking thread pool;
//! token signing uses the pre-computed keys in the token service.

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use blogcraft_shared::{validation, AuthResponse, LoginRequest, SignupRequest};
use sqlx::PgPool;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Sign up a new user and issue their first token
    ///
    /// Validation failures surface as `BadRequest` with the validation
    /// message. The returned user is sanitized: no password hash, no
    /// token list.
    pub async fn signup(
        pool: &PgPool,
        tokens: &TokenService,
        req: &SignupRequest,
    ) -> Result<AuthResponse, ApiError> {
        let name = req.name.trim();
        let email = req.email.trim().to_lowercase();

        validation::validate_name(name).map_err(ApiError::BadRequest)?;

        if !email.validate_email() {
            return Err(ApiError::BadRequest(
                "The Email Provided is not a correct syntax.".to_string(),
            ));
        }

        // Rejects short passwords and anything containing "password"
        validation::validate_password(&req.password).map_err(ApiError::BadRequest)?;

        if UserRepository::email_exists(pool, &email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::BadRequest("Email already registered".to_string()));
        }

        // Hash on the blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, name, &email, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        let token = tokens
            .issue(pool, user.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            user: user.to_profile(),
            token,
            success: 1,
        })
    }

    /// Log a user in, issuing a fresh token
    ///
    /// Unknown email and wrong password both end in 401; the legacy
    /// surface returned 500 on this path, which was a defect and is
    /// corrected here.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        req: &LoginRequest,
    ) -> Result<AuthResponse, ApiError> {
        let (email, password) = match (&req.email, &req.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => {
                return Err(ApiError::BadRequest(
                    "Missing Email or Password Parameter".to_string(),
                ))
            }
        };

        let user = UserRepository::find_by_email(pool, &email.trim().to_lowercase())
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                ApiError::NotAuthenticated("Unable to Login, No Such worker exists".to_string())
            })?;

        // Verify on the blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.clone(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::NotAuthenticated("Wrong Credentials".to_string()));
        }

        let token = tokens
            .issue(pool, user.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            user: user.to_profile(),
            token,
            success: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    // Flows that touch the database live in the integration suite
    // (backend/tests/auth_integration_test.rs).
}
