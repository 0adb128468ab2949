//! Token issuance and verification
//!
//! Tokens are JWTs signed with a process-wide secret. They carry no expiry
//! claim: a token stays valid for as long as it is present in the owning
//! user's active-token list, and revocation is solely by removal from that
//! list. Signature verification therefore never needs the database, while
//! activeness checks do.

use crate::repositories::UserRepository;
use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Token service with pre-computed signing keys
///
/// Keys are derived once at startup and wrapped in Arc for cheap cloning
/// across async tasks.
#[derive(Clone)]
pub struct TokenService {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    validation: Validation,
}

impl TokenService {
    /// Create a new token service from the configured secret
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens are issued without an exp claim; activeness is tracked in
        // the user's token list instead.
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation,
        }
    }

    /// Sign a token embedding the given user id
    ///
    /// Does not persist anything; use [`TokenService::issue`] for the full
    /// issuance path that records the token as active.
    pub fn sign(&self, user_id: Uuid) -> Result<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Issue a token for a user and append it to their active-token list
    ///
    /// The append and any concurrent login are not guarded against each
    /// other; tokens are additive so a lost append only drops the losing
    /// session (known limitation).
    pub async fn issue(&self, pool: &PgPool, user_id: Uuid) -> Result<String> {
        let token = self.sign(user_id)?;
        UserRepository::append_token(pool, user_id, &token).await?;
        Ok(token)
    }

    /// Verify a token's signature and structure, returning the embedded
    /// user id
    ///
    /// Does not confirm the token is still active; callers must cross-check
    /// the user's active-token list.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Uuid::parse_str(&token_data.claims.sub)
            .map_err(|_| anyhow::anyhow!("Invalid user ID in token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret")
    }

    #[test]
    fn test_sign_and_verify() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.sign(user_id).unwrap();
        let verified = service.verify(&token).unwrap();

        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        assert!(service.verify("invalid.token.here").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = TokenService::new("another-secret");
        let user_id = Uuid::new_v4();

        let token = service.sign(user_id).unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_token_without_expiry_stays_valid() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.sign(user_id).unwrap();
        // No exp claim is issued, so verification must not require one.
        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
