//! User repository for database operations

use anyhow::Result;
use blogcraft_shared::{Role, UserProfile};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
///
/// Never serialized directly; responses go through
/// [`UserRecord::to_profile`] which strips the password hash and the
/// active-token list.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub tokens: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Role as the closed enum; the column is CHECK-constrained so an
    /// unknown value cannot occur, but fall back to the least privilege
    /// anyway.
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or(Role::User)
    }

    /// Public representation: no password hash, no token list
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user with the default role
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, role, tokens, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, role, tokens, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find a user by id whose active-token list contains this exact token
    ///
    /// The combined filter is the authentication check: a well-formed token
    /// that has been dropped from the list, or whose user is gone, matches
    /// nothing.
    pub async fn find_by_id_and_token(
        pool: &PgPool,
        id: Uuid,
        token: &str,
    ) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, role, tokens, created_at, updated_at
            FROM users
            WHERE id = $1 AND $2 = ANY(tokens)
            "#,
        )
        .bind(id)
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Append a token to a user's active-token list
    ///
    /// Single-statement append; concurrent logins on the same user may
    /// still interleave with a full-row save elsewhere (accepted
    /// limitation).
    pub async fn append_token(pool: &PgPool, id: Uuid, token: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET tokens = array_append(tokens, $2), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(token)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}
