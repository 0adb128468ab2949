//! Blog repository for database operations

use anyhow::Result;
use blogcraft_shared::{BlogResponse, Role, UserProfile};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Blog record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog row joined with its author's public fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_email: String,
    pub author_role: String,
    pub author_created_at: DateTime<Utc>,
    pub author_updated_at: DateTime<Utc>,
}

impl BlogWithAuthor {
    /// Wire representation with the author resolved to a public profile
    pub fn into_response(self) -> BlogResponse {
        BlogResponse {
            id: self.id.to_string(),
            title: self.title,
            description: self.description,
            author: UserProfile {
                id: self.author_id.to_string(),
                name: self.author_name,
                email: self.author_email,
                role: self.author_role.parse().unwrap_or(Role::User),
                created_at: self.author_created_at,
                updated_at: self.author_updated_at,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const BLOG_WITH_AUTHOR_COLUMNS: &str = r#"
    b.id, b.title, b.description, b.created_at, b.updated_at,
    u.id AS author_id, u.name AS author_name, u.email AS author_email,
    u.role AS author_role, u.created_at AS author_created_at,
    u.updated_at AS author_updated_at
"#;

/// Blog repository for database operations
pub struct BlogRepository;

impl BlogRepository {
    /// Insert a new blog authored by the given user
    ///
    /// Returns None when the insert produced no row; callers preserve the
    /// defensive creation-failure branch on that path.
    pub async fn create(
        pool: &PgPool,
        author: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Option<BlogRecord>> {
        let record = sqlx::query_as::<_, BlogRecord>(
            r#"
            INSERT INTO blogs (title, description, author)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, author, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(author)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Fetch one page of blogs, newest first, with authors resolved
    pub async fn list_page(pool: &PgPool, limit: i64, skip: i64) -> Result<Vec<BlogWithAuthor>> {
        let query = format!(
            r#"
            SELECT {BLOG_WITH_AUTHOR_COLUMNS}
            FROM blogs b
            JOIN users u ON u.id = b.author
            ORDER BY b.created_at DESC
            LIMIT $1 OFFSET $2
            "#
        );

        let records = sqlx::query_as::<_, BlogWithAuthor>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Count all blogs
    pub async fn count(pool: &PgPool) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(pool)
            .await?;

        Ok(total)
    }

    /// Fetch a single blog with its author resolved
    pub async fn find_with_author(pool: &PgPool, id: Uuid) -> Result<Option<BlogWithAuthor>> {
        let query = format!(
            r#"
            SELECT {BLOG_WITH_AUTHOR_COLUMNS}
            FROM blogs b
            JOIN users u ON u.id = b.author
            WHERE b.id = $1
            "#
        );

        let record = sqlx::query_as::<_, BlogWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Find a blog constrained to both id and author
    ///
    /// Absence and ownership mismatch are indistinguishable here by
    /// design: both return None.
    pub async fn find_by_id_and_author(
        pool: &PgPool,
        id: Uuid,
        author: Uuid,
    ) -> Result<Option<BlogRecord>> {
        let record = sqlx::query_as::<_, BlogRecord>(
            r#"
            SELECT id, title, description, author, created_at, updated_at
            FROM blogs
            WHERE id = $1 AND author = $2
            "#,
        )
        .bind(id)
        .bind(author)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Apply a partial update of title/description
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<BlogRecord>> {
        let record = sqlx::query_as::<_, BlogRecord>(
            r#"
            UPDATE blogs SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, author, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a blog by id, returning the deleted row if any
    ///
    /// No ownership check; the role gate happens in the auth layer.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<BlogRecord>> {
        let record = sqlx::query_as::<_, BlogRecord>(
            r#"
            DELETE FROM blogs
            WHERE id = $1
            RETURNING id, title, description, author, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
