//! API request and response types

use crate::models::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Public user profile.
///
/// The only serialized representation of a user; the password hash and the
/// active-token list are never part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub token: String,
    /// Literal success flag, always 1
    pub success: u8,
}

/// Blog creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub description: String,
}

/// Blog update request; only title and description are honored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Blog response with the author resolved to a public profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for the blog listing.
///
/// Values are accepted as raw strings so non-numeric input falls back to
/// the configured defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Paginated blog listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogResponse>,
    pub pagination: Pagination,
}

/// Pagination block returned alongside listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
}

impl Pagination {
    /// Compute the pagination block for a page of `limit` items out of
    /// `total_count` matches.
    ///
    /// `next_page`/`prev_page` are query-string fragments ready to append
    /// to the listing path. Callers must reject `limit == 0` before
    /// calling.
    pub fn calculate(page: i64, limit: i64, total_count: i64) -> Self {
        // Ceiling division written so an arbitrarily large limit cannot
        // overflow the intermediate sum
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count - 1) / limit + 1
        };

        let next_page = (page < total_pages).then(|| format!("?page={}&limit={}", page + 1, limit));
        let prev_page = (page > 1).then(|| format!("?page={}&limit={}", page - 1, limit));

        Self {
            current_page: page,
            total_pages,
            next_page,
            prev_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 6, 13, 3, Some("?page=2&limit=6"), None)]
    #[case(2, 6, 13, 3, Some("?page=3&limit=6"), Some("?page=1&limit=6"))]
    #[case(3, 6, 13, 3, None, Some("?page=2&limit=6"))]
    #[case(1, 6, 0, 0, None, None)]
    #[case(1, 6, 6, 1, None, None)]
    #[case(1, 1, 2, 2, Some("?page=2&limit=1"), None)]
    #[case(1, i64::MAX, 13, 1, None, None)]
    fn test_pagination_calculate(
        #[case] page: i64,
        #[case] limit: i64,
        #[case] total: i64,
        #[case] total_pages: i64,
        #[case] next: Option<&str>,
        #[case] prev: Option<&str>,
    ) {
        let p = Pagination::calculate(page, limit, total);
        assert_eq!(p.current_page, page);
        assert_eq!(p.total_pages, total_pages);
        assert_eq!(p.next_page.as_deref(), next);
        assert_eq!(p.prev_page.as_deref(), prev);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let p = Pagination::calculate(2, 6, 13);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["nextPage"], "?page=3&limit=6");
        assert_eq!(json["prevPage"], "?page=1&limit=6");
    }

    #[test]
    fn test_pagination_omits_absent_links() {
        let p = Pagination::calculate(1, 6, 5);
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("nextPage"));
        assert!(!json.contains("prevPage"));
    }

    #[test]
    fn test_auth_response_has_no_password_field() {
        let profile = UserProfile {
            id: "abc".to_string(),
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            role: Role::User,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let response = AuthResponse {
            user: profile,
            token: "tok".to_string(),
            success: 1,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("tokens"));
        assert!(json.contains("\"success\":1"));
    }
}
