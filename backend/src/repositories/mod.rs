//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod blog;
pub mod user;

pub use blog::{BlogRecord, BlogRepository, BlogWithAuthor};
pub use user::{UserRecord, UserRepository};
