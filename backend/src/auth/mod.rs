//! Authentication module
//!
//! Provides bearer-token authentication with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, TokenService};
pub use middleware::{AuthUser, ManagerUser};
pub use password::PasswordService;
