//! Blogcraft Shared Library
//!
//! This crate contains the wire types, role model and input validation
//! shared between the backend and any future clients.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::Role;
pub use types::*;
