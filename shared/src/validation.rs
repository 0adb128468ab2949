//! Input validation functions
//!
//! Field-level checks applied before anything reaches the database.
//! Email syntax is the backend's concern (it uses the `validator` crate).

/// Validate a password.
///
/// Rejects anything containing the literal substring "password"
/// (case-insensitive). A weak-credential heuristic, not a strength check.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 7 {
        return Err("Password must be at least 7 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    if password.to_lowercase().contains("password") {
        return Err("Password format is not correct".to_string());
    }
    Ok(())
}

/// Validate a user name (non-empty after trimming)
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a blog title (non-empty after trimming)
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a blog description (non-empty after trimming)
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Description cannot be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("longenough1").is_ok());
    }

    #[test]
    fn test_password_substring_heuristic() {
        assert!(validate_password("mypassword1").is_err());
        assert!(validate_password("PASSWORD123").is_err());
        assert!(validate_password("PassWord456").is_err());
        assert!(validate_password("correct horse battery").is_ok());
    }

    #[test]
    fn test_name_and_blog_fields() {
        assert!(validate_name("  ").is_err());
        assert!(validate_name("Jo").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("T").is_ok());
        assert!(validate_description("   ").is_err());
        assert!(validate_description("D").is_ok());
    }
}
