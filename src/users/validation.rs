use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Validate the name form field. The caller trims first.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    if name.len() > 255 {
        return Err("Name is too long (max 255 characters)".to_string());
    }
    Ok(())
}

/// Validate the email form field. The caller normalizes (trim + lowercase)
/// first.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if email.len() > 255 {
        return Err("Email is too long (max 255 characters)".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_name_and_email() {
        assert!(validate_name("Ana").is_ok());
        assert!(validate_email("ana@example.com").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(validate_name("").unwrap_err(), "Name is required");
    }

    #[test]
    fn rejects_empty_email() {
        assert_eq!(validate_email("").unwrap_err(), "Email is required");
    }

    #[test]
    fn rejects_email_without_at_or_domain() {
        assert!(validate_email("ana.example.com").is_err());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("ana@exa mple.com").is_err());
    }

    #[test]
    fn rejects_overlong_fields() {
        let long = "x".repeat(256);
        assert!(validate_name(&long).is_err());
        assert!(validate_email(&format!("{}@example.com", long)).is_err());
    }
}
