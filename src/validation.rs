use std::collections::HashMap;

/// Field-level validation errors, keyed by form field name.
/// Validation runs before any database work; a failure never reaches a table.
pub type FieldErrors = HashMap<String, String>;

pub fn is_valid_email(email: &str) -> bool {
    // RFC-shape check, not full RFC 5322: something@something.tld, no whitespace.
    let re = regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(email)
}

/// Contact form rules: name >= 2 chars, RFC-shape email, message >= 10 chars.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if name.trim().chars().count() < 2 {
        errors.insert(
            "name".to_string(),
            "Name must be at least 2 characters.".to_string(),
        );
    }
    if !is_valid_email(email.trim()) {
        errors.insert(
            "email".to_string(),
            "Please enter a valid email.".to_string(),
        );
    }
    if message.trim().chars().count() < 10 {
        errors.insert(
            "message".to_string(),
            "Message must be at least 10 characters.".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Explainer input rule: at least 10 characters of code.
pub fn validate_code_snippet(code: &str) -> Result<(), String> {
    if code.trim().chars().count() < 10 {
        return Err("Code snippet must be at least 10 characters long.".to_string());
    }
    Ok(())
}

/// Optional link fields on admin forms: empty is fine, anything else must parse.
pub fn is_valid_url(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }
    url::Url::parse(value.trim()).is_ok()
}
