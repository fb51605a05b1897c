// src/utils/validation.rs
use crate::models::{
    SignupDraft, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_REGNO_LEN, MIN_NAME_LEN, MIN_REGNO_LEN,
};
use regex::Regex;
use std::fmt;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").unwrap();
}

/// Form field a validation error is scoped to. Variant order is the
/// order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Name,
    Regno,
    Role,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Email => write!(f, "email"),
            Field::Name => write!(f, "name"),
            Field::Regno => write!(f, "regno"),
            Field::Role => write!(f, "role"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Validates email address syntax and length
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_REGEX.is_match(email) {
        return Err("Invalid email address");
    }

    if email.chars().count() > MAX_EMAIL_LEN {
        return Err("Email address too long");
    }

    Ok(())
}

/// Validates name presence and length
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let len = name.chars().count();

    if len < MIN_NAME_LEN {
        return Err("Name is required");
    }

    if len > MAX_NAME_LEN {
        return Err("Name is too long");
    }

    Ok(())
}

/// Validates registration number length
pub fn validate_regno(regno: &str) -> Result<(), &'static str> {
    let len = regno.chars().count();

    if len < MIN_REGNO_LEN {
        return Err("Registration number must be at least 4 characters");
    }

    if len > MAX_REGNO_LEN {
        return Err("Registration number too long");
    }

    Ok(())
}

/// Runs the full draft through every field check and collects the
/// first error per field, in fixed field order. An empty result means
/// the draft is submittable. Fields are checked as entered; trimming
/// happens when the wire request is built, not here.
pub fn validate_draft(draft: &SignupDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Err(message) = validate_email(&draft.email) {
        errors.push(FieldError {
            field: Field::Email,
            message,
        });
    }

    if let Err(message) = validate_name(&draft.name) {
        errors.push(FieldError {
            field: Field::Name,
            message,
        });
    }

    if let Err(message) = validate_regno(&draft.regno) {
        errors.push(FieldError {
            field: Field::Regno,
            message,
        });
    }

    if draft.role.is_none() {
        errors.push(FieldError {
            field: Field::Role,
            message: "Role is required",
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn valid_draft() -> SignupDraft {
        SignupDraft {
            email: "ada@example.edu".to_string(),
            name: "Ada Lovelace".to_string(),
            regno: "21BCE1234".to_string(),
            role: Some(Role::User),
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("ada@example.edu").is_ok());
        assert!(validate_email("a.b+c@sub.example.co").is_ok());
        assert_eq!(validate_email("not-an-email"), Err("Invalid email address"));
        assert_eq!(validate_email("missing-domain@"), Err("Invalid email address"));
        assert_eq!(validate_email(""), Err("Invalid email address"));

        let long = format!("{}@example.edu", "a".repeat(60));
        assert_eq!(validate_email(&long), Err("Email address too long"));
    }

    #[test]
    fn test_email_boundary_length() {
        // 50 chars exactly is still accepted
        let local = "a".repeat(50 - "@example.edu".len());
        let email = format!("{}@example.edu", local);
        assert_eq!(email.chars().count(), 50);
        assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name(&"x".repeat(100)).is_ok());
        assert_eq!(validate_name(""), Err("Name is required"));
        assert_eq!(validate_name(&"x".repeat(101)), Err("Name is too long"));
    }

    #[test]
    fn test_regno_validation() {
        assert!(validate_regno("21BC").is_ok());
        assert!(validate_regno(&"9".repeat(20)).is_ok());
        assert_eq!(
            validate_regno("123"),
            Err("Registration number must be at least 4 characters")
        );
        assert_eq!(
            validate_regno(&"9".repeat(21)),
            Err("Registration number too long")
        );
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_missing_role_reported() {
        let mut draft = valid_draft();
        draft.role = None;

        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Role);
        assert_eq!(errors[0].message, "Role is required");
    }

    #[test]
    fn test_errors_come_back_in_field_order() {
        let draft = SignupDraft {
            email: "bad".to_string(),
            name: String::new(),
            regno: "12".to_string(),
            role: None,
        };

        let fields: Vec<Field> = validate_draft(&draft).iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Email, Field::Name, Field::Regno, Field::Role]
        );
    }

    #[test]
    fn test_draft_is_checked_untrimmed() {
        // Whitespace padding counts toward length until the wire
        // request trims it.
        let mut draft = valid_draft();
        draft.regno = " 123 ".to_string();
        assert!(validate_draft(&draft).is_empty());
    }
}
