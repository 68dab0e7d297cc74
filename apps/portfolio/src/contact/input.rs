use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::FieldErrors;
use crate::models::choices::ContactStatus;

/// Longest user agent kept on a submission.
pub const USER_AGENT_MAX: usize = 500;

/// Missing fields deserialize as empty so `validate` reports them alongside
/// every other problem.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("name", &self.name, 200);
        errors.email("email", &self.email);
        errors.text("subject", &self.subject, 200);
        errors.required("message", &self.message);
        errors.max_len("phone", &self.phone, 20);
        errors.max_len("company", &self.company, 200);
        errors.finish_with("Please check the form and try again.")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: ContactStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let f: ContactForm = serde_json::from_str(
            r#"{"name": "Jane", "email": "jane@example.com", "subject": "Hi", "message": "Hello"}"#,
        )
        .unwrap();
        assert!(f.validate().is_ok());
        assert_eq!(f.phone, "");
    }

    #[test]
    fn test_invalid_form_has_summary() {
        let f: ContactForm = serde_json::from_str(
            r#"{"name": "Jane", "email": "jane", "subject": "", "message": "Hello",
                "phone": "123456789012345678901"}"#,
        )
        .unwrap();
        match f.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.starts_with("Please check the form and try again."));
                assert!(msg.contains("email"));
                assert!(msg.contains("subject"));
                assert!(msg.contains("phone"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_are_reported_as_required() {
        let f: ContactForm = serde_json::from_str(
            r#"{"name": "Jane", "email": "jane@example.com", "message": "Hello"}"#,
        )
        .unwrap();
        match f.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.starts_with("Please check the form and try again."));
                assert!(msg.contains("subject: This field is required."));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_update_rejects_unknown_value() {
        assert!(serde_json::from_str::<StatusUpdate>(r#"{"status": "spam"}"#).is_err());
        let ok: StatusUpdate = serde_json::from_str(r#"{"status": "replied"}"#).unwrap();
        assert_eq!(ok.status, ContactStatus::Replied);
    }
}
