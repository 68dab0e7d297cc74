use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::{blank_to_none, FieldErrors};

fn default_rating() -> i32 {
    5
}

fn default_true() -> bool {
    true
}

/// Admin-side testimonial. Rows created here are approved unless told otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialInput {
    pub author: String,
    pub position: String,
    pub company: String,
    pub content: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub linkedin_url: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_approved: bool,
    #[serde(default, rename = "order")]
    pub display_order: i32,
}

impl TestimonialInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        check_common(
            &mut errors,
            &self.author,
            &self.position,
            &self.company,
            &self.content,
            self.linkedin_url.as_deref(),
            self.rating,
        );
        errors.finish()
    }
}

/// Public submission form. Moderation flags are not accepted from visitors,
/// and missing text fields surface as field errors.
#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialSubmission {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub linkedin_url: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: i32,
}

impl TestimonialSubmission {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        check_common(
            &mut errors,
            &self.author,
            &self.position,
            &self.company,
            &self.content,
            self.linkedin_url.as_deref(),
            self.rating,
        );
        errors.finish_with("Please check the form and try again.")
    }

    /// The row to store: never approved, never featured.
    pub fn into_pending(self) -> TestimonialInput {
        TestimonialInput {
            author: self.author.trim().to_string(),
            position: self.position.trim().to_string(),
            company: self.company.trim().to_string(),
            content: self.content,
            photo: None,
            linkedin_url: self.linkedin_url,
            rating: self.rating,
            is_featured: false,
            is_approved: false,
            display_order: 0,
        }
    }
}

fn check_common(
    errors: &mut FieldErrors,
    author: &str,
    position: &str,
    company: &str,
    content: &str,
    linkedin_url: Option<&str>,
    rating: i32,
) {
    errors.text("author", author, 100);
    errors.text("position", position, 100);
    errors.text("company", company, 100);
    errors.required("content", content);
    errors.url("linkedin_url", linkedin_url);
    errors.range("rating", rating, 1, 5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_default_is_approved() {
        let t: TestimonialInput = serde_json::from_str(
            r#"{"author": "Ann", "position": "CTO", "company": "Acme", "content": "Great"}"#,
        )
        .unwrap();
        assert!(t.is_approved);
        assert!(!t.is_featured);
        assert_eq!(t.rating, 5);
    }

    #[test]
    fn test_submission_ignores_moderation_flags() {
        let s: TestimonialSubmission = serde_json::from_str(
            r#"{"author": " Ann ", "position": "CTO", "company": "Acme", "content": "Great",
                "rating": 4, "is_approved": true, "is_featured": true}"#,
        )
        .unwrap();
        assert!(s.validate().is_ok());
        let pending = s.into_pending();
        assert!(!pending.is_approved);
        assert!(!pending.is_featured);
        assert_eq!(pending.author, "Ann");
        assert_eq!(pending.rating, 4);
    }

    #[test]
    fn test_rating_out_of_range() {
        let s: TestimonialSubmission = serde_json::from_str(
            r#"{"author": "Ann", "position": "CTO", "company": "Acme", "content": "x", "rating": 6}"#,
        )
        .unwrap();
        match s.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.starts_with("Please check the form and try again."));
                assert!(msg.contains("rating"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_submission_missing_fields_are_required() {
        let s: TestimonialSubmission =
            serde_json::from_str(r#"{"author": "Ann", "content": "Great"}"#).unwrap();
        match s.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.starts_with("Please check the form and try again."));
                assert!(msg.contains("position: This field is required."));
                assert!(msg.contains("company: This field is required."));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
