use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::{blank_to_none, FieldErrors};

pub const DEFAULT_AUTHOR: &str = "Pawan Kumar";

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_read_time() -> i32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostInput {
    pub title: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub external_url: Option<String>,
    #[serde(default)]
    pub platform_name: String,
    #[serde(default = "default_author")]
    pub author: String,
    /// A future date schedules the post. Omitted means now on create and
    /// the stored date on update.
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    /// Comma-separated.
    #[serde(default)]
    pub tags: String,
    #[serde(default = "default_read_time")]
    pub read_time: i32,
    #[serde(default, rename = "order")]
    pub display_order: i32,
}

impl BlogPostInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("title", &self.title, 200);
        if let Some(slug) = &self.slug {
            errors.max_len("slug", slug, 200);
        }
        errors.text("excerpt", &self.excerpt, 300);
        errors.required("content", &self.content);
        errors.url("external_url", self.external_url.as_deref());
        errors.max_len("platform_name", &self.platform_name, 50);
        errors.text("author", &self.author, 100);
        errors.max_len("tags", &self.tags, 200);
        errors.non_negative("read_time", self.read_time);
        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_draft_by_default_author() {
        let p: BlogPostInput = serde_json::from_str(
            r#"{"title": "Hello", "excerpt": "e", "content": "c"}"#,
        )
        .unwrap();
        assert!(!p.is_published);
        assert_eq!(p.author, DEFAULT_AUTHOR);
        assert_eq!(p.read_time, 5);
        assert!(p.published_date.is_none());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_explicit_publish_date_is_kept() {
        let p: BlogPostInput = serde_json::from_str(
            r#"{"title": "Hello", "excerpt": "e", "content": "c",
                "published_date": "2030-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let expected: DateTime<Utc> = "2030-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(p.published_date, Some(expected));
    }

    #[test]
    fn test_excerpt_limit_and_negative_read_time() {
        let long = "x".repeat(301);
        let p: BlogPostInput = serde_json::from_value(serde_json::json!({
            "title": "Hello", "excerpt": long, "content": "c", "read_time": -1
        }))
        .unwrap();
        match p.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("excerpt"));
                assert!(msg.contains("read_time"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
