use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::{blank_to_none, FieldErrors};
use crate::models::choices::ProjectStatus;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    /// Derived from `title` when omitted or blank.
    #[serde(default, deserialize_with = "blank_to_none")]
    pub slug: Option<String>,
    pub short_description: String,
    pub description: String,
    pub thumbnail: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    /// Comma-separated.
    #[serde(default)]
    pub technologies: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default, rename = "order")]
    pub display_order: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ProjectInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("title", &self.title, 200);
        if let Some(slug) = &self.slug {
            errors.max_len("slug", slug, 200);
        }
        errors.text("short_description", &self.short_description, 200);
        errors.required("description", &self.description);
        errors.required("thumbnail", &self.thumbnail);
        errors.max_len("technologies", &self.technologies, 500);
        errors.url("github_url", self.github_url.as_deref());
        errors.url("live_url", self.live_url.as_deref());
        errors.finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectImageInput {
    pub image: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default, rename = "order")]
    pub display_order: i32,
}

impl ProjectImageInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.required("image", &self.image);
        errors.max_len("caption", &self.caption, 200);
        errors.finish()
    }
}
