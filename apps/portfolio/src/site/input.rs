use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::{blank_to_none, FieldErrors};

fn default_full_name() -> String {
    "Your Name".to_string()
}

fn default_tagline() -> String {
    "Full Stack Developer".to_string()
}

fn default_true() -> bool {
    true
}

/// Full replacement of the settings row, as submitted by the admin form.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettingsInput {
    #[serde(default = "default_full_name")]
    pub full_name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    pub bio: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub profile_image: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub twitter_url: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub resume_file: Option<String>,
    #[serde(default)]
    pub current_projects: String,
    #[serde(default)]
    pub currently_learning: String,
    #[serde(default)]
    pub years_experience: i32,
    #[serde(default)]
    pub projects_completed: i32,
    #[serde(default)]
    pub clients_served: i32,
    #[serde(default)]
    pub certifications: i32,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: String,
    #[serde(default = "default_true")]
    pub enable_dark_mode: bool,
}

impl SiteSettingsInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("full_name", &self.full_name, 100);
        errors.text("tagline", &self.tagline, 200);
        errors.required("bio", &self.bio);
        errors.email("email", &self.email);
        errors.max_len("phone", &self.phone, 20);
        errors.max_len("location", &self.location, 100);
        errors.url("github_url", self.github_url.as_deref());
        errors.url("linkedin_url", self.linkedin_url.as_deref());
        errors.url("twitter_url", self.twitter_url.as_deref());
        errors.non_negative("years_experience", self.years_experience);
        errors.non_negative("projects_completed", self.projects_completed);
        errors.non_negative("clients_served", self.clients_served);
        errors.non_negative("certifications", self.certifications);
        errors.max_len("meta_description", &self.meta_description, 160);
        errors.max_len("meta_keywords", &self.meta_keywords, 255);
        errors.finish()
    }
}
