use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::media_url;
use crate::media::MediaStore;
use crate::site::store::SINGLETON_ID;

/// The single site-wide settings row (`id` is always 1).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteSettings {
    pub id: i16,
    pub full_name: String,
    pub tagline: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
    pub current_projects: String,
    pub currently_learning: String,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub clients_served: i32,
    pub certifications: i32,
    pub meta_description: String,
    pub meta_keywords: String,
    pub enable_dark_mode: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for SiteSettings {
    /// Column defaults, used when the table has not been migrated yet.
    fn default() -> Self {
        let now = Utc::now();
        SiteSettings {
            id: SINGLETON_ID,
            full_name: "Your Name".to_string(),
            tagline: "Full Stack Developer".to_string(),
            bio: String::new(),
            profile_image: None,
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            github_url: None,
            linkedin_url: None,
            twitter_url: None,
            resume_file: None,
            current_projects: String::new(),
            currently_learning: String::new(),
            years_experience: 0,
            projects_completed: 0,
            clients_served: 0,
            certifications: 0,
            meta_description: String::new(),
            meta_keywords: String::new(),
            enable_dark_mode: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Settings as exposed to pages: media keys resolved to URLs, and the
/// resume reachable only through the tracked download route.
#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    #[serde(flatten)]
    pub settings: SiteSettings,
    pub profile_image_url: Option<String>,
    pub has_resume: bool,
}

impl SiteView {
    pub fn new(mut settings: SiteSettings, media: &dyn MediaStore) -> Self {
        let profile_image_url = media_url(media, settings.profile_image.as_deref());
        let has_resume = settings.resume_file.take().is_some_and(|k| !k.is_empty());
        SiteView {
            settings,
            profile_image_url,
            has_resume,
        }
    }
}
