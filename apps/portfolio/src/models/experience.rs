use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::media_url;
use crate::forms::split_csv;
use crate::media::MediaStore;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: Uuid,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub company_url: Option<String>,
    pub location: String,
    pub position: String,
    pub employment_type: String,
    pub description: String,
    pub technologies: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub is_visible: bool,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    #[serde(flatten)]
    pub experience: Experience,
    pub technologies_list: Vec<String>,
    pub company_logo_url: Option<String>,
}

impl ExperienceView {
    pub fn new(experience: Experience, media: &dyn MediaStore) -> Self {
        ExperienceView {
            technologies_list: split_csv(&experience.technologies),
            company_logo_url: media_url(media, experience.company_logo.as_deref()),
            experience,
        }
    }
}
