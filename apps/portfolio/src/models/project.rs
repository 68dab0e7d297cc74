use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::media_url;
use crate::forms::split_csv;
use crate::media::MediaStore;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub thumbnail: String,
    pub featured_image: Option<String>,
    pub status: String,
    pub technologies: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectImage {
    pub id: Uuid,
    pub project_id: Uuid,
    pub image: String,
    pub caption: String,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub technologies_list: Vec<String>,
    pub thumbnail_url: String,
    pub featured_image_url: Option<String>,
}

impl ProjectView {
    pub fn new(project: Project, media: &dyn MediaStore) -> Self {
        ProjectView {
            technologies_list: split_csv(&project.technologies),
            thumbnail_url: media.url(&project.thumbnail),
            featured_image_url: media_url(media, project.featured_image.as_deref()),
            project,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectImageView {
    #[serde(flatten)]
    pub image: ProjectImage,
    pub image_url: String,
}

impl ProjectImageView {
    pub fn new(image: ProjectImage, media: &dyn MediaStore) -> Self {
        ProjectImageView {
            image_url: media.url(&image.image),
            image,
        }
    }
}

/// Project detail page: the project plus its ordered gallery.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: ProjectView,
    pub images: Vec<ProjectImageView>,
}
