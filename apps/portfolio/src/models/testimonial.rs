use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::media_url;
use crate::media::MediaStore;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub author: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub photo: Option<String>,
    pub linkedin_url: Option<String>,
    pub rating: i32,
    pub is_featured: bool,
    pub is_approved: bool,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialView {
    #[serde(flatten)]
    pub testimonial: Testimonial,
    pub photo_url: Option<String>,
}

impl TestimonialView {
    pub fn new(testimonial: Testimonial, media: &dyn MediaStore) -> Self {
        TestimonialView {
            photo_url: media_url(media, testimonial.photo.as_deref()),
            testimonial,
        }
    }
}
