use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::media_url;
use crate::forms::split_csv;
use crate::media::MediaStore;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub external_url: Option<String>,
    pub platform_name: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub is_published: bool,
    pub is_featured: bool,
    pub tags: String,
    pub read_time: i32,
    pub views: i32,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPostView {
    #[serde(flatten)]
    pub post: BlogPost,
    pub tags_list: Vec<String>,
    pub cover_image_url: Option<String>,
}

impl BlogPostView {
    pub fn new(post: BlogPost, media: &dyn MediaStore) -> Self {
        BlogPostView {
            tags_list: split_csv(&post.tags),
            cover_image_url: media_url(media, post.cover_image.as_deref()),
            post,
        }
    }
}
