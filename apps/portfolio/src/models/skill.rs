use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub proficiency: String,
    pub icon: String,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Skills sharing a category, labelled for display.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub label: String,
    pub skills: Vec<Skill>,
}
