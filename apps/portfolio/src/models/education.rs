use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::choices::Degree;
use super::media_url;
use crate::media::MediaStore;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub institution_logo: Option<String>,
    pub institution_url: Option<String>,
    pub location: String,
    pub degree: String,
    pub field_of_study: String,
    pub grade: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub is_visible: bool,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuing_organization: String,
    pub organization_logo: Option<String>,
    pub credential_id: String,
    pub credential_url: Option<String>,
    pub description: String,
    pub date_obtained: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub is_visible: bool,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationView {
    #[serde(flatten)]
    pub education: Education,
    pub degree_display: String,
    pub institution_logo_url: Option<String>,
}

impl EducationView {
    pub fn new(education: Education, media: &dyn MediaStore) -> Self {
        let degree_display = Degree::parse(&education.degree)
            .map(Degree::label)
            .unwrap_or(education.degree.as_str())
            .to_string();
        EducationView {
            degree_display,
            institution_logo_url: media_url(media, education.institution_logo.as_deref()),
            education,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationView {
    #[serde(flatten)]
    pub certification: Certification,
    pub organization_logo_url: Option<String>,
}

impl CertificationView {
    pub fn new(certification: Certification, media: &dyn MediaStore) -> Self {
        CertificationView {
            organization_logo_url: media_url(media, certification.organization_logo.as_deref()),
            certification,
        }
    }
}
