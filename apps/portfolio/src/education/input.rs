use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::{blank_to_none, FieldErrors};
use crate::models::choices::Degree;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationInput {
    pub institution: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub institution_logo: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub institution_url: Option<String>,
    #[serde(default)]
    pub location: String,
    pub degree: Degree,
    pub field_of_study: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default, rename = "order")]
    pub display_order: i32,
}

impl EducationInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("institution", &self.institution, 200);
        errors.url("institution_url", self.institution_url.as_deref());
        errors.max_len("location", &self.location, 100);
        errors.text("field_of_study", &self.field_of_study, 200);
        errors.max_len("grade", &self.grade, 50);
        errors.finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificationInput {
    pub name: String,
    pub issuing_organization: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub organization_logo: Option<String>,
    #[serde(default)]
    pub credential_id: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub description: String,
    pub date_obtained: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default, rename = "order")]
    pub display_order: i32,
}

impl CertificationInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("name", &self.name, 200);
        errors.text("issuing_organization", &self.issuing_organization, 200);
        errors.max_len("credential_id", &self.credential_id, 200);
        errors.url("credential_url", self.credential_url.as_deref());
        errors.finish()
    }
}
