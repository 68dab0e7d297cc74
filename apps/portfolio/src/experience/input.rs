use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::{blank_to_none, FieldErrors};
use crate::models::choices::EmploymentType;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceInput {
    pub company_name: String,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub company_logo: Option<String>,
    #[serde(default, deserialize_with = "blank_to_none")]
    pub company_url: Option<String>,
    pub location: String,
    pub position: String,
    #[serde(default)]
    pub employment_type: EmploymentType,
    pub description: String,
    #[serde(default)]
    pub technologies: String,
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

impl ExperienceInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("company_name", &self.company_name, 200);
        errors.url("company_url", self.company_url.as_deref());
        errors.text("location", &self.location, 100);
        errors.text("position", &self.position, 200);
        errors.required("description", &self.description);
        errors.max_len("technologies", &self.technologies, 500);
        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_dates() {
        let e: ExperienceInput = serde_json::from_str(
            r#"{"company_name": "Acme", "location": "Remote", "position": "Engineer",
                "description": "Built things", "start_date": "2021-03-01"}"#,
        )
        .unwrap();
        assert_eq!(e.employment_type, EmploymentType::FullTime);
        assert!(e.is_visible);
        assert!(!e.is_current);
        assert_eq!(e.end_date, None);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_employment_type_wire_value() {
        let e: ExperienceInput = serde_json::from_str(
            r#"{"company_name": "Acme", "location": "Remote", "position": "Engineer",
                "description": "d", "start_date": "2021-03-01", "employment_type": "part_time"}"#,
        )
        .unwrap();
        assert_eq!(e.employment_type, EmploymentType::PartTime);
    }

    #[test]
    fn test_missing_position() {
        let e: ExperienceInput = serde_json::from_str(
            r#"{"company_name": "Acme", "location": "Remote", "position": "",
                "description": "d", "start_date": "2021-03-01"}"#,
        )
        .unwrap();
        assert!(matches!(e.validate(), Err(AppError::Validation(m)) if m.contains("position")));
    }
}
