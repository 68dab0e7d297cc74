use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::FieldErrors;
use crate::models::choices::{Proficiency, SkillCategory};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillInput {
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
    #[serde(default)]
    pub proficiency: Proficiency,
    #[serde(default)]
    pub icon: String,
    #[serde(default, rename = "order")]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl SkillInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.text("name", &self.name, 50);
        errors.max_len("icon", &self.icon, 50);
        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input: SkillInput = serde_json::from_str(r#"{"name": "Rust"}"#).unwrap();
        assert_eq!(input.category, SkillCategory::Other);
        assert_eq!(input.proficiency, Proficiency::Intermediate);
        assert!(input.is_active);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_unknown_category_rejected_at_parse() {
        let parsed: Result<SkillInput, _> =
            serde_json::from_str(r#"{"name": "Rust", "category": "systems"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_name_too_long() {
        let input: SkillInput =
            serde_json::from_str(&format!(r#"{{"name": "{}"}}"#, "x".repeat(51))).unwrap();
        assert!(input.validate().is_err());
    }
}
