use sqlx::PgPool;
use uuid::Uuid;

use super::input::SkillInput;
use crate::models::choices::SkillCategory;
use crate::models::skill::{Skill, SkillGroup};

pub const TABLE: &str = "skills";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY category, display_order, name")
        .fetch_all(pool)
        .await
}

pub async fn list_active(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(
        "SELECT * FROM skills WHERE is_active ORDER BY category, display_order, name",
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: &SkillInput) -> Result<Skill, sqlx::Error> {
    sqlx::query_as::<_, Skill>(
        r#"
        INSERT INTO skills (name, category, proficiency, icon, display_order, is_active)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(input.name.trim())
    .bind(input.category.as_str())
    .bind(input.proficiency.as_str())
    .bind(&input.icon)
    .bind(input.display_order)
    .bind(input.is_active)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &SkillInput,
) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(
        r#"
        UPDATE skills
        SET name = $2, category = $3, proficiency = $4, icon = $5,
            display_order = $6, is_active = $7, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.name.trim())
    .bind(input.category.as_str())
    .bind(input.proficiency.as_str())
    .bind(&input.icon)
    .bind(input.display_order)
    .bind(input.is_active)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM skills WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Groups skills under their category's display label, keeping the order
/// in which categories first appear.
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => {
                let label = SkillCategory::parse(&skill.category)
                    .map(SkillCategory::label)
                    .unwrap_or(skill.category.as_str())
                    .to_string();
                groups.push(SkillGroup {
                    category: skill.category.clone(),
                    label,
                    skills: vec![skill],
                });
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            proficiency: "advanced".to_string(),
            icon: String::new(),
            display_order: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_category_labels_and_order() {
        let groups = group_by_category(vec![
            skill("Postgres", "database"),
            skill("Docker", "devops"),
            skill("Redis", "database"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Database");
        assert_eq!(
            groups[0].skills.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["Postgres", "Redis"]
        );
        assert_eq!(groups[1].label, "DevOps & Tools");
    }

    #[test]
    fn test_group_by_category_empty() {
        assert!(group_by_category(vec![]).is_empty());
    }
}
