use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use super::input::SiteSettingsInput;
use crate::db::or_default;
use crate::models::site::SiteSettings;

/// The only identity a settings row may have.
pub const SINGLETON_ID: i16 = 1;

const TABLE: &str = "site_settings";

/// Returns the settings row, creating it with column defaults on first use.
pub async fn get_or_create(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
    sqlx::query("INSERT INTO site_settings (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
        .bind(SINGLETON_ID)
        .execute(pool)
        .await?;

    sqlx::query_as::<_, SiteSettings>("SELECT * FROM site_settings WHERE id = $1")
        .bind(SINGLETON_ID)
        .fetch_one(pool)
        .await
}

/// Settings for page rendering. Falls back to in-memory defaults when the
/// table is missing or unreadable.
pub async fn load(pool: &PgPool) -> SiteSettings {
    or_default(pool, TABLE, get_or_create(pool)).await
}

/// Saves `input` onto the singleton row. Always targets `id = 1`.
pub async fn save(pool: &PgPool, input: &SiteSettingsInput) -> Result<SiteSettings, sqlx::Error> {
    sqlx::query_as::<_, SiteSettings>(
        r#"
        INSERT INTO site_settings
            (id, full_name, tagline, bio, profile_image, email, phone, location,
             github_url, linkedin_url, twitter_url, resume_file,
             current_projects, currently_learning,
             years_experience, projects_completed, clients_served, certifications,
             meta_description, meta_keywords, enable_dark_mode)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20, $21)
        ON CONFLICT (id) DO UPDATE SET
            full_name = EXCLUDED.full_name,
            tagline = EXCLUDED.tagline,
            bio = EXCLUDED.bio,
            profile_image = EXCLUDED.profile_image,
            email = EXCLUDED.email,
            phone = EXCLUDED.phone,
            location = EXCLUDED.location,
            github_url = EXCLUDED.github_url,
            linkedin_url = EXCLUDED.linkedin_url,
            twitter_url = EXCLUDED.twitter_url,
            resume_file = EXCLUDED.resume_file,
            current_projects = EXCLUDED.current_projects,
            currently_learning = EXCLUDED.currently_learning,
            years_experience = EXCLUDED.years_experience,
            projects_completed = EXCLUDED.projects_completed,
            clients_served = EXCLUDED.clients_served,
            certifications = EXCLUDED.certifications,
            meta_description = EXCLUDED.meta_description,
            meta_keywords = EXCLUDED.meta_keywords,
            enable_dark_mode = EXCLUDED.enable_dark_mode,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(SINGLETON_ID)
    .bind(&input.full_name)
    .bind(&input.tagline)
    .bind(&input.bio)
    .bind(&input.profile_image)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.location)
    .bind(&input.github_url)
    .bind(&input.linkedin_url)
    .bind(&input.twitter_url)
    .bind(&input.resume_file)
    .bind(&input.current_projects)
    .bind(&input.currently_learning)
    .bind(input.years_experience)
    .bind(input.projects_completed)
    .bind(input.clients_served)
    .bind(input.certifications)
    .bind(&input.meta_description)
    .bind(&input.meta_keywords)
    .bind(input.enable_dark_mode)
    .fetch_one(pool)
    .await
}

/// Seeds the settings row with starter content when none exists.
/// Returns `true` if a row was created.
pub async fn ensure_default(pool: &PgPool) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO site_settings
            (id, full_name, tagline, bio, email, phone, location,
             meta_description, meta_keywords)
        VALUES ($1, 'Your Name', 'Full Stack Developer', 'Welcome to my portfolio',
                'your@email.com', '+1234567890', 'Your City',
                'Portfolio website', 'portfolio, developer')
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(SINGLETON_ID)
    .execute(pool)
    .await?;

    let created = result.rows_affected() == 1;
    if created {
        info!("Default site settings created");
    } else {
        info!("Site settings already exist");
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::unreachable_pool;

    #[tokio::test]
    async fn test_load_falls_back_to_defaults() {
        let pool = unreachable_pool();
        let site = load(&pool).await;
        assert_eq!(site.id, SINGLETON_ID);
        assert_eq!(site.full_name, "Your Name");
        assert!(site.resume_file.is_none());
    }

    fn settings(full_name: &str) -> SiteSettingsInput {
        serde_json::from_value(serde_json::json!({
            "full_name": full_name,
            "bio": "Hello",
            "email": "jane@example.com",
        }))
        .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_ensure_default_seeds_once(pool: PgPool) {
        assert!(ensure_default(&pool).await.unwrap());
        assert!(!ensure_default(&pool).await.unwrap());
        assert_eq!(load(&pool).await.tagline, "Full Stack Developer");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_save_always_targets_singleton_row(pool: PgPool) {
        save(&pool, &settings("Jane Doe")).await.unwrap();
        let saved = save(&pool, &settings("Jane Q. Doe")).await.unwrap();
        assert_eq!(saved.id, SINGLETON_ID);

        let (rows, id): (i64, i16) =
            sqlx::query_as("SELECT COUNT(*), MIN(id) FROM site_settings")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!((rows, id), (1, SINGLETON_ID));
        assert_eq!(load(&pool).await.full_name, "Jane Q. Doe");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_second_settings_row_is_rejected(pool: PgPool) {
        let err = sqlx::query("INSERT INTO site_settings (id) VALUES (2)")
            .execute(&pool)
            .await;
        assert!(err.is_err());
    }
}
