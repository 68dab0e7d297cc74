use anyhow::{bail, Context, Result};

/// Deployment environment. Production tightens CORS to `ALLOWED_ORIGINS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Dev,
    Prod,
}

/// Credentials and location of the S3 (or MinIO) media bucket.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

#[derive(Debug, Clone)]
pub enum MediaBackend {
    /// Files under `root`, addressed as `url_prefix + key`.
    Local { root: String, url_prefix: String },
    S3(S3Config),
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_token: String,
    pub app_env: AppEnv,
    pub allowed_origins: Vec<String>,
    pub run_migrations: bool,
    pub media: MediaBackend,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let app_env = match optional_env("APP_ENV").as_deref() {
            None | Some("dev") => AppEnv::Dev,
            Some("prod") => AppEnv::Prod,
            Some(other) => bail!("APP_ENV must be 'dev' or 'prod', got '{other}'"),
        };

        let media = match optional_env("MEDIA_BACKEND").as_deref() {
            None | Some("local") => MediaBackend::Local {
                root: optional_env("MEDIA_ROOT").unwrap_or_else(|| "media".to_string()),
                url_prefix: optional_env("MEDIA_URL").unwrap_or_else(|| "/media/".to_string()),
            },
            Some("s3") => MediaBackend::S3(S3Config {
                bucket: require_env("S3_BUCKET")?,
                endpoint: require_env("S3_ENDPOINT")?,
                region: optional_env("S3_REGION").unwrap_or_else(|| "us-east-1".to_string()),
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
            Some(other) => bail!("MEDIA_BACKEND must be 'local' or 's3', got '{other}'"),
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            admin_token: require_env("ADMIN_TOKEN")?,
            app_env,
            allowed_origins: optional_env("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            run_migrations: parse_flag(optional_env("RUN_MIGRATIONS").as_deref(), true)
                .context("RUN_MIGRATIONS must be true or false")?,
            media,
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: Option<&str>, default: bool) -> Result<bool> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins("https://a.dev, ,https://b.dev "),
            vec!["https://a.dev".to_string(), "https://b.dev".to_string()]
        );
    }

    #[test]
    fn test_parse_flag_default_and_values() {
        assert!(parse_flag(None, true).unwrap());
        assert!(!parse_flag(Some("false"), true).unwrap());
        assert!(parse_flag(Some("YES"), false).unwrap());
        assert!(parse_flag(Some("maybe"), false).is_err());
    }
}
