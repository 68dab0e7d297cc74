use std::net::SocketAddr;

use axum::extract::FromRequest;
use axum::http::HeaderMap;
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// `Json` body extractor whose rejections use the `AppError` error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Accumulates field-level validation failures so a form reports every
/// problem at once instead of stopping at the first.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn required(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required.");
        }
    }

    pub fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        let len = value.chars().count();
        if len > max {
            self.add(
                field,
                format!("Ensure this value has at most {max} characters (it has {len})."),
            );
        }
    }

    /// Required and bounded: the common case for short text columns.
    pub fn text(&mut self, field: &'static str, value: &str, max: usize) {
        self.required(field, value);
        self.max_len(field, value, max);
    }

    pub fn email(&mut self, field: &'static str, value: &str) {
        if !is_valid_email(value) {
            self.add(field, "Enter a valid email address.");
        }
    }

    pub fn url(&mut self, field: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            if !is_valid_url(v) {
                self.add(field, "Enter a valid URL.");
            }
        }
    }

    pub fn range(&mut self, field: &'static str, value: i32, min: i32, max: i32) {
        if value < min || value > max {
            self.add(field, format!("Ensure this value is between {min} and {max}."));
        }
    }

    pub fn non_negative(&mut self, field: &'static str, value: i32) {
        if value < 0 {
            self.add(field, "Ensure this value is greater than or equal to 0.");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing failed, otherwise a `Validation` error listing
    /// every `field: message` pair.
    pub fn finish(self) -> Result<(), AppError> {
        self.finish_with("")
    }

    /// Like [`finish`](Self::finish) with a leading summary sentence.
    pub fn finish_with(self, summary: &str) -> Result<(), AppError> {
        if self.is_empty() {
            return Ok(());
        }
        let details = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ");
        let message = if summary.is_empty() {
            details
        } else {
            format!("{summary} {details}")
        };
        Err(AppError::Validation(message))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

pub fn is_valid_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            !host.is_empty() && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Serde helper: `""` and whitespace-only strings deserialize as `None`.
pub fn blank_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Client address: first `X-Forwarded-For` hop, else the socket peer.
pub fn client_ip(headers: &HeaderMap, remote: Option<SocketAddr>) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| remote.map(|addr| addr.ip().to_string()))
}

pub fn header_str(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Splits a comma-separated column into trimmed, non-empty items.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+tag@mail.example.org"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane example@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://github.com/jane"));
        assert!(is_valid_url("http://example.com"));
        assert!(!is_valid_url("github.com/jane"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("ftp://example.com"));
    }

    #[test]
    fn test_field_errors_lists_every_failure() {
        let mut errors = FieldErrors::new();
        errors.text("name", "", 200);
        errors.email("email", "nope");
        errors.range("rating", 9, 1, 5);
        match errors.finish() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("name: This field is required."));
                assert!(msg.contains("email: Enter a valid email address."));
                assert!(msg.contains("rating:"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_field_errors_summary_prefix() {
        let mut errors = FieldErrors::new();
        errors.required("subject", " ");
        let err = errors.finish_with("Please check the form and try again.");
        match err {
            Err(AppError::Validation(msg)) => {
                assert!(msg.starts_with("Please check the form and try again. subject:"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_max_len_counts_chars_not_bytes() {
        let mut errors = FieldErrors::new();
        errors.max_len("name", "éééé", 4);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        let remote: SocketAddr = "192.0.2.1:5555".parse().unwrap();
        assert_eq!(
            client_ip(&headers, Some(remote)).as_deref(),
            Some("203.0.113.7")
        );
    }

    #[test]
    fn test_client_ip_falls_back_to_peer() {
        let remote: SocketAddr = "192.0.2.1:5555".parse().unwrap();
        assert_eq!(
            client_ip(&HeaderMap::new(), Some(remote)).as_deref(),
            Some("192.0.2.1")
        );
        assert_eq!(client_ip(&HeaderMap::new(), None), None);
    }

    #[test]
    fn test_split_csv() {
        assert_eq!(
            split_csv(" Rust, Axum ,, Postgres ,"),
            vec!["Rust", "Axum", "Postgres"]
        );
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn test_blank_to_none() {
        #[derive(Deserialize)]
        struct Form {
            #[serde(default, deserialize_with = "blank_to_none")]
            url: Option<String>,
        }
        let f: Form = serde_json::from_str(r#"{"url": "  "}"#).unwrap();
        assert_eq!(f.url, None);
        let f: Form = serde_json::from_str(r#"{"url": " https://x.dev "}"#).unwrap();
        assert_eq!(f.url.as_deref(), Some("https://x.dev"));
        let f: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(f.url, None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
    }
}
