use crate::error::{ContactError, ContactErrorExt};
use crate::form::Submission;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::fmt::Debug;
use tracing::debug;
use url::Url;

/// Delivers a pre-checked submission to a form endpoint. One attempt, no retries.
#[async_trait]
pub trait FormSubmitter: Send + Sync + Debug {
    async fn submit(&self, endpoint: &Url, submission: &Submission) -> Result<(), ContactError>;
}

/// Picks the form endpoint: configuration first, then the contact document.
///
/// A value that is already an absolute URL is used as-is; anything else is treated as a
/// form id under `submit_base`.
///
/// # Errors
/// [`ContactError::NotConfigured`] when neither source names an endpoint,
/// [`ContactError::Endpoint`] when the result is not a valid URL.
pub fn resolve_endpoint(
    configured: Option<&str>,
    from_content: Option<&str>,
    submit_base: &str,
) -> Result<Url, ContactError> {
    let raw = [configured, from_content]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .ok_or(ContactError::NotConfigured { context: None })?;

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Url::parse(raw).context(raw.to_owned());
    }

    let joined = format!("{}/{}", submit_base.trim_end_matches('/'), raw.trim_start_matches('/'));
    Url::parse(&joined).context(joined)
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<RejectionItem>,
}

#[derive(Debug, Deserialize)]
struct RejectionItem {
    message: String,
}

/// Posts JSON to a Formspree-style endpoint (`POST /f/<id>`, `Accept: application/json`).
#[derive(Debug, Clone, Default)]
pub struct FormspreeSubmitter {
    http: Client,
}

impl FormspreeSubmitter {
    pub const fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl FormSubmitter for FormspreeSubmitter {
    async fn submit(&self, endpoint: &Url, submission: &Submission) -> Result<(), ContactError> {
        debug!(endpoint = %endpoint, "Submitting contact form");

        let response = self
            .http
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .context(endpoint.to_string())?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<RejectionBody>(&body) {
            Ok(RejectionBody { errors, .. }) if !errors.is_empty() => {
                errors.into_iter().map(|e| e.message).collect::<Vec<_>>().join("; ")
            }
            Ok(RejectionBody { error: Some(error), .. }) => error,
            _ => body,
        };

        Err(ContactError::Rejected { status: status.as_u16(), message, context: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://formspree.io/f";

    #[test]
    fn configuration_wins_over_content() {
        let url = resolve_endpoint(Some("cfg123"), Some("doc456"), BASE).unwrap();
        assert_eq!(url.as_str(), "https://formspree.io/f/cfg123");
    }

    #[test]
    fn blank_configuration_defers_to_content() {
        let url = resolve_endpoint(Some("  "), Some("https://forms.example/in"), BASE).unwrap();
        assert_eq!(url.as_str(), "https://forms.example/in");
    }

    #[test]
    fn nothing_configured() {
        let err = resolve_endpoint(None, None, BASE).unwrap_err();
        assert!(matches!(err, ContactError::NotConfigured { .. }));
    }
}
