use crate::form::{ContactForm, Notice};
use crate::submit::{FormSubmitter, FormspreeSubmitter, resolve_endpoint};
use folio_derive::content_model;
use folio_domain::config::ContactConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// What the page shows after a submit attempt.
#[content_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ContactReply {
    pub sent: bool,
    pub notice: Notice,
    /// Cleared after a successful send, otherwise what the visitor entered.
    pub form: ContactForm,
}

/// Runs the pre-check and hands valid submissions to the form endpoint.
#[derive(Debug, Clone)]
pub struct ContactService {
    submitter: Arc<dyn FormSubmitter>,
    config: ContactConfig,
}

impl ContactService {
    pub fn new(submitter: impl FormSubmitter + 'static, config: ContactConfig) -> Self {
        Self { submitter: Arc::new(submitter), config }
    }

    pub fn formspree(config: ContactConfig) -> Self {
        Self::new(FormspreeSubmitter::default(), config)
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// CAPTCHA site key: configuration first, then the contact document.
    pub fn site_key<'a>(&'a self, from_content: Option<&'a str>) -> Option<&'a str> {
        self.config.recaptcha_site_key.as_deref().into_iter().chain(from_content).find(|k| !k.trim().is_empty())
    }

    /// Blocked forms never reach the network; failures keep the visitor's input.
    pub async fn send(&self, form: ContactForm, endpoint_from_content: Option<&str>) -> ContactReply {
        let submission = match form.precheck() {
            Ok(submission) => submission,
            Err(blocked) => {
                info!(reason = ?blocked, "Contact form blocked by pre-check");
                return ContactReply { sent: false, notice: blocked.into(), form: form.without_token() };
            }
        };

        let endpoint = match resolve_endpoint(
            self.config.form_endpoint.as_deref(),
            endpoint_from_content,
            &self.config.submit_base_url,
        ) {
            Ok(endpoint) => endpoint,
            Err(e) => {
                warn!(error = %e, "No usable contact form endpoint");
                return ContactReply { sent: false, notice: Notice::unavailable(), form: form.without_token() };
            }
        };

        match self.submitter.submit(&endpoint, &submission).await {
            Ok(()) => {
                info!("Contact form delivered");
                ContactReply { sent: true, notice: Notice::sent(), form: ContactForm::cleared() }
            }
            Err(e) => {
                warn!(error = %e, "Contact form delivery failed");
                ContactReply { sent: false, notice: Notice::send_failed(), form: form.without_token() }
            }
        }
    }
}
