//! Contact form data and the checks it must pass before anything leaves the server.

use folio_derive::content_model;
use folio_domain::is_valid_email;
use serde::{Deserialize, Serialize};

pub const CAPTCHA_FIELD: &str = "g-recaptcha-response";

/// What the visitor typed, as posted by the page or the JSON API.
#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "g-recaptcha-response", alias = "captchaToken", default)]
    pub captcha_token: Option<String>,
}

/// A form that passed the pre-check, ready to hand to a [`crate::FormSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "g-recaptcha-response")]
    pub captcha_token: String,
}

/// Why the pre-check blocked a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    MissingFields,
    InvalidEmail,
    MissingCaptcha,
}

impl ContactForm {
    /// Required fields, then e-mail syntax, then the CAPTCHA token.
    ///
    /// # Errors
    /// The first check that fails.
    pub fn precheck(&self) -> Result<Submission, Blocked> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(Blocked::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(Blocked::InvalidEmail);
        }
        let Some(token) = self.captcha_token.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return Err(Blocked::MissingCaptcha);
        };

        Ok(Submission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
            captcha_token: token.to_owned(),
        })
    }

    /// Blank form with the CAPTCHA token dropped.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Same fields, CAPTCHA token dropped (tokens are single use).
    pub fn without_token(self) -> Self {
        Self { captcha_token: None, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Toast-style message shown above the form.
#[content_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, description: &str) -> Self {
        Self { kind, title: title.to_owned(), description: description.to_owned() }
    }

    pub fn sent() -> Self {
        Self::new(NoticeKind::Success, "Message sent successfully!", "Thank you for your message. I'll get back to you soon.")
    }

    pub fn send_failed() -> Self {
        Self::new(NoticeKind::Error, "Error", "Failed to send message. Please try again.")
    }

    pub fn unavailable() -> Self {
        Self::new(
            NoticeKind::Error,
            "Contact Form Unavailable",
            "The contact form is not set up right now. Please reach out by email instead.",
        )
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.kind, NoticeKind::Success)
    }
}

impl From<Blocked> for Notice {
    fn from(blocked: Blocked) -> Self {
        match blocked {
            Blocked::MissingFields => {
                Self::new(NoticeKind::Error, "Missing Information", "Please fill in your name, email, subject and message.")
            }
            Blocked::InvalidEmail => {
                Self::new(NoticeKind::Error, "Invalid Email", "Please enter a valid email address.")
            }
            Blocked::MissingCaptcha => {
                Self::new(NoticeKind::Error, "reCAPTCHA Required", "Please complete the reCAPTCHA verification.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Let's build something.".into(),
            captcha_token: Some("token".into()),
        }
    }

    #[test]
    fn complete_form_passes() {
        let submission = filled().precheck().unwrap();
        assert_eq!(submission.captcha_token, "token");
        assert_eq!(submission.email, "ada@example.com");
    }

    #[test]
    fn checks_run_in_order() {
        let blank_and_bad = ContactForm { subject: String::new(), email: "nope".into(), captcha_token: None, ..filled() };
        assert_eq!(blank_and_bad.precheck(), Err(Blocked::MissingFields));

        let bad_email = ContactForm { email: "nope".into(), captcha_token: None, ..filled() };
        assert_eq!(bad_email.precheck(), Err(Blocked::InvalidEmail));

        let no_captcha = ContactForm { captcha_token: Some("  ".into()), ..filled() };
        assert_eq!(no_captcha.precheck(), Err(Blocked::MissingCaptcha));
    }

    #[test]
    fn captcha_notice_text() {
        let notice = Notice::from(Blocked::MissingCaptcha);
        assert_eq!(notice.title, "reCAPTCHA Required");
        assert_eq!(notice.description, "Please complete the reCAPTCHA verification.");
        assert!(!notice.is_success());
    }

    #[test]
    fn token_field_uses_widget_name() {
        let form: ContactForm =
            serde_json::from_str(r#"{"name":"A","email":"a@b.co","g-recaptcha-response":"t"}"#).unwrap();
        assert_eq!(form.captcha_token.as_deref(), Some("t"));
        assert!(form.subject.is_empty());

        let api: ContactForm = serde_json::from_str(r#"{"captchaToken":"t2"}"#).unwrap();
        assert_eq!(api.captcha_token.as_deref(), Some("t2"));
    }
}
