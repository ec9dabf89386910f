//! Contact feature: validates the contact form locally and forwards it to an external
//! form endpoint. Nothing is stored here.

mod error;
pub mod form;
mod service;
mod submit;

pub use crate::error::{ContactError, ContactErrorExt};
pub use crate::form::{Blocked, CAPTCHA_FIELD, ContactForm, Notice, NoticeKind, Submission};
pub use crate::service::{ContactReply, ContactService};
pub use crate::submit::{FormSubmitter, FormspreeSubmitter, resolve_endpoint};
