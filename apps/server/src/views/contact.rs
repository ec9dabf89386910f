use super::parts::IconSvg;
use dioxus::prelude::*;
use folio::features::contact::{ContactForm, Notice, NoticeKind};
use folio::features::render::Icon;
use folio::features::render::view::ContactView;

const RECAPTCHA_SCRIPT: &str = "https://www.google.com/recaptcha/api.js";

/// Contact details next to the message form.
///
/// The form posts back to `/contact`; after a failed attempt it is prefilled with what
/// the visitor typed, after a successful one it comes back blank.
#[component]
pub(crate) fn ContactPage(
    view: ContactView,
    form: ContactForm,
    notice: Option<Notice>,
    site_key: Option<String>,
) -> Element {
    let ContactView { title, description, email, phone, location, socials } = view;
    let ContactForm { name, email: reply_to, subject, message, .. } = form;

    rsx! {
        section { class: "contact",
            h1 { "{title}" }
            if let Some(description) = description {
                p { class: "lead", "{description}" }
            }
            div { class: "contact-layout",
                ul { class: "contact-details",
                    li {
                        IconSvg { icon: Icon::Mail, size: 20 }
                        a { href: "mailto:{email}", "{email}" }
                    }
                    if let Some(phone) = phone {
                        li {
                            IconSvg { icon: Icon::Phone, size: 20 }
                            a { href: "tel:{phone}", "{phone}" }
                        }
                    }
                    if let Some(location) = location {
                        li {
                            IconSvg { icon: Icon::MapPin, size: 20 }
                            span { "{location}" }
                        }
                    }
                    for social in socials {
                        li {
                            IconSvg { icon: social.icon, size: 20 }
                            a { href: "{social.url}", target: "_blank", rel: "noopener noreferrer", "{social.platform}" }
                        }
                    }
                }
                form { class: "contact-form", method: "post", action: "/contact",
                    if let Some(notice) = notice {
                        NoticeBanner { notice }
                    }
                    label { "Name"
                        input { r#type: "text", name: "name", value: "{name}", required: true }
                    }
                    label { "Email"
                        input { r#type: "email", name: "email", value: "{reply_to}", required: true }
                    }
                    label { "Subject"
                        input { r#type: "text", name: "subject", value: "{subject}", required: true }
                    }
                    label { "Message"
                        textarea { name: "message", rows: "6", required: true, "{message}" }
                    }
                    if let Some(key) = site_key {
                        div { class: "g-recaptcha", "data-sitekey": "{key}" }
                        script { src: RECAPTCHA_SCRIPT, r#async: true, defer: true }
                    }
                    button { class: "button button--primary", r#type: "submit", "Send Message" }
                }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice) -> Element {
    let class = match notice.kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    };
    rsx! {
        div { class, role: "status",
            strong { "{notice.title}" }
            p { "{notice.description}" }
        }
    }
}
