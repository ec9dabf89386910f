use super::parts::{IconSvg, RichText};
use dioxus::prelude::*;
use folio::features::render::view::{AboutView, TimelineEntry};

#[component]
pub(crate) fn AboutPage(view: AboutView) -> Element {
    let AboutView { title, bio, profile, experiences, education, interests, resume_url } = view;

    rsx! {
        section { class: "about",
            div { class: "about-intro",
                img { class: "profile-image", src: "{profile.src}", alt: "{profile.alt}", width: "400", height: "400" }
                div {
                    h1 { "{title}" }
                    RichText { blocks: bio }
                    if let Some(url) = resume_url {
                        a { class: "button button--primary", href: "{url}", download: true, "Download Resume" }
                    }
                }
            }
            Timeline { heading: "Experience".to_owned(), entries: experiences }
            Timeline { heading: "Education".to_owned(), entries: education }
            if !interests.is_empty() {
                section { class: "interests",
                    h2 { "Interests" }
                    ul {
                        for interest in interests {
                            li { class: "interest",
                                IconSvg { icon: interest.icon, size: 20 }
                                span { "{interest.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Timeline(heading: String, entries: Vec<TimelineEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "timeline",
            h2 { "{heading}" }
            ol {
                for entry in entries {
                    li { class: "timeline-entry",
                        h3 { "{entry.title}" }
                        p { class: "timeline-meta",
                            span { "{entry.organisation}" }
                            span { class: "period", "{entry.period}" }
                        }
                        if let Some(description) = entry.description {
                            p { "{description}" }
                        }
                        if !entry.skills.is_empty() {
                            ul { class: "tag-list",
                                for skill in entry.skills {
                                    li { class: "tag", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
