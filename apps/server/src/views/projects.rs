use super::parts::{ProjectCardView, ProjectLinks, RichText, TagList};
use dioxus::prelude::*;
use folio::features::render::view::{ProjectCard, ProjectDetail};

#[component]
pub(crate) fn ProjectsPage(cards: Vec<ProjectCard>) -> Element {
    rsx! {
        section { class: "projects",
            h1 { "Projects" }
            if cards.is_empty() {
                p { class: "empty", "No projects yet." }
            } else {
                div { class: "project-grid",
                    for card in cards {
                        ProjectCardView { key: "{card.href}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ProjectDetailPage(detail: ProjectDetail) -> Element {
    let ProjectDetail { card, body, gallery, published } = detail;

    rsx! {
        article { class: "project-detail",
            a { class: "back-link", href: "/projects", "Back to Projects" }
            img { class: "project-hero", src: "{card.image.src}", alt: "{card.image.alt}", width: "800", height: "450" }
            header {
                h1 { "{card.title}" }
                span { class: card.status.class, "{card.status.label}" }
                p { class: "published", "{published}" }
            }
            p { class: "lead", "{card.description}" }
            TagList { tags: card.technologies.clone() }
            ProjectLinks { card: card.clone() }
            RichText { blocks: body }
            if !gallery.is_empty() {
                section { class: "gallery",
                    h2 { "Gallery" }
                    div { class: "gallery-grid",
                        for image in gallery {
                            img { src: "{image.src}", alt: "{image.alt}", width: "600", height: "400", "loading": "lazy" }
                        }
                    }
                }
            }
        }
    }
}
