use super::parts::ProjectCardView;
use dioxus::prelude::*;
use folio::features::render::view::ProjectCard;

/// Landing page: typewriter headline, quick links, featured projects.
///
/// `frames` is the JSON frame list the page script plays back; the server renders the
/// first phrase in full so the headline reads correctly without scripts.
#[component]
pub(crate) fn HomePage(owner: String, headline: String, frames: String, featured: Vec<ProjectCard>) -> Element {
    rsx! {
        section { class: "hero",
            p { class: "hero-greeting", "Hi, I'm {owner}" }
            h1 { class: "hero-headline",
                span { id: "typewriter", "data-frames": "{frames}", "{headline}" }
                span { class: "cursor", "|" }
            }
            div { class: "hero-actions",
                a { class: "button button--primary", href: "/projects", "View My Work" }
                a { class: "button", href: "/contact", "Contact Me" }
            }
        }
        section { class: "featured",
            h2 { "Featured Projects" }
            if featured.is_empty() {
                p { class: "empty", "No featured projects yet." }
            } else {
                div { class: "project-grid",
                    for card in featured {
                        ProjectCardView { key: "{card.href}", card: card.clone() }
                    }
                }
            }
            a { class: "button", href: "/projects", "All Projects" }
        }
    }
}
