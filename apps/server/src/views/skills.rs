use super::parts::IconSvg;
use dioxus::prelude::*;
use folio::domain::taxonomy::SkillCategory;
use folio::features::render::SkillBoard;
use folio::features::render::skills::SkillTab;

/// Skills board, one section per tab. `only` narrows it to a single category.
#[component]
pub(crate) fn SkillsPage(board: SkillBoard, only: Option<SkillCategory>) -> Element {
    let tabs: Vec<SkillTab> =
        board.tabs.iter().filter(|tab| only.is_none_or(|c| c == tab.category)).cloned().collect();
    let nav = board.tabs.iter().map(|tab| {
        let class = if only == Some(tab.category) { "tab active" } else { "tab" };
        let href = format!("/skills/{}", tab.category);
        rsx! {
            a { class, href: "{href}", "{tab.label}" }
        }
    });

    rsx! {
        section { class: "skills",
            h1 { "Skills" }
            nav { class: "tabs", {nav} }
            for tab in tabs {
                Tab { key: "{tab.category}", tab: tab.clone() }
            }
        }
    }
}

#[component]
fn Tab(tab: SkillTab) -> Element {
    let id = format!("skills-{}", tab.category);
    rsx! {
        section { id: "{id}", class: "skill-tab",
            h2 { "{tab.label}" }
            if tab.cards.is_empty() {
                p { class: "empty", "Nothing here yet." }
            } else {
                div { class: "skill-grid",
                    for card in tab.cards {
                        article { class: "skill-card",
                            header {
                                IconSvg { icon: card.icon, size: 24 }
                                h3 { "{card.title}" }
                            }
                            if let Some(description) = card.description {
                                p { "{description}" }
                            }
                            ul { class: "tag-list",
                                for skill in card.skills {
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
