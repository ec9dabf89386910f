use dioxus::prelude::*;
use folio::features::render::Icon;
use folio::features::render::rich_text::{StyledSpan, TextBlock, TextKind};
use folio::features::render::view::{ProjectCard, TagChip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkeletonKind {
    /// Project grid: six pulsing cards.
    Grid,
    Profile,
    Board,
    Detail,
    Contact,
}

/// Placeholder shown until page content is ready.
#[component]
pub(crate) fn Skeleton(kind: SkeletonKind) -> Element {
    let boxes = match kind {
        SkeletonKind::Grid => 6,
        SkeletonKind::Board => 3,
        SkeletonKind::Profile | SkeletonKind::Detail | SkeletonKind::Contact => 1,
    };

    rsx! {
        div { class: "skeleton", aria_busy: "true",
            div { class: "skeleton-line skeleton-title pulse" }
            div { class: "skeleton-line pulse" }
            div { class: "skeleton-grid",
                for i in 0..boxes {
                    div { key: "{i}", class: "skeleton-box pulse" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn IconSvg(icon: Icon, size: u16) -> Element {
    let svg = icon.svg(size);
    rsx! {
        span { class: "icon", dangerous_inner_html: "{svg}" }
    }
}

#[component]
pub(crate) fn TagList(tags: Vec<TagChip>) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul { class: "tag-list",
            for tag in tags {
                li { class: tag.class, "{tag.name}" }
            }
        }
    }
}

#[component]
pub(crate) fn RichText(blocks: Vec<TextBlock>) -> Element {
    rsx! {
        div { class: "rich-text",
            for block in blocks {
                {text_block(&block)}
            }
        }
    }
}

fn text_block(block: &TextBlock) -> Element {
    let spans = block.spans.iter().map(styled_span);
    match block.kind {
        TextKind::Heading(1 | 2) => rsx! { h2 { {spans} } },
        TextKind::Heading(3) => rsx! { h3 { {spans} } },
        TextKind::Heading(_) => rsx! { h4 { {spans} } },
        TextKind::Quote => rsx! { blockquote { {spans} } },
        TextKind::Bullet => rsx! { ul { li { {spans} } } },
        TextKind::Numbered => rsx! { ol { li { {spans} } } },
        TextKind::Paragraph => rsx! { p { {spans} } },
    }
}

fn styled_span(span: &StyledSpan) -> Element {
    let text = span.text.clone();
    let mut node = if span.code { rsx! { code { "{text}" } } } else { rsx! { "{text}" } };
    if span.em {
        node = rsx! { em { {node} } };
    }
    if span.strong {
        node = rsx! { strong { {node} } };
    }
    node
}

/// Card on the home page and the project grid.
#[component]
pub(crate) fn ProjectCardView(card: ProjectCard) -> Element {
    rsx! {
        article { class: "project-card",
            a { href: "{card.href}",
                img { class: "project-image", src: "{card.image.src}", alt: "{card.image.alt}", width: "600", height: "300" }
            }
            div { class: "project-body",
                div { class: "project-heading",
                    h3 { a { href: "{card.href}", "{card.title}" } }
                    span { class: card.status.class, "{card.status.label}" }
                }
                p { class: "project-description", "{card.description}" }
                TagList { tags: card.technologies.clone() }
                ProjectLinks { card: card.clone() }
            }
        }
    }
}

#[component]
pub(crate) fn ProjectLinks(card: ProjectCard) -> Element {
    rsx! {
        div { class: "project-links",
            for link in card.links {
                a { class: "button", href: "{link.url}", target: "_blank", rel: "noopener noreferrer", "{link.label}" }
            }
        }
    }
}

#[component]
pub(crate) fn NotFound(title: String, message: String, back_href: String, back_label: String) -> Element {
    rsx! {
        section { class: "not-found",
            h1 { "{title}" }
            p { "{message}" }
            a { class: "button", href: "{back_href}", "{back_label}" }
        }
    }
}
