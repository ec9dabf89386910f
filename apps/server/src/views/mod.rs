//! Server-rendered pages (Dioxus SSR).
//!
//! Components take display structures from the render pipeline and never touch content
//! documents directly.

mod about;
mod contact;
mod home;
mod parts;
mod projects;
mod skills;

pub(crate) use about::AboutPage;
pub(crate) use contact::ContactPage;
pub(crate) use home::HomePage;
pub(crate) use parts::{NotFound, Skeleton, SkeletonKind};
pub(crate) use projects::{ProjectDetailPage, ProjectsPage};
pub(crate) use skills::SkillsPage;

use dioxus::prelude::*;
use folio::domain::config::SiteConfig;
use folio::features::content::{LoadState, Resolved};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nav {
    Home,
    About,
    Skills,
    Projects,
    Contact,
    None,
}

const NAV_ITEMS: [(Nav, &str, &str); 5] = [
    (Nav::Home, "/", "Home"),
    (Nav::About, "/about", "About"),
    (Nav::Skills, "/skills", "Skills"),
    (Nav::Projects, "/projects", "Projects"),
    (Nav::Contact, "/contact", "Contact"),
];

/// Ready content goes through `ready`; anything still pending renders the skeleton.
pub(crate) fn page_state<T>(
    state: &LoadState<T>,
    skeleton: SkeletonKind,
    ready: impl FnOnce(&Resolved<T>) -> Element,
) -> Element {
    match state.resolved() {
        Some(resolved) => ready(resolved),
        None => rsx! { Skeleton { kind: skeleton } },
    }
}

/// Stands in for the page body while the shell is rendered, then splits it in two.
const BODY_SLOT: &str = "@@folio-page-body@@";

/// The document around a page body, pre-rendered as the markup before and after it.
///
/// Streamed pages send [`Shell::head`] with the skeleton first and [`Shell::tail`] once the
/// content has settled.
#[derive(Debug, Clone)]
pub(crate) struct Shell {
    head: String,
    tail: String,
}

impl Shell {
    pub(crate) fn new(config: &SiteConfig, nav: Nav, page_title: Option<&str>) -> Self {
        let site = &config.site;
        let title = page_title.map_or_else(|| site.title.clone(), |page| format!("{page} | {}", site.title));
        let description = site.description.clone();
        let owner = site.owner.clone();

        let html = dioxus_ssr::render_element(rsx! {
            html { lang: "en",
                head {
                    meta { charset: "utf-8" }
                    meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                    meta { name: "description", content: "{description}" }
                    title { "{title}" }
                    link { rel: "stylesheet", href: "/site.css" }
                }
                body {
                    Header { owner: owner.clone(), active: nav }
                    main { class: "page", "{BODY_SLOT}" }
                    Footer { owner }
                    script { src: "/site.js", defer: true }
                }
            }
        });

        let (head, tail) = html.split_once(BODY_SLOT).unwrap_or((html.as_str(), ""));
        Self { head: format!("<!DOCTYPE html>{head}"), tail: tail.to_owned() }
    }

    pub(crate) fn head(&self) -> &str {
        &self.head
    }

    pub(crate) fn tail(&self) -> &str {
        &self.tail
    }

    pub(crate) fn wrap(&self, body: Element) -> String {
        format!("{}{}{}", self.head, dioxus_ssr::render_element(body), self.tail)
    }
}

/// Wraps a rendered body in the document shell.
pub(crate) fn document(config: &SiteConfig, nav: Nav, page_title: Option<&str>, body: Element) -> String {
    Shell::new(config, nav, page_title).wrap(body)
}

#[component]
fn Header(owner: String, active: Nav) -> Element {
    let links = NAV_ITEMS.iter().map(|&(item, href, label)| {
        let class = if item == active { "nav-link active" } else { "nav-link" };
        rsx! {
            a { class, href, "{label}" }
        }
    });

    rsx! {
        header { class: "site-header",
            a { class: "brand", href: "/", "{owner}" }
            nav { class: "site-nav", {links} }
        }
    }
}

#[component]
fn Footer(owner: String) -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "© {owner}. All rights reserved." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::features::content::Origin;

    #[test]
    fn pending_state_renders_the_skeleton() {
        let pending: LoadState<u8> = LoadState::Loading;
        let html = dioxus_ssr::render_element(page_state(&pending, SkeletonKind::Grid, |_| rsx! { p { "ready" } }));
        assert!(html.contains("skeleton"));
        assert!(!html.contains("ready"));

        let idle: LoadState<u8> = LoadState::Idle;
        let html = dioxus_ssr::render_element(page_state(&idle, SkeletonKind::Profile, |_| rsx! { p { "ready" } }));
        assert!(html.contains("skeleton"));
    }

    #[test]
    fn ready_state_renders_content() {
        let ready = LoadState::Ready(Resolved { content: 7_u8, origin: Origin::Store });
        let html =
            dioxus_ssr::render_element(page_state(&ready, SkeletonKind::Grid, |r| rsx! { p { "value {r.content}" } }));
        assert!(html.contains("value 7"));
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn shell_escapes_and_titles_pages() {
        let mut config = SiteConfig::default();
        config.site.owner = "Ada <Lovelace>".into();
        let html = document(&config, Nav::About, Some("About"), rsx! { p { "body" } });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("About | Aman Kushwaha ~ Portfolio"));
        assert!(html.contains("Ada &lt;Lovelace&gt;"));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains(r#"href="/about""#));
    }

    #[test]
    fn shell_splits_around_the_page_body() {
        let shell = Shell::new(&SiteConfig::default(), Nav::Home, None);

        assert!(shell.head().starts_with("<!DOCTYPE html>"));
        assert!(shell.head().contains(r#"class="page""#));
        assert!(shell.tail().starts_with("</main>"));
        assert!(shell.tail().ends_with("</html>"));
        assert!(!shell.wrap(rsx! { p { "body" } }).contains(BODY_SLOT));
    }
}
