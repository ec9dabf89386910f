//! HTML routes.
//!
//! List and profile pages stream: the shell and skeleton go out first and the settled
//! content follows through [`stream_page`]. Pages whose status or title depend on the
//! content (project detail) and form posts resolve through [`visit`] before rendering.
//! Either way a visitor gets one complete set of content (store or bundled).

use crate::error::ServerError;
use crate::views::{
    AboutPage, ContactPage, HomePage, Nav, NotFound, ProjectDetailPage, ProjectsPage, Shell, SkeletonKind,
    SkillsPage, document, page_state,
};
use crate::visit::{stream_page, visit};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use dioxus::prelude::*;
use folio::domain::config::SiteConfig;
use folio::domain::content::{Contact, Project};
use folio::domain::taxonomy::SkillCategory;
use folio::features::contact::{ContactForm, ContactService, Notice};
use folio::features::content::{ContentClient, Resolved, fallback};
use folio::features::render::view::ProjectDetail;
use folio::features::render::{AboutView, ContactView, ProjectCard, SanityImageUrls, SkillBoard, Typewriter};
use folio::kernel::server::SiteState;
use tracing::debug;

pub(crate) fn router() -> Router<SiteState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/skills", get(skills))
        .route("/skills/{category}", get(skills_in))
        .route("/projects", get(projects))
        .route("/projects/{slug}", get(project))
        .route("/contact", get(contact).post(send_message))
}

fn featured_fallback() -> Vec<Project> {
    fallback::projects().iter().filter(|p| p.featured).cloned().collect()
}

async fn home(State(state): State<SiteState>) -> Result<Response, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?.clone();
    let images = state.try_get_slice::<SanityImageUrls>()?.clone();

    let site = &state.config.site;
    let owner = site.owner.clone();
    let typewriter = Typewriter::new(&site.headline_phrases);
    let headline = typewriter.headline();
    let frames = serde_json::to_string(&typewriter.cycle()).map_err(|e| format!("Encoding headline frames: {e}"))?;

    Ok(stream_page(
        Shell::new(&state.config, Nav::Home, None),
        "home",
        SkeletonKind::Grid,
        async move { content.featured_projects().await },
        featured_fallback,
        move |resolved: &Resolved<Vec<Project>>| {
            let cards: Vec<_> = resolved.content.iter().map(|p| ProjectCard::build(p, &images)).collect();
            rsx! {
                HomePage { owner, headline, frames, featured: cards }
            }
        },
    ))
}

async fn about(State(state): State<SiteState>) -> Result<Response, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?.clone();
    let images = state.try_get_slice::<SanityImageUrls>()?.clone();
    let default_resume = state.config.site.resume_path.clone();

    Ok(stream_page(
        Shell::new(&state.config, Nav::About, Some("About")),
        "about",
        SkeletonKind::Profile,
        async move { content.about().await },
        || fallback::about().clone(),
        move |resolved| {
            let view = AboutView::build(&resolved.content, &images, default_resume.as_deref());
            rsx! { AboutPage { view } }
        },
    ))
}

async fn skills(State(state): State<SiteState>) -> Result<Response, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?.clone();

    Ok(stream_page(
        Shell::new(&state.config, Nav::Skills, Some("Skills")),
        "skills",
        SkeletonKind::Board,
        async move { content.skills().await },
        || fallback::skills().to_vec(),
        |resolved| rsx! { SkillsPage { board: SkillBoard::new(&resolved.content), only: None } },
    ))
}

async fn skills_in(State(state): State<SiteState>, Path(category): Path<String>) -> Result<Response, ServerError> {
    let Ok(category) = category.parse::<SkillCategory>() else {
        debug!(category = %category, "Unknown skill category");
        return Ok(not_found(
            &state.config,
            Nav::Skills,
            "Category Not Found",
            "There is no skill category with that name.",
            ("/skills", "Back to Skills"),
        ));
    };

    let content = state.try_get_slice::<ContentClient>()?.clone();

    Ok(stream_page(
        Shell::new(&state.config, Nav::Skills, Some("Skills")),
        "skills",
        SkeletonKind::Board,
        async move { content.skills_by_category(category).await },
        move || fallback::skills_in(category),
        move |resolved| rsx! { SkillsPage { board: SkillBoard::new(&resolved.content), only: Some(category) } },
    ))
}

async fn projects(State(state): State<SiteState>) -> Result<Response, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?.clone();
    let images = state.try_get_slice::<SanityImageUrls>()?.clone();

    Ok(stream_page(
        Shell::new(&state.config, Nav::Projects, Some("Projects")),
        "projects",
        SkeletonKind::Grid,
        async move { content.projects().await },
        || fallback::projects().to_vec(),
        move |resolved: &Resolved<Vec<Project>>| {
            let cards: Vec<_> = resolved.content.iter().map(|p| ProjectCard::build(p, &images)).collect();
            rsx! { ProjectsPage { cards } }
        },
    ))
}

async fn project(State(state): State<SiteState>, Path(slug): Path<String>) -> Result<Response, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    let images = state.try_get_slice::<SanityImageUrls>()?;
    let loaded = visit("project", content.project(&slug), || fallback::project(&slug).cloned()).await;

    let Some(title) = loaded.resolved().and_then(|r| r.content.as_ref()).map(|p| p.title.clone()) else {
        debug!(slug = %slug, "No project with this slug");
        return Ok(not_found(
            &state.config,
            Nav::Projects,
            "Project Not Found",
            "The project you're looking for doesn't exist or has been removed.",
            ("/projects", "Back to Projects"),
        ));
    };

    let body = page_state(&loaded, SkeletonKind::Detail, |resolved| match &resolved.content {
        Some(project) => rsx! { ProjectDetailPage { detail: ProjectDetail::build(project, images) } },
        None => rsx! {},
    });
    Ok(Html(document(&state.config, Nav::Projects, Some(&title), body)).into_response())
}

async fn contact(State(state): State<SiteState>) -> Result<Response, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?.clone();
    let service = state.try_get_slice::<ContactService>()?.clone();

    Ok(stream_page(
        Shell::new(&state.config, Nav::Contact, Some("Contact")),
        "contact",
        SkeletonKind::Contact,
        async move { content.contact().await },
        || fallback::contact().clone(),
        move |resolved| contact_body(resolved, &service, ContactForm::default(), None),
    ))
}

/// Form post from the contact page; the page comes back with the outcome notice.
async fn send_message(
    State(state): State<SiteState>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    let service = state.try_get_slice::<ContactService>()?;
    let contact = visit("contact", content.contact(), || fallback::contact().clone()).await;

    let endpoint = contact.resolved().and_then(|r| r.content.form_endpoint.clone());
    let reply = service.send(form, endpoint.as_deref()).await;

    let body = page_state(&contact, SkeletonKind::Contact, |resolved| {
        contact_body(resolved, service, reply.form, Some(reply.notice))
    });
    Ok(Html(document(&state.config, Nav::Contact, Some("Contact"), body)))
}

fn contact_body(
    resolved: &Resolved<Contact>,
    service: &ContactService,
    form: ContactForm,
    notice: Option<Notice>,
) -> Element {
    let site_key = service.site_key(resolved.content.recaptcha_site_key.as_deref()).map(str::to_owned);
    rsx! {
        ContactPage { view: ContactView::from(&resolved.content), form, notice, site_key }
    }
}

fn not_found(config: &SiteConfig, nav: Nav, title: &str, message: &str, back: (&str, &str)) -> Response {
    let (back_href, back_label) = back;
    let body = rsx! {
        NotFound {
            title: title.to_owned(),
            message: message.to_owned(),
            back_href: back_href.to_owned(),
            back_label: back_label.to_owned(),
        }
    };
    (StatusCode::NOT_FOUND, Html(document(config, nav, Some(title), body))).into_response()
}
