//! JSON API: every piece of page content as the loader resolves it, plus the contact form.

use crate::error::ServerError;
use crate::visit::visit;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio::domain::content::{About, Contact, Project, SkillGroup, Tag};
use folio::domain::taxonomy::SkillCategory;
use folio::features::contact::{ContactForm, ContactReply, ContactService};
use folio::features::content::{ContentClient, LoadState, Origin, Resolved, fallback};
use folio::kernel::server::SiteState;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub(crate) const CONTENT_TAG: &str = "content";
pub(crate) const CONTACT_TAG: &str = "contact";

/// Whether content came from the store or the bundled copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ContentOrigin {
    Store,
    Fallback,
}

impl From<Origin> for ContentOrigin {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::Store => Self::Store,
            Origin::Fallback => Self::Fallback,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct Served<T> {
    origin: ContentOrigin,
    content: T,
}

impl<T> From<Resolved<T>> for Served<T> {
    fn from(resolved: Resolved<T>) -> Self {
        Self { origin: resolved.origin.into(), content: resolved.content }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ApiMessage {
    message: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct SkillsFilter {
    /// Only groups filed under this tab
    category: Option<SkillCategory>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct ProjectsFilter {
    /// Only projects marked as featured
    #[serde(default)]
    featured: bool,
}

pub(crate) fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new()
        .routes(routes!(about))
        .routes(routes!(contact))
        .routes(routes!(skills))
        .routes(routes!(projects))
        .routes(routes!(project))
        .routes(routes!(tags))
        .routes(routes!(send_message))
}

fn served<T>(loaded: LoadState<T>) -> Result<Json<Served<T>>, ServerError> {
    match loaded {
        LoadState::Ready(resolved) => Ok(Json(resolved.into())),
        LoadState::Idle | LoadState::Loading => Err("Content never settled".into()),
    }
}

#[utoipa::path(
    get,
    path = "/api/content/about",
    responses((status = OK, description = "About document", body = Served<About>)),
    tag = CONTENT_TAG,
)]
async fn about(State(state): State<SiteState>) -> Result<Json<Served<About>>, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    served(visit("about", content.about(), || fallback::about().clone()).await)
}

#[utoipa::path(
    get,
    path = "/api/content/contact",
    responses((status = OK, description = "Contact document", body = Served<Contact>)),
    tag = CONTENT_TAG,
)]
async fn contact(State(state): State<SiteState>) -> Result<Json<Served<Contact>>, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    served(visit("contact", content.contact(), || fallback::contact().clone()).await)
}

#[utoipa::path(
    get,
    path = "/api/content/skills",
    params(SkillsFilter),
    responses((status = OK, description = "Skill groups in display order", body = Served<Vec<SkillGroup>>)),
    tag = CONTENT_TAG,
)]
async fn skills(
    State(state): State<SiteState>,
    Query(filter): Query<SkillsFilter>,
) -> Result<Json<Served<Vec<SkillGroup>>>, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    let loaded = match filter.category {
        Some(category) => {
            visit("skills", content.skills_by_category(category), || fallback::skills_in(category)).await
        }
        None => visit("skills", content.skills(), || fallback::skills().to_vec()).await,
    };
    served(loaded)
}

#[utoipa::path(
    get,
    path = "/api/content/projects",
    params(ProjectsFilter),
    responses((status = OK, description = "Projects in display order", body = Served<Vec<Project>>)),
    tag = CONTENT_TAG,
)]
async fn projects(
    State(state): State<SiteState>,
    Query(filter): Query<ProjectsFilter>,
) -> Result<Json<Served<Vec<Project>>>, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    let loaded = if filter.featured {
        visit("home", content.featured_projects(), || {
            fallback::projects().iter().filter(|p| p.featured).cloned().collect::<Vec<_>>()
        })
        .await
    } else {
        visit("projects", content.projects(), || fallback::projects().to_vec()).await
    };
    served(loaded)
}

#[utoipa::path(
    get,
    path = "/api/content/projects/{slug}",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = OK, description = "Full project", body = Served<Project>),
        (status = NOT_FOUND, description = "No project with this slug", body = ApiMessage),
    ),
    tag = CONTENT_TAG,
)]
async fn project(State(state): State<SiteState>, Path(slug): Path<String>) -> Result<Response, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    let loaded = visit("project", content.project(&slug), || fallback::project(&slug).cloned()).await;

    Ok(match loaded {
        LoadState::Ready(Resolved { content: Some(project), origin }) => {
            Json(Served { origin: origin.into(), content: project }).into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(ApiMessage { message: format!("No project with slug '{slug}'") }))
            .into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/api/content/tags",
    responses((status = OK, description = "Technology tags by name", body = Served<Vec<Tag>>)),
    tag = CONTENT_TAG,
)]
async fn tags(State(state): State<SiteState>) -> Result<Json<Served<Vec<Tag>>>, ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    served(visit("tags", content.tags(), || fallback::tags().to_vec()).await)
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactForm,
    responses(
        (status = OK, description = "Message delivered", body = ContactReply),
        (status = UNPROCESSABLE_ENTITY, description = "Blocked by the pre-check or not delivered", body = ContactReply),
    ),
    tag = CONTACT_TAG,
)]
async fn send_message(
    State(state): State<SiteState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactReply>), ServerError> {
    let content = state.try_get_slice::<ContentClient>()?;
    let service = state.try_get_slice::<ContactService>()?;
    let contact = visit("contact", content.contact(), || fallback::contact().clone()).await;

    let endpoint = contact.resolved().and_then(|r| r.content.form_endpoint.clone());
    let reply = service.send(form, endpoint.as_deref()).await;
    let status = if reply.sent { StatusCode::OK } else { StatusCode::UNPROCESSABLE_ENTITY };
    Ok((status, Json(reply)))
}
