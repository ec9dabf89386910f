use crate::error::{ContentError, ContentErrorExt};
use crate::query::ContentQuery;
use crate::sanity::SanityClient;
use crate::source::{ContentSource, OfflineSource};
use folio_domain::config::ContentConfig;
use folio_domain::content::{About, Contact, Project, SkillGroup, Tag};
use folio_domain::taxonomy::SkillCategory;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Typed access to the content store.
///
/// Cheap to clone; all clones share one source.
#[derive(Debug, Clone)]
pub struct ContentClient {
    source: Arc<dyn ContentSource>,
}

impl ContentClient {
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self { source: Arc::new(source) }
    }

    /// Picks the live store when `[content]` is active, the offline source otherwise.
    ///
    /// A config that cannot produce a valid endpoint is logged and treated as offline.
    pub fn from_config(config: &ContentConfig) -> Self {
        if !config.is_active() {
            info!("Content store disabled, serving bundled content");
            return Self::new(OfflineSource);
        }

        match SanityClient::from_config(config) {
            Ok(client) => {
                info!(endpoint = %client.endpoint(), "Content store enabled");
                Self::new(client)
            }
            Err(e) => {
                warn!(error = %e, "Content store misconfigured, serving bundled content");
                Self::new(OfflineSource)
            }
        }
    }

    pub async fn about(&self) -> Result<Option<About>, ContentError> {
        self.one(ContentQuery::About).await
    }

    pub async fn contact(&self) -> Result<Option<Contact>, ContentError> {
        self.one(ContentQuery::Contact).await
    }

    pub async fn skills(&self) -> Result<Vec<SkillGroup>, ContentError> {
        self.many(ContentQuery::Skills).await
    }

    pub async fn skills_by_category(&self, category: SkillCategory) -> Result<Vec<SkillGroup>, ContentError> {
        self.many(ContentQuery::SkillsByCategory(category)).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ContentError> {
        self.many(ContentQuery::Projects).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, ContentError> {
        self.many(ContentQuery::FeaturedProjects).await
    }

    /// Full project by slug; `None` when no document matches.
    pub async fn project(&self, slug: &str) -> Result<Option<Project>, ContentError> {
        self.one(ContentQuery::ProjectBySlug(slug.to_owned())).await
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, ContentError> {
        self.many(ContentQuery::Tags).await
    }

    async fn one<T: DeserializeOwned>(&self, query: ContentQuery) -> Result<Option<T>, ContentError> {
        match self.source.query(&query).await? {
            Value::Null => Ok(None),
            value => serde_json::from_value(value).map(Some).context(query.to_string()),
        }
    }

    /// Decodes each document on its own so one bad document does not sink the list.
    ///
    /// Fails only when the answer is not an array or when no document decodes.
    async fn many<T: DeserializeOwned>(&self, query: ContentQuery) -> Result<Vec<T>, ContentError> {
        let documents: Vec<Value> = match self.source.query(&query).await? {
            Value::Null => return Ok(Vec::new()),
            value => serde_json::from_value(value).context(query.to_string())?,
        };

        let total = documents.len();
        let mut last_error = None;
        let decoded: Vec<T> = documents
            .into_iter()
            .enumerate()
            .filter_map(|(index, document)| match serde_json::from_value(document) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(query = %query, index, error = %e, "Skipping undecodable document");
                    last_error = Some(e);
                    None
                }
            })
            .collect();

        match last_error {
            Some(source) if decoded.is_empty() && total > 0 => {
                Err(ContentError::Decode { source, context: Some(query.to_string().into()) })
            }
            _ => Ok(decoded),
        }
    }
}

impl Default for ContentClient {
    fn default() -> Self {
        Self::new(OfflineSource)
    }
}
