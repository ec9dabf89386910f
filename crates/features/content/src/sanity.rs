use crate::error::{ContentError, ContentErrorExt};
use crate::query::ContentQuery;
use crate::source::ContentSource;
use async_trait::async_trait;
use folio_domain::config::ContentConfig;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Envelope of the store's query endpoint.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

/// HTTP client for the Sanity query API
/// (`GET {origin}/v{apiVersion}/data/query/{dataset}?query=...&$param=...`).
///
/// No retries and no caching: every call is one request.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

impl SanityClient {
    /// Builds a client from the `[content]` config section.
    ///
    /// # Errors
    /// Fails when the derived endpoint is not a valid URL or the HTTP client cannot be built.
    pub fn from_config(config: &ContentConfig) -> Result<Self, ContentError> {
        let origin = config.base_url.clone().unwrap_or_else(|| {
            let host = if config.use_cdn { "apicdn" } else { "api" };
            format!("https://{}.{host}.sanity.io", config.project_id.trim())
        });

        Self::new(
            &origin,
            &config.dataset,
            &config.api_version,
            config.token.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// # Errors
    /// Fails when `origin` does not parse or the HTTP client cannot be built.
    pub fn new(
        origin: &str,
        dataset: &str,
        api_version: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ContentError> {
        let version = api_version.trim_start_matches('v');
        let endpoint = Url::parse(origin)
            .and_then(|base| base.join(&format!("v{version}/data/query/{dataset}")))
            .context(format!("Building query endpoint from {origin}"))?;

        let mut builder = Client::builder().user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Building HTTP client")?;

        Ok(Self { http, endpoint, token: token.filter(|t| !t.trim().is_empty()) })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn query_url(&self, query: &ContentQuery) -> Result<Url, ContentError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &query.groq());
            for (name, value) in query.params() {
                // parameter values are JSON literals
                let encoded = serde_json::to_string(&value).context("Encoding query parameter")?;
                pairs.append_pair(&format!("${name}"), &encoded);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn query(&self, query: &ContentQuery) -> Result<Value, ContentError> {
        let url = self.query_url(query)?;
        debug!(query = %query, singleton = query.is_singleton(), "Querying content store");

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.context(query.to_string())?;
        let status = response.status();
        let body = response.text().await.context(query.to_string())?;

        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                body: body.chars().take(512).collect(),
                context: Some(query.to_string().into()),
            });
        }

        let envelope: QueryResponse = serde_json::from_str(&body).context(query.to_string())?;
        Ok(envelope.result)
    }
}
