use crate::error::ContentError;
use crate::query::ContentQuery;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

/// Anything that can answer a [`ContentQuery`] with the raw `result` value.
///
/// `Value::Null` means "no match" for singleton queries; collections answer with an array.
#[async_trait]
pub trait ContentSource: Send + Sync + Debug {
    async fn query(&self, query: &ContentQuery) -> Result<Value, ContentError>;
}

/// Source used when the store is disabled: every query fails, so pages show bundled content.
#[derive(Debug, Clone, Default)]
pub struct OfflineSource;

#[async_trait]
impl ContentSource for OfflineSource {
    async fn query(&self, query: &ContentQuery) -> Result<Value, ContentError> {
        Err(ContentError::Unavailable {
            message: "content store disabled in configuration".into(),
            context: Some(query.to_string().into()),
        })
    }
}
