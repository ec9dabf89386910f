//! References to store-hosted assets.

use crate::check::or_default;
use folio_derive::content_model;

/// An image field. The asset may be missing on drafts or when the reference is dangling.
#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ImageRef {
    pub asset: Option<AssetRef>,
    pub alt: Option<String>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AssetRef {
    /// `_id` of a dereferenced asset, or `_ref` when the query did not follow the reference.
    #[serde(rename = "_id", alias = "_ref", default, deserialize_with = "or_default")]
    pub id: String,
    pub url: Option<String>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct FileRef {
    pub asset: Option<FileAsset>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct FileAsset {
    #[serde(rename = "_id", alias = "_ref", default, deserialize_with = "or_default")]
    pub id: String,
    pub url: Option<String>,
    pub original_filename: Option<String>,
}

impl FileRef {
    pub fn url(&self) -> Option<&str> {
        self.asset.as_ref().and_then(|a| a.url.as_deref()).filter(|u| !u.is_empty())
    }
}
