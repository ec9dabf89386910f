//! Image URL resolution with a placeholder for anything that can't be resolved.

use crate::error::AssetUrlError;
use folio_domain::config::{AssetsConfig, ContentConfig};
use folio_domain::media::ImageRef;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Sizes each page asks for.
pub mod sizes {
    pub const PROFILE: (u32, u32) = (400, 400);
    pub const PROJECT_CARD: (u32, u32) = (600, 300);
    pub const PROJECT_HERO: (u32, u32) = (800, 450);
    pub const GALLERY: (u32, u32) = (600, 400);
}

static ASSET_ID: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^image-([A-Za-z0-9]+)-(\d+)x(\d+)-([a-z0-9]+)$"));

/// Turns an image reference into a URL for the requested size.
pub trait AssetUrlBuilder: Send + Sync {
    /// # Errors
    /// Any reference the builder can't express as a URL.
    fn url(&self, image: &ImageRef, width: u32, height: u32) -> Result<String, AssetUrlError>;
}

/// Resolves an optional image, falling back to [`PLACEHOLDER_IMAGE`].
///
/// An unset image is routine content and only logged at debug; builder failures are warnings.
/// Neither is propagated.
pub fn resolve_image(builder: &dyn AssetUrlBuilder, image: Option<&ImageRef>, width: u32, height: u32) -> String {
    let Some(image) = image.filter(|image| image.asset.is_some()) else {
        debug!(width, height, "No image set, using placeholder");
        return PLACEHOLDER_IMAGE.to_owned();
    };

    builder.url(image, width, height).unwrap_or_else(|e| {
        warn!(error = %e, width, height, "Image URL resolution failed, using placeholder");
        PLACEHOLDER_IMAGE.to_owned()
    })
}

/// Builds image CDN URLs from store asset ids.
///
/// Assets without an id but with a URL (site-local images) are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityImageUrls {
    cdn_base: String,
    project_id: String,
    dataset: String,
}

impl SanityImageUrls {
    pub fn new(cdn_base: impl Into<String>, project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            cdn_base: cdn_base.into().trim_end_matches('/').to_owned(),
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn from_config(assets: &AssetsConfig, content: &ContentConfig) -> Self {
        Self::new(&assets.cdn_base, &content.project_id, &content.dataset)
    }
}

impl AssetUrlBuilder for SanityImageUrls {
    fn url(&self, image: &ImageRef, width: u32, height: u32) -> Result<String, AssetUrlError> {
        let asset = image.asset.as_ref().ok_or(AssetUrlError::MissingAsset { context: None })?;

        if asset.id.is_empty() {
            return asset
                .url
                .clone()
                .filter(|url| !url.is_empty())
                .ok_or(AssetUrlError::MissingAsset { context: Some("asset has neither id nor url".into()) });
        }

        if self.project_id.trim().is_empty() {
            return Err(AssetUrlError::MissingProject { context: Some(asset.id.clone().into()) });
        }

        let pattern = ASSET_ID.as_ref().map_err(|e| AssetUrlError::from(e.to_string()))?;
        let captures = pattern
            .captures(&asset.id)
            .ok_or_else(|| AssetUrlError::MalformedId { id: asset.id.clone(), context: None })?;

        let (hash, w, h, ext) = (&captures[1], &captures[2], &captures[3], &captures[4]);
        Ok(format!(
            "{}/{}/{}/{hash}-{w}x{h}.{ext}?w={width}&h={height}&fit=crop",
            self.cdn_base, self.project_id, self.dataset
        ))
    }
}
