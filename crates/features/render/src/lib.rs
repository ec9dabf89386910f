//! Render pipeline: pure functions from resolved content to what templates display.
//!
//! Nothing here fails. Unknown icon keys fall back to [`Icon::Code`], unresolvable images
//! to [`PLACEHOLDER_IMAGE`], missing optional fields to `None`. Rendering the same content
//! twice yields equal values.

pub mod dates;
mod error;
pub mod icon;
pub mod image;
pub mod palette;
pub mod rich_text;
pub mod skills;
pub mod typewriter;
pub mod view;

pub use crate::dates::date_range;
pub use crate::error::{AssetUrlError, AssetUrlErrorExt};
pub use crate::icon::Icon;
pub use crate::image::{AssetUrlBuilder, PLACEHOLDER_IMAGE, SanityImageUrls, resolve_image};
pub use crate::skills::SkillBoard;
pub use crate::typewriter::Typewriter;
pub use crate::view::{AboutView, ContactView, ProjectCard, ProjectDetail};
