//! Closed value sets used by content documents.
//!
//! Unknown values coming from the store map onto a designated catch-all variant instead of
//! failing the whole document.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Tab a skill group is filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    #[default]
    #[serde(other)]
    Other,
}

impl SkillCategory {
    /// Tab label shown on the skills board.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Other => "Other",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TagColor {
    Green,
    Red,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Gray,
    // serde requires the catch-all to be the last variant
    #[default]
    #[serde(other)]
    Blue,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TagCategory {
    Language,
    Framework,
    Library,
    Tool,
    Database,
    Platform,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectStatus {
    Development,
    Maintenance,
    #[default]
    #[serde(other)]
    Completed,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "In Development",
            Self::Completed => "Completed",
            Self::Maintenance => "Maintenance",
        }
    }
}
