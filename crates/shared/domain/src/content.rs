//! Documents served by the content store.
//!
//! Field names follow the store (camelCase, `_id`). Every optional or list-valued field
//! tolerates both a missing key and an explicit `null`.

use crate::check::{WellFormed, is_valid_email, or_default};
use crate::media::{FileRef, ImageRef};
use crate::rich_text::RichText;
use crate::singleton_content;
use crate::taxonomy::{ProjectStatus, SkillCategory, TagCategory, TagColor};
use chrono::{DateTime, Utc};
use folio_derive::content_model;

/// Store slug object (`{ "current": "moomovies" }`).
#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Slug {
    #[serde(default, deserialize_with = "or_default")]
    pub current: String,
}

impl Slug {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { current: slug.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }

    /// Non-empty and usable as a single path segment.
    pub fn is_routable(&self) -> bool {
        !self.current.is_empty()
            && self.current.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }
}

/// Singleton "about me" document.
#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct About {
    #[serde(rename = "_id", default, deserialize_with = "or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    #[cfg_attr(feature = "server", schema(value_type = Vec<crate::rich_text::Block>))]
    pub bio: RichText,
    pub profile_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub experiences: Vec<Experience>,
    #[serde(default, deserialize_with = "or_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "or_default")]
    pub interests: Vec<Interest>,
    pub resume_file: Option<FileRef>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Experience {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub company: String,
    #[serde(default, deserialize_with = "or_default")]
    pub start_date: String,
    pub end_date: Option<String>,
    /// When set, `end_date` is ignored.
    #[serde(default, deserialize_with = "or_default")]
    pub current: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub skills: Vec<String>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Education {
    #[serde(default, deserialize_with = "or_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "or_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "or_default")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub current: bool,
    pub description: Option<String>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Interest {
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    /// Key into the icon table; unknown keys render the default icon.
    #[serde(default, deserialize_with = "or_default")]
    pub icon: String,
}

/// Singleton contact document.
#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Contact {
    #[serde(rename = "_id", default, deserialize_with = "or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub social_links: Vec<SocialLink>,
    /// Form delivery endpoint (full URL or a bare form id).
    #[serde(rename = "formspreeEndpoint")]
    pub form_endpoint: Option<String>,
    pub recaptcha_site_key: Option<String>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "or_default")]
    pub platform: String,
    #[serde(default, deserialize_with = "or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "or_default")]
    pub icon: String,
}

/// One card on the skills board.
#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SkillGroup {
    #[serde(rename = "_id", default, deserialize_with = "or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub category: SkillCategory,
    #[serde(default, deserialize_with = "or_default")]
    pub skills: Vec<String>,
    pub icon: Option<String>,
    pub order: Option<i64>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Project {
    #[serde(rename = "_id", default, deserialize_with = "or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub slug: Slug,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<crate::rich_text::Block>>))]
    pub long_description: Option<RichText>,
    pub main_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub technologies: Vec<Tag>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub featured: bool,
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "or_default")]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "or_default")]
    pub published_at: DateTime<Utc>,
}

impl Project {
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
}

/// Technology tag attached to projects.
#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Tag {
    #[serde(rename = "_id", default, deserialize_with = "or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub slug: Slug,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub color: TagColor,
    #[serde(default, deserialize_with = "or_default")]
    pub category: TagCategory,
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

impl WellFormed for About {
    fn is_well_formed(&self) -> bool {
        has_text(&self.title)
            && self.experiences.iter().all(|e| has_text(&e.title) && has_text(&e.start_date))
            && self.education.iter().all(|e| has_text(&e.degree) && has_text(&e.start_date))
    }
}

impl WellFormed for Contact {
    fn is_well_formed(&self) -> bool {
        is_valid_email(&self.email) && self.social_links.iter().all(|link| has_text(&link.url))
    }
}

impl WellFormed for SkillGroup {
    fn is_well_formed(&self) -> bool {
        has_text(&self.title)
    }
}

impl WellFormed for Project {
    fn is_well_formed(&self) -> bool {
        has_text(&self.title) && self.slug.is_routable()
    }
}

impl WellFormed for Tag {
    fn is_well_formed(&self) -> bool {
        has_text(&self.name)
    }
}

singleton_content!(About, Contact, Project);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{PageContent, Usable};
    use serde_json::json;

    #[test]
    fn project_tolerates_nulls_from_projections() {
        let raw = json!({
            "_id": "p1",
            "_type": "project",
            "title": "MooMovies",
            "slug": { "_type": "slug", "current": "moomovies" },
            "description": "Streaming",
            "mainImage": null,
            "gallery": null,
            "technologies": [{ "_id": "t1", "name": "React", "color": "blue", "category": "library" }],
            "githubUrl": null,
            "demoUrl": "https://moomovies.example",
            "featured": true,
            "status": "completed",
            "publishedAt": "2024-03-01T10:00:00Z"
        });

        let project: Project = serde_json::from_value(raw).unwrap();
        assert_eq!(project.slug(), "moomovies");
        assert!(project.gallery.is_empty());
        assert!(project.github_url.is_none());
        assert_eq!(project.technologies[0].category, TagCategory::Library);
        assert_eq!(project.technologies[0].slug, Slug::default());
        assert!(project.is_well_formed());
    }

    #[test]
    fn contact_maps_form_endpoint_field() {
        let contact: Contact = serde_json::from_value(json!({
            "title": "Get in touch",
            "email": "me@example.com",
            "socialLinks": null,
            "formspreeEndpoint": "xyzabc"
        }))
        .unwrap();
        assert_eq!(contact.form_endpoint.as_deref(), Some("xyzabc"));
        assert!(contact.social_links.is_empty());
    }

    #[test]
    fn malformed_singletons_are_rejected() {
        let contact = Contact { email: "not-an-address".into(), ..Contact::default() };
        assert_eq!(contact.vet(), Usable::Malformed);

        let project = Project { title: "X".into(), slug: Slug::new("has space"), ..Project::default() };
        assert!(!project.is_well_formed());

        let about = About { title: "About Me".into(), ..About::default() };
        assert!(matches!(about.vet(), Usable::Ready(_)));
    }
}
