//! GROQ queries, one per content shape.

use folio_domain::taxonomy::SkillCategory;
use std::fmt;

const PROJECT_CARD_FIELDS: &str = r"{
    _id,
    title,
    slug,
    description,
    mainImage { asset->{ _id, url }, alt },
    technologies[]->{ _id, name, slug, color, category },
    githubUrl,
    demoUrl,
    featured,
    order,
    status,
    publishedAt
  }";

const PROJECT_DETAIL_FIELDS: &str = r"{
    _id,
    title,
    slug,
    description,
    longDescription,
    mainImage { asset->{ _id, url }, alt },
    gallery[] { asset->{ _id, url }, alt },
    technologies[]->{ _id, name, slug, color, category },
    githubUrl,
    demoUrl,
    featured,
    order,
    status,
    publishedAt
  }";

const SKILL_FIELDS: &str = "{ _id, title, description, category, skills, icon, order }";

const ABOUT_FIELDS: &str = r"{
    _id,
    title,
    bio,
    profileImage { asset->{ _id, url }, alt },
    experiences[] { title, company, startDate, endDate, current, description, skills },
    education[] { degree, institution, startDate, endDate, current, description },
    interests[] { name, icon },
    resumeFile { asset->{ _id, url, originalFilename } }
  }";

const CONTACT_FIELDS: &str = r"{
    _id,
    title,
    description,
    email,
    phone,
    location,
    socialLinks[] { platform, url, icon },
    formspreeEndpoint,
    recaptchaSiteKey
  }";

const TAG_FIELDS: &str = "{ _id, name, slug, description, color, category }";

/// Everything the site ever asks the store for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentQuery {
    About,
    Contact,
    Skills,
    SkillsByCategory(SkillCategory),
    Projects,
    FeaturedProjects,
    ProjectBySlug(String),
    Tags,
}

impl ContentQuery {
    /// Full GROQ text, filter + ordering + projection.
    pub fn groq(&self) -> String {
        match self {
            Self::About => format!(r#"*[_type == "about"][0] {ABOUT_FIELDS}"#),
            Self::Contact => format!(r#"*[_type == "contact"][0] {CONTACT_FIELDS}"#),
            Self::Skills => format!(r#"*[_type == "skill"] | order(order asc) {SKILL_FIELDS}"#),
            Self::SkillsByCategory(_) => {
                format!(r#"*[_type == "skill" && category == $category] | order(order asc) {SKILL_FIELDS}"#)
            }
            Self::Projects => {
                format!(r#"*[_type == "project"] | order(order asc, publishedAt desc) {PROJECT_CARD_FIELDS}"#)
            }
            Self::FeaturedProjects => format!(
                r#"*[_type == "project" && featured == true] | order(order asc, publishedAt desc) {PROJECT_CARD_FIELDS}"#
            ),
            Self::ProjectBySlug(_) => {
                format!(r#"*[_type == "project" && slug.current == $slug][0] {PROJECT_DETAIL_FIELDS}"#)
            }
            Self::Tags => format!(r#"*[_type == "tag"] | order(name asc) {TAG_FIELDS}"#),
        }
    }

    /// `$name` bindings referenced by [`ContentQuery::groq`], values unencoded.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::SkillsByCategory(category) => vec![("category", category.to_string())],
            Self::ProjectBySlug(slug) => vec![("slug", slug.clone())],
            _ => Vec::new(),
        }
    }

    /// Whether the query ends in `[0]` and answers with one document or `null`.
    pub(crate) const fn is_singleton(&self) -> bool {
        matches!(self, Self::About | Self::Contact | Self::ProjectBySlug(_))
    }

    /// Short label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Contact => "contact",
            Self::Skills => "skills",
            Self::SkillsByCategory(_) => "skills-by-category",
            Self::Projects => "projects",
            Self::FeaturedProjects => "featured-projects",
            Self::ProjectBySlug(_) => "project",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for ContentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkillsByCategory(category) => write!(f, "{}({category})", self.label()),
            Self::ProjectBySlug(slug) => write!(f, "{}({slug})", self.label()),
            _ => f.write_str(self.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_lives_in_the_query() {
        assert!(ContentQuery::Projects.groq().contains("order(order asc, publishedAt desc)"));
        assert!(ContentQuery::Skills.groq().contains("order(order asc)"));
        assert!(ContentQuery::Tags.groq().contains("order(name asc)"));
        assert!(ContentQuery::FeaturedProjects.groq().contains("featured == true"));
    }

    #[test]
    fn parameterised_queries_bind_their_values() {
        let by_slug = ContentQuery::ProjectBySlug("moomovies".into());
        assert!(by_slug.groq().contains("slug.current == $slug][0]"));
        assert_eq!(by_slug.params(), [("slug", "moomovies".to_owned())]);

        let by_category = ContentQuery::SkillsByCategory(SkillCategory::Tools);
        assert!(by_category.groq().contains("category == $category"));
        assert_eq!(by_category.params(), [("category", "tools".to_owned())]);
        assert!(ContentQuery::About.params().is_empty());
    }

    #[test]
    fn singletons_are_the_indexed_queries() {
        for query in [ContentQuery::About, ContentQuery::Contact, ContentQuery::ProjectBySlug("x".into())] {
            assert!(query.is_singleton());
            assert!(query.groq().contains("[0]"));
        }
        assert!(!ContentQuery::Projects.is_singleton());
        assert_eq!(ContentQuery::ProjectBySlug("x".into()).to_string(), "project(x)");
    }
}
