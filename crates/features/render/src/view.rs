//! Display structures the page templates consume.
//!
//! Optional store fields that are missing or blank come out as `None` (or an empty list)
//! so templates can skip their markup entirely.

use crate::dates::{date_range, month_year};
use crate::icon::Icon;
use crate::image::{AssetUrlBuilder, resolve_image, sizes};
use crate::palette::{status_class, tag_class};
use crate::rich_text::{TextBlock, render_rich_text};
use folio_domain::content::{About, Contact, Education, Experience, Project, Tag};
use folio_domain::media::ImageRef;

pub const VIEW_SOURCE: &str = "View Source";
pub const LIVE_DEMO: &str = "Live Demo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

impl ImageView {
    fn resolve(builder: &dyn AssetUrlBuilder, image: Option<&ImageRef>, size: (u32, u32), alt: &str) -> Self {
        let alt = image.and_then(|i| present(i.alt.as_deref())).unwrap_or_else(|| alt.to_owned());
        Self { src: resolve_image(builder, image, size.0, size.1), alt }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: String,
    pub organisation: String,
    pub period: String,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

impl From<&Experience> for TimelineEntry {
    fn from(e: &Experience) -> Self {
        Self {
            title: e.title.clone(),
            organisation: e.company.clone(),
            period: date_range(&e.start_date, e.end_date.as_deref(), e.current),
            description: present(Some(e.description.as_str())),
            skills: e.skills.clone(),
        }
    }
}

impl From<&Education> for TimelineEntry {
    fn from(e: &Education) -> Self {
        Self {
            title: e.degree.clone(),
            organisation: e.institution.clone(),
            period: date_range(&e.start_date, e.end_date.as_deref(), e.current),
            description: present(e.description.as_deref()),
            skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledIcon {
    pub label: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutView {
    pub title: String,
    pub bio: Vec<TextBlock>,
    pub profile: ImageView,
    pub experiences: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
    pub interests: Vec<LabeledIcon>,
    pub resume_url: Option<String>,
}

impl AboutView {
    /// `default_resume` is used when the document has no resume file of its own.
    pub fn build(about: &About, builder: &dyn AssetUrlBuilder, default_resume: Option<&str>) -> Self {
        Self {
            title: about.title.clone(),
            bio: render_rich_text(&about.bio),
            profile: ImageView::resolve(builder, about.profile_image.as_ref(), sizes::PROFILE, "Profile"),
            experiences: about.experiences.iter().map(TimelineEntry::from).collect(),
            education: about.education.iter().map(TimelineEntry::from).collect(),
            interests: about
                .interests
                .iter()
                .map(|i| LabeledIcon { label: i.name.clone(), icon: Icon::from_key(Some(i.icon.as_str())) })
                .collect(),
            resume_url: about
                .resume_file
                .as_ref()
                .and_then(|file| file.url())
                .or(default_resume)
                .and_then(|url| present(Some(url))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialView {
    pub platform: String,
    pub url: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub title: String,
    pub description: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub socials: Vec<SocialView>,
}

impl From<&Contact> for ContactView {
    fn from(contact: &Contact) -> Self {
        Self {
            title: contact.title.clone(),
            description: present(Some(contact.description.as_str())),
            email: contact.email.clone(),
            phone: present(contact.phone.as_deref()),
            location: present(contact.location.as_deref()),
            socials: contact
                .social_links
                .iter()
                .map(|s| SocialView {
                    platform: s.platform.clone(),
                    url: s.url.clone(),
                    icon: Icon::from_key(Some(s.icon.as_str())),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub name: String,
    pub class: &'static str,
}

impl From<&Tag> for TagChip {
    fn from(tag: &Tag) -> Self {
        Self { name: tag.name.clone(), class: tag_class(tag.color) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Source,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub image: ImageView,
    pub technologies: Vec<TagChip>,
    /// Source first, then demo; absent URLs produce no link.
    pub links: Vec<ProjectLink>,
    pub featured: bool,
    pub status: StatusBadge,
}

impl ProjectCard {
    pub fn build(project: &Project, builder: &dyn AssetUrlBuilder) -> Self {
        Self::sized(project, builder, sizes::PROJECT_CARD)
    }

    fn sized(project: &Project, builder: &dyn AssetUrlBuilder, size: (u32, u32)) -> Self {
        let links = [
            (LinkKind::Source, VIEW_SOURCE, project.github_url.as_deref()),
            (LinkKind::Demo, LIVE_DEMO, project.demo_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, label, url)| present(url).map(|url| ProjectLink { kind, label, url }))
        .collect();

        Self {
            href: format!("/projects/{}", project.slug()),
            title: project.title.clone(),
            description: project.description.clone(),
            image: ImageView::resolve(builder, project.main_image.as_ref(), size, &project.title),
            technologies: project.technologies.iter().map(TagChip::from).collect(),
            links,
            featured: project.featured,
            status: StatusBadge { label: project.status.label(), class: status_class(project.status) },
        }
    }

    pub fn link(&self, kind: LinkKind) -> Option<&ProjectLink> {
        self.links.iter().find(|link| link.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub card: ProjectCard,
    pub body: Vec<TextBlock>,
    pub gallery: Vec<ImageView>,
    pub published: String,
}

impl ProjectDetail {
    pub fn build(project: &Project, builder: &dyn AssetUrlBuilder) -> Self {
        Self {
            card: ProjectCard::sized(project, builder, sizes::PROJECT_HERO),
            body: project.long_description.as_deref().map(render_rich_text).unwrap_or_default(),
            gallery: project
                .gallery
                .iter()
                .map(|image| ImageView::resolve(builder, Some(image), sizes::GALLERY, &project.title))
                .collect(),
            published: month_year(&project.published_at),
        }
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
