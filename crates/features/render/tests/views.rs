use folio_domain::content::{About, Contact, Experience, Project, SkillGroup, Slug, SocialLink};
use folio_domain::media::{AssetRef, ImageRef};
use folio_domain::taxonomy::SkillCategory;
use folio_render::view::{LIVE_DEMO, LinkKind, VIEW_SOURCE};
use folio_render::{
    AboutView, AssetUrlBuilder, AssetUrlError, ContactView, Icon, PLACEHOLDER_IMAGE, ProjectCard, ProjectDetail,
    SanityImageUrls, SkillBoard,
};

struct BrokenCdn;

impl AssetUrlBuilder for BrokenCdn {
    fn url(&self, _: &ImageRef, _: u32, _: u32) -> Result<String, AssetUrlError> {
        Err("cdn unreachable".into())
    }
}

fn cdn() -> SanityImageUrls {
    SanityImageUrls::new("https://cdn.sanity.io/images", "proj", "production")
}

fn moomovies() -> Project {
    Project {
        title: "MooMovies".into(),
        slug: Slug::new("moomovies"),
        description: "Streaming".into(),
        demo_url: Some("https://moomoviev2.pages.dev/".into()),
        github_url: None,
        main_image: Some(ImageRef {
            asset: Some(AssetRef { id: "image-abc123-1200x800-png".into(), url: None }),
            alt: None,
        }),
        ..Project::default()
    }
}

#[test]
fn demo_without_source_shows_only_live_demo() {
    let card = ProjectCard::build(&moomovies(), &cdn());

    assert_eq!(card.links.len(), 1);
    assert_eq!(card.link(LinkKind::Demo).map(|l| l.label), Some(LIVE_DEMO));
    assert!(card.links.iter().all(|l| l.label != VIEW_SOURCE));
    assert_eq!(card.href, "/projects/moomovies");
    assert_eq!(card.image.alt, "MooMovies");
    assert!(card.image.src.ends_with("abc123-1200x800.png?w=600&h=300&fit=crop"));
}

#[test]
fn detail_uses_hero_size_and_falls_back_on_builder_failure() {
    let detail = ProjectDetail::build(&moomovies(), &cdn());
    assert!(detail.card.image.src.contains("w=800&h=450"));
    assert!(detail.body.is_empty());

    let broken = ProjectDetail::build(&moomovies(), &BrokenCdn);
    assert_eq!(broken.card.image.src, PLACEHOLDER_IMAGE);
}

#[test]
fn rendering_is_idempotent() {
    let project = moomovies();
    assert_eq!(ProjectDetail::build(&project, &cdn()), ProjectDetail::build(&project, &cdn()));

    let about = About { title: "About".into(), ..About::default() };
    assert_eq!(AboutView::build(&about, &cdn(), None), AboutView::build(&about, &cdn(), None));
}

#[test]
fn about_view_formats_periods_and_elides_blanks() {
    let about = About {
        title: "About Me".into(),
        experiences: vec![Experience {
            title: "Ambassador".into(),
            start_date: "2023-01-01".into(),
            end_date: Some("2020-01-01".into()),
            current: true,
            description: "   ".into(),
            ..Experience::default()
        }],
        ..About::default()
    };

    let view = AboutView::build(&about, &cdn(), Some("/resume.pdf"));
    assert_eq!(view.experiences[0].period, "2023 - Present");
    assert_eq!(view.experiences[0].description, None);
    assert_eq!(view.profile.src, PLACEHOLDER_IMAGE);
    assert_eq!(view.resume_url.as_deref(), Some("/resume.pdf"));
}

#[test]
fn contact_view_drops_missing_optionals_and_maps_icons() {
    let contact = Contact {
        title: "Get In Touch".into(),
        email: "me@example.com".into(),
        phone: Some(String::new()),
        location: None,
        social_links: vec![SocialLink { platform: "Mastodon".into(), url: "https://x".into(), icon: "Toot".into() }],
        ..Contact::default()
    };

    let view = ContactView::from(&contact);
    assert_eq!(view.phone, None);
    assert_eq!(view.location, None);
    assert_eq!(view.description, None);
    assert_eq!(view.socials[0].icon, Icon::Code);
}

#[test]
fn frontend_and_backend_only_leaves_tools_and_other_empty() {
    let groups = [
        SkillGroup { title: "Frontend".into(), category: SkillCategory::Frontend, ..SkillGroup::default() },
        SkillGroup { title: "Backend".into(), category: SkillCategory::Backend, ..SkillGroup::default() },
    ];
    let board = SkillBoard::new(&groups);

    assert_eq!(board.tab(SkillCategory::Tools).map(|t| t.cards.len()), Some(0));
    assert_eq!(board.tab(SkillCategory::Other).map(|t| t.cards.len()), Some(0));
}
