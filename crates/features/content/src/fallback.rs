//! Bundled content served whenever the store has nothing usable.
//!
//! Every value is built once per process and shared read-only.

use chrono::{DateTime, TimeZone, Utc};
use folio_domain::content::{
    About, Contact, Education, Experience, Interest, Project, SkillGroup, Slug, SocialLink, Tag,
};
use folio_domain::rich_text::Block;
use folio_domain::taxonomy::{ProjectStatus, SkillCategory, TagCategory, TagColor};
use std::sync::LazyLock;

static ABOUT: LazyLock<About> = LazyLock::new(|| About {
    id: "fallback-about".into(),
    title: "About Me".into(),
    bio: vec![Block::paragraph(
        "I'm a passionate Full Stack Developer currently pursuing B.Tech in Computer Science and \
         Engineering. I love creating efficient, scalable, and user-friendly solutions using modern \
         web technologies.",
    )],
    profile_image: None,
    experiences: vec![Experience {
        title: "Campus Ambassador".into(),
        company: "GeeksforGeeks".into(),
        start_date: "2024-01-01".into(),
        end_date: Some("2024-12-31".into()),
        current: false,
        description: "Represented GeeksforGeeks at my college by organizing coding contests, seminars, and \
                      workshops."
            .into(),
        skills: strings(&["Event Planning", "Leadership", "Communication", "Marketing"]),
    }],
    education: vec![Education {
        degree: "Bachelor of Technology in Data Science".into(),
        institution: "MDU, Rohtak".into(),
        start_date: "2023-01-01".into(),
        end_date: Some("2027-01-01".into()),
        current: true,
        description: Some("Currently pursuing B.Tech with focus on data science and web development".into()),
    }],
    interests: vec![interest("Coding", "Code"), interest("Gaming", "Gamepad2"), interest("Music", "Music")],
    resume_file: None,
});

static CONTACT: LazyLock<Contact> = LazyLock::new(|| Contact {
    id: "fallback-contact".into(),
    title: "Get In Touch".into(),
    description: "Have a project in mind or want to discuss potential opportunities? Feel free to reach out \
                  through the form below or via my contact information."
        .into(),
    email: "amank.root@gmail.com".into(),
    phone: Some("+91 9876543210".into()),
    location: Some("New Delhi, India".into()),
    social_links: vec![
        social("GitHub", "https://github.com/Amank-root", "Github"),
        social("LinkedIn", "https://linkedin.com/in/amank-root", "Linkedin"),
        social("Twitter", "https://twitter.com/amank_root", "Twitter"),
    ],
    form_endpoint: None,
    recaptcha_site_key: None,
});

static SKILLS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| {
    vec![
        SkillGroup {
            id: "frontend".into(),
            title: "Frontend Development".into(),
            description: "Creating responsive and interactive user interfaces".into(),
            category: SkillCategory::Frontend,
            skills: strings(&["React", "Next.js", "TypeScript", "Tailwind CSS", "HTML5", "CSS3"]),
            icon: Some("Code".into()),
            order: Some(1),
        },
        SkillGroup {
            id: "backend".into(),
            title: "Backend Development".into(),
            description: "Building robust server-side applications and APIs".into(),
            category: SkillCategory::Backend,
            skills: strings(&["Node.js", "Express.js", "Python", "MongoDB", "PostgreSQL", "REST APIs"]),
            icon: Some("Server".into()),
            order: Some(2),
        },
        SkillGroup {
            id: "tools".into(),
            title: "Development Tools".into(),
            description: "Tools and technologies for efficient development".into(),
            category: SkillCategory::Tools,
            skills: strings(&["Git", "VS Code", "Docker", "AWS", "Vercel", "Figma"]),
            icon: Some("Wrench".into()),
            order: Some(3),
        },
    ]
});

static TAGS: LazyLock<Vec<Tag>> = LazyLock::new(|| {
    let mut tags = vec![
        tag("React", TagCategory::Framework, TagColor::Blue),
        tag("TypeScript", TagCategory::Language, TagColor::Blue),
        tag("Node.js", TagCategory::Framework, TagColor::Green),
        tag("Next.js", TagCategory::Framework, TagColor::Gray),
        tag("MongoDB", TagCategory::Database, TagColor::Green),
        tag("Tailwind CSS", TagCategory::Framework, TagColor::Blue),
        tag("Python", TagCategory::Language, TagColor::Yellow),
        tag("Express.js", TagCategory::Framework, TagColor::Gray),
    ];
    // same order the store query uses
    tags.sort_by(|a, b| a.name.cmp(&b.name));
    tags
});

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        bundled_project(
            "attendance-system",
            "Attendance System Using OpenCV",
            "A Python-based attendance system that utilizes facial recognition to accurately identify \
             students and mark their attendance on specific dates.",
            &["Python", "OpenCV", "Face Recognition", "pandas", "Tkinter"],
            "https://github.com/Amank-root/attendance_sys_using_opencv",
            1,
        ),
        bundled_project(
            "moomovies",
            "MooMovies - Streaming Platform",
            "Your one-stop destination for streaming movies, anime, and manga across Bollywood, Hollywood, \
             and other genres.",
            &["Nextjs", "TypeScript", "Tailwind CSS", "TheMovieDB API"],
            "https://moomoviev2.pages.dev/",
            2,
        ),
        bundled_project(
            "titanic-survival",
            "Titanic Survival Prediction",
            "Developed a machine learning model to predict Titanic passenger survival using data \
             preprocessing, exploratory data analysis, and classification algorithms.",
            &["Python", "pandas", "NumPy", "Scikit-learn", "Matplotlib"],
            "https://www.kaggle.com/code/amankroot/trying-titanic-dataset",
            3,
        ),
    ]
});

pub fn about() -> &'static About {
    &ABOUT
}

pub fn contact() -> &'static Contact {
    &CONTACT
}

pub fn skills() -> &'static [SkillGroup] {
    &SKILLS
}

/// Fallback skill groups of one category, in board order.
pub fn skills_in(category: SkillCategory) -> Vec<SkillGroup> {
    SKILLS.iter().filter(|group| group.category == category).cloned().collect()
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Looks a fallback project up by slug.
pub fn project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug() == slug)
}

pub fn tags() -> &'static [Tag] {
    &TAGS
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

fn interest(name: &str, icon: &str) -> Interest {
    Interest { name: name.into(), icon: icon.into() }
}

fn social(platform: &str, url: &str, icon: &str) -> SocialLink {
    SocialLink { platform: platform.into(), url: url.into(), icon: icon.into() }
}

fn slugify(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '.' => None,
            c => Some(c.to_ascii_lowercase()),
        })
        .collect()
}

fn tag(name: &str, category: TagCategory, color: TagColor) -> Tag {
    let slug = slugify(name);
    Tag {
        id: format!("tag-{slug}"),
        name: name.into(),
        slug: Slug::new(slug),
        description: None,
        color,
        category,
    }
}

fn bundled_project(
    slug: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    link: &str,
    order: i64,
) -> Project {
    Project {
        id: format!("fallback-{slug}"),
        title: title.into(),
        slug: Slug::new(slug),
        description: description.into(),
        long_description: Some(vec![Block::paragraph(description)]),
        main_image: None,
        gallery: Vec::new(),
        technologies: technologies
            .iter()
            .map(|&name| tag(name, TagCategory::Other, TagColor::Blue))
            .collect(),
        github_url: Some(link.into()),
        demo_url: Some(link.into()),
        featured: true,
        order: Some(order),
        status: ProjectStatus::Completed,
        published_at: published(),
    }
}

fn published() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
}
