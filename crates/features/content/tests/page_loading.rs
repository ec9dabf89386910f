//! Store + fallback resolution as pages see it.

use folio_content::{ContentClient, MountGate, OfflineSource, Origin, PageLoader, SanityClient, fallback};
use folio_domain::content::{About, Contact, Project, SkillGroup, Tag};
use folio_domain::rich_text::plain_text;
use httpmock::prelude::*;
use serde_json::json;

fn visit<T>(page: &'static str) -> (MountGate, PageLoader<T>)
where
    T: folio_domain::PageContent + Clone + Send + Sync,
{
    let gate = MountGate::new();
    let loader = PageLoader::new(gate.clone(), page);
    (gate, loader)
}

#[tokio::test]
async fn offline_store_serves_the_bundled_about_page() {
    let client = ContentClient::new(OfflineSource);
    let (gate, loader) = visit::<About>("about");

    let (_, resolved) = tokio::join!(gate.open_after_paint(), loader.load(client.about(), || fallback::about().clone()));

    assert_eq!(resolved.origin, Origin::Fallback);
    assert!(plain_text(&resolved.content.bio).starts_with("I'm a passionate Full Stack Developer"));
}

#[tokio::test]
async fn zero_about_documents_fall_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({ "result": null }));
        })
        .await;
    let client = ContentClient::new(
        SanityClient::new(&server.base_url(), "production", "2024-01-01", None, None).unwrap(),
    );
    let (gate, loader) = visit::<About>("about");

    let (_, resolved) = tokio::join!(gate.open_after_paint(), loader.load(client.about(), || fallback::about().clone()));

    assert!(resolved.is_fallback());
    assert_eq!(&resolved.content, fallback::about());
}

#[tokio::test]
async fn partially_malformed_skills_keep_the_good_ones() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({
                "result": [
                    { "_id": "fe", "title": "Frontend", "category": "frontend", "skills": ["Leptos"] },
                    { "_id": "broken", "title": null, "category": "tools" }
                ]
            }));
        })
        .await;
    let client = ContentClient::new(
        SanityClient::new(&server.base_url(), "production", "2024-01-01", None, None).unwrap(),
    );
    let (gate, loader) = visit::<Vec<SkillGroup>>("skills");

    let (_, resolved) =
        tokio::join!(gate.open_after_paint(), loader.load(client.skills(), || fallback::skills().to_vec()));

    assert_eq!(resolved.origin, Origin::Store);
    assert_eq!(resolved.content.len(), 1);
    assert_eq!(resolved.content[0].id, "fe");
}

#[tokio::test]
async fn unknown_slug_resolves_to_the_bundled_project_or_nothing() {
    let client = ContentClient::new(OfflineSource);

    let (gate, loader) = visit::<Option<Project>>("project");
    let (_, known) = tokio::join!(
        gate.open_after_paint(),
        loader.load(client.project("moomovies"), || fallback::project("moomovies").cloned())
    );
    assert_eq!(known.content.as_ref().map(Project::slug), Some("moomovies"));

    let (gate, loader) = visit::<Option<Project>>("project");
    let (_, unknown) = tokio::join!(
        gate.open_after_paint(),
        loader.load(client.project("nope"), || fallback::project("nope").cloned())
    );
    assert!(unknown.content.is_none());
}

#[tokio::test]
async fn a_wrongly_typed_document_is_skipped_not_fatal() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({
                "result": [
                    { "_id": "fe", "title": "Frontend", "category": "frontend", "skills": ["Leptos"], "order": 1 },
                    { "_id": "be", "title": "Backend", "category": "backend", "skills": ["Axum"], "order": "3" }
                ]
            }));
        })
        .await;
    let client = ContentClient::new(
        SanityClient::new(&server.base_url(), "production", "2024-01-01", None, None).unwrap(),
    );
    let (gate, loader) = visit::<Vec<SkillGroup>>("skills");

    let (_, resolved) =
        tokio::join!(gate.open_after_paint(), loader.load(client.skills(), || fallback::skills().to_vec()));

    assert_eq!(resolved.origin, Origin::Store);
    assert_eq!(resolved.content.len(), 1);
    assert_eq!(resolved.content[0].id, "fe");
}

#[tokio::test]
async fn only_undecodable_documents_fall_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({ "result": [{ "_id": "be", "skills": "Axum" }] }));
        })
        .await;
    let client = ContentClient::new(
        SanityClient::new(&server.base_url(), "production", "2024-01-01", None, None).unwrap(),
    );

    assert!(client.skills().await.is_err());

    let (gate, loader) = visit::<Vec<SkillGroup>>("skills");
    let (_, resolved) =
        tokio::join!(gate.open_after_paint(), loader.load(client.skills(), || fallback::skills().to_vec()));
    assert!(resolved.is_fallback());
    assert_eq!(resolved.content, fallback::skills());
}

#[tokio::test]
async fn server_errors_fall_back_for_every_list_and_contact() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(500).body("boom");
        })
        .await;
    let client = ContentClient::new(
        SanityClient::new(&server.base_url(), "production", "2024-01-01", None, None).unwrap(),
    );

    let (gate, loader) = visit::<Contact>("contact");
    let (_, contact) =
        tokio::join!(gate.open_after_paint(), loader.load(client.contact(), || fallback::contact().clone()));
    assert!(contact.is_fallback());
    assert_eq!(&contact.content, fallback::contact());

    let (gate, loader) = visit::<Vec<Project>>("projects");
    let (_, projects) =
        tokio::join!(gate.open_after_paint(), loader.load(client.projects(), || fallback::projects().to_vec()));
    assert!(projects.is_fallback());
    assert_eq!(projects.content, fallback::projects());

    let featured_fallback = || fallback::projects().iter().filter(|p| p.featured).cloned().collect::<Vec<_>>();
    let (gate, loader) = visit::<Vec<Project>>("home");
    let (_, featured) =
        tokio::join!(gate.open_after_paint(), loader.load(client.featured_projects(), featured_fallback));
    assert!(featured.is_fallback());
    assert!(!featured.content.is_empty());
    assert!(featured.content.iter().all(|p| p.featured));

    let (gate, loader) = visit::<Vec<Tag>>("tags");
    let (_, tags) = tokio::join!(gate.open_after_paint(), loader.load(client.tags(), || fallback::tags().to_vec()));
    assert!(tags.is_fallback());
    assert_eq!(tags.content, fallback::tags());
}
