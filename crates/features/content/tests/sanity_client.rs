use folio_content::{ContentClient, ContentError, SanityClient};
use folio_domain::taxonomy::{ProjectStatus, SkillCategory};
use httpmock::prelude::*;
use serde_json::json;

const QUERY_PATH: &str = "/v2024-01-01/data/query/production";

fn client_for(server: &MockServer, token: Option<&str>) -> ContentClient {
    let sanity = SanityClient::new(&server.base_url(), "production", "2024-01-01", token.map(str::to_owned), None)
        .unwrap();
    ContentClient::new(sanity)
}

#[tokio::test]
async fn decodes_projects_in_store_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(QUERY_PATH).query_param_exists("query");
            then.status(200).header("content-type", "application/json").json_body(json!({
                "ms": 4,
                "query": "*[_type == \"project\"]",
                "result": [
                    {
                        "_id": "p2",
                        "title": "MooMovies",
                        "slug": { "current": "moomovies" },
                        "description": "Streaming",
                        "technologies": null,
                        "githubUrl": null,
                        "demoUrl": "https://moomoviev2.pages.dev/",
                        "featured": true,
                        "order": 1,
                        "status": "maintenance",
                        "publishedAt": "2024-05-01T00:00:00Z"
                    },
                    {
                        "_id": "p1",
                        "title": "Titanic",
                        "slug": { "current": "titanic" },
                        "description": "ML",
                        "order": 2
                    }
                ]
            }));
        })
        .await;

    let projects = client_for(&server, None).projects().await.unwrap();

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].slug(), "moomovies");
    assert_eq!(projects[0].status, ProjectStatus::Maintenance);
    assert!(projects[0].github_url.is_none());
    assert_eq!(projects[1].status, ProjectStatus::Completed);
}

#[tokio::test]
async fn slug_parameter_is_sent_as_json_string() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(QUERY_PATH).query_param("$slug", "\"moomovies\"");
            then.status(200).json_body(json!({ "result": null }));
        })
        .await;

    let project = client_for(&server, None).project("moomovies").await.unwrap();

    mock.assert_async().await;
    assert!(project.is_none());
}

#[tokio::test]
async fn category_parameter_uses_lowercase_names() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(QUERY_PATH).query_param("$category", "\"backend\"");
            then.status(200).json_body(json!({
                "result": [{ "_id": "b", "title": "Backend Development", "category": "backend", "skills": ["Rust"] }]
            }));
        })
        .await;

    let skills = client_for(&server, None).skills_by_category(SkillCategory::Backend).await.unwrap();

    mock.assert_async().await;
    assert_eq!(skills[0].category, SkillCategory::Backend);
    assert_eq!(skills[0].skills, ["Rust"]);
}

#[tokio::test]
async fn null_collection_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(QUERY_PATH);
            then.status(200).json_body(json!({ "result": null }));
        })
        .await;

    assert!(client_for(&server, None).tags().await.unwrap().is_empty());
}

#[tokio::test]
async fn bearer_token_is_forwarded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(QUERY_PATH).header("authorization", "Bearer secret-token");
            then.status(200).json_body(json!({ "result": { "_id": "about", "title": "About Me" } }));
        })
        .await;

    let about = client_for(&server, Some("secret-token")).about().await.unwrap();

    mock.assert_async().await;
    assert_eq!(about.map(|a| a.title), Some("About Me".to_owned()));
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(QUERY_PATH);
            then.status(500).body("upstream exploded");
        })
        .await;

    let err = client_for(&server, None).contact().await.unwrap_err();
    match err {
        ContentError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(QUERY_PATH);
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = client_for(&server, None).skills().await.unwrap_err();
    assert!(matches!(err, ContentError::Decode { .. }));
}
