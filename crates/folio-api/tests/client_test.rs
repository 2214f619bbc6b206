#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use pretty_assertions::assert_eq;
use reqwest::Method;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_api::types::ContactMessage;
use folio_api::{ApiClient, Auth, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_reqwest(Some(&server.uri()), reqwest::Client::new()).unwrap();
    (server, client)
}

fn token() -> SecretString {
    SecretString::from("admin-token".to_owned())
}

// ── Configuration ───────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_base_url_never_calls_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::from_reqwest(None, reqwest::Client::new()).unwrap();
    let result = client.list_projects().await;

    assert!(matches!(result, Err(Error::ConfigMissing)), "got {result:?}");
}

// ── Reads ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_projects_bare_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "One", "media": [{ "id": 10, "image": "https://cdn/a.png", "order": 2 }] },
            { "id": 2, "title": "Two", "skills_list": ["Rust"] }
        ])))
        .mount(&server)
        .await;

    let projects = client.list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].media[0].order, Some(2));
    assert_eq!(projects[1].skills_list, json!(["Rust"]));
}

#[tokio::test]
async fn test_list_projects_paged_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "results": [{ "id": 7, "title": "Paged" }]
        })))
        .mount(&server)
        .await;

    let projects = client.list_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, 7);
}

#[tokio::test]
async fn test_http_status_error_carries_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found." })))
        .mount(&server)
        .await;

    let err = client.get_project("99", Auth::Public).await.unwrap_err();
    match err {
        Error::HttpStatus { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not found.");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/skills/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.list_skills().await.unwrap_err();
    assert!(
        matches!(err, Error::Deserialization { ref body, .. } if body.contains("oops")),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_fetch_json_returns_raw_document() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/core/about/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "title": "About Me" })),
        )
        .mount(&server)
        .await;

    let doc = client
        .fetch_json(Method::GET, "api/core/about/", None, Auth::Public)
        .await
        .unwrap();
    assert_eq!(doc["title"], "About Me");
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_authenticated_delete_sends_bearer() {
    let (server, client) = setup().await;
    let client = client.with_token(token());

    Mock::given(method("DELETE"))
        .and(path("/api/projects/5/"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_project("5").await.unwrap();
}

#[tokio::test]
async fn test_forbidden_maps_to_unauthorized() {
    let (server, client) = setup().await;
    let client = client.with_token(token());

    Mock::given(method("DELETE"))
        .and(path("/api/blog/posts/hello/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client.delete_post("hello").await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { status: 403 }), "got {err:?}");
}

#[tokio::test]
async fn test_required_auth_without_token_is_unauthorized_locally() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.delete_project("5").await.unwrap_err();
    assert!(err.is_unauthorized());
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_contact_posts_body_and_accepts_204() {
    let (server, client) = setup().await;

    let msg = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi".into(),
        message: "Hello there".into(),
    };

    Mock::given(method("POST"))
        .and(path("/api/core/contact/"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello there"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.send_contact(&msg).await.unwrap();
}

#[tokio::test]
async fn test_create_project_snapshot() {
    let (server, client) = setup().await;
    let client = client.with_token(token());

    Mock::given(method("POST"))
        .and(path("/api/projects/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12,
            "title": "New",
            "media": [],
            "skills_list": ["Rust", "Tokio"]
        })))
        .mount(&server)
        .await;

    let draft = folio_api::types::ProjectDraft {
        title: "New".into(),
        skills: vec!["Rust".into(), "Tokio".into()],
        ..Default::default()
    };
    let project = client.create_project(&draft).await.unwrap();

    insta::assert_json_snapshot!(project, @r###"
    {
      "id": 12,
      "title": "New",
      "description": null,
      "github_url": null,
      "live_url": null,
      "media": [],
      "skills_list": [
        "Rust",
        "Tokio"
      ],
      "links": null,
      "created_at": null,
      "updated_at": null
    }
    "###);
}

#[tokio::test]
async fn test_update_project_puts_draft_with_bearer() {
    let (server, client) = setup().await;
    let client = client.with_token(token());

    Mock::given(method("PUT"))
        .and(path("/api/projects/12/"))
        .and(header("authorization", "Bearer admin-token"))
        .and(body_json(json!({ "title": "Renamed" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 12, "title": "Renamed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let draft = folio_api::types::ProjectDraft {
        title: "Renamed".into(),
        ..Default::default()
    };
    let project = client.update_project("12", &draft).await.unwrap();
    assert_eq!(project.title, "Renamed");
}

#[tokio::test]
async fn test_post_writes_address_the_slug() {
    let (server, client) = setup().await;
    let client = client.with_token(token());

    Mock::given(method("POST"))
        .and(path("/api/blog/posts/"))
        .and(body_json(json!({ "title": "Hello", "content": "<p>Hi</p>" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 8, "title": "Hello", "slug": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/blog/posts/hello/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8, "title": "Hello again", "slug": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = folio_api::types::PostDraft {
        title: "Hello".into(),
        content: "<p>Hi</p>".into(),
    };
    let created = client.create_post(&draft).await.unwrap();
    assert_eq!(created.identifier(), "hello");

    let draft = folio_api::types::PostDraft {
        title: "Hello again".into(),
        ..Default::default()
    };
    let updated = client.update_post(&created.identifier(), &draft).await.unwrap();
    assert_eq!(updated.title, "Hello again");
}

#[tokio::test]
async fn test_get_post_is_public() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/blog/posts/hello/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8, "title": "Hello", "slug": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let post = client.get_post("hello").await.unwrap();
    assert_eq!(post.id, 8);
}
