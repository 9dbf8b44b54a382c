use notion_exposure_audit::client::{NotionClient, PageDetails, NOTION_VERSION};
use notion_exposure_audit::config::Config;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_config(server: &MockServer) -> Config {
    Config {
        token: "test-token".to_string(),
        api_base: server.uri(),
        delay_ms: 0,
        ..Config::default()
    }
}

fn detail_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "object": "page",
        "id": id,
        "url": "https://www.notion.so/Launch-Plan-abc123",
        "public_url": "https://doc.notion.site/abc123",
        "created_time": "2026-01-10T09:00:00.000Z",
        "last_edited_time": "2026-02-01T12:00:00.000Z",
        "created_by": { "object": "user", "id": "user-1" },
        "parent": { "type": "database_id", "database_id": "db-1" },
        "archived": false,
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [
                    { "type": "text", "plain_text": "Launch " },
                    { "type": "text", "plain_text": "Plan" }
                ]
            }
        }
    })
}

// --- Discovery pagination ---

#[tokio::test]
async fn pagination_carries_cursor_until_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(body_json(serde_json::json!({
            "filter": { "property": "object", "value": "page" },
            "page_size": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [ { "object": "page", "id": "p1" } ],
            "has_more": true,
            "next_cursor": "cur-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(body_json(serde_json::json!({
            "filter": { "property": "object", "value": "page" },
            "page_size": 100,
            "start_cursor": "cur-2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [ { "object": "page", "id": "p2" } ],
            "has_more": false,
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = NotionClient::new(&test_config(&server)).unwrap();
    let discovery = client.list_all_pages().await;

    let ids: Vec<&str> = discovery.stubs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert!(!discovery.truncated);
}

#[tokio::test]
async fn discovery_failure_keeps_partial_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(body_json(serde_json::json!({
            "filter": { "property": "object", "value": "page" },
            "page_size": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [ { "object": "page", "id": "p1" } ],
            "has_more": true,
            "next_cursor": "cur-2"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(body_json(serde_json::json!({
            "filter": { "property": "object", "value": "page" },
            "page_size": 100,
            "start_cursor": "cur-2"
        })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = NotionClient::new(&test_config(&server)).unwrap();
    let discovery = client.list_all_pages().await;

    assert_eq!(discovery.stubs.len(), 1);
    assert_eq!(discovery.stubs[0].id, "p1");
    assert!(discovery.truncated);
}

#[tokio::test]
async fn discovery_sends_bearer_token_and_api_version() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Notion-Version", NOTION_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [],
            "has_more": false,
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = NotionClient::new(&test_config(&server)).unwrap();
    let discovery = client.list_all_pages().await;

    // A header mismatch would leave the mock unmatched and truncate discovery.
    assert!(!discovery.truncated);
    assert!(discovery.stubs.is_empty());
}

// --- Detail fetch ---

#[tokio::test]
async fn fetch_page_parses_full_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/p1"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Notion-Version", NOTION_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json("p1")))
        .mount(&server)
        .await;

    let client = NotionClient::new(&test_config(&server)).unwrap();
    let details = client.fetch_page("p1").await.expect("fetch should succeed");

    assert_eq!(details.id, "p1");
    assert_eq!(details.url, "https://www.notion.so/Launch-Plan-abc123");
    assert_eq!(
        details.public_url.as_deref(),
        Some("https://doc.notion.site/abc123")
    );
    assert_eq!(details.created_by.id, "user-1");
    assert_eq!(details.parent.kind, "database_id");
    assert!(!details.archived);
    assert_eq!(details.title(), "Launch Plan");
}

#[tokio::test]
async fn fetch_page_non_success_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = NotionClient::new(&test_config(&server)).unwrap();
    assert!(client.fetch_page("missing").await.is_none());
}

#[tokio::test]
async fn fetch_page_undecodable_body_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = NotionClient::new(&test_config(&server)).unwrap();
    assert!(client.fetch_page("p1").await.is_none());
}

// --- Title extraction ---

#[test]
fn title_concatenates_rich_text_fragments() {
    let details: PageDetails = serde_json::from_value(detail_json("p1")).unwrap();
    assert_eq!(details.title(), "Launch Plan");
}

#[test]
fn title_falls_back_to_untitled() {
    let details: PageDetails = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "url": "https://www.notion.so/p1",
        "properties": {
            "Status": { "type": "select", "select": { "name": "Done" } }
        }
    }))
    .unwrap();
    assert_eq!(details.title(), "Untitled");
}

#[test]
fn title_with_empty_fragment_array_is_untitled() {
    let details: PageDetails = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "url": "https://www.notion.so/p1",
        "properties": {
            "Name": { "type": "title", "title": [] }
        }
    }))
    .unwrap();
    assert_eq!(details.title(), "Untitled");
}
