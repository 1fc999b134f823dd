// Unit tests for the SerpAPI client.
//
// HTTP-level tests run against a local wiremock server; every failure
// mode must come back as an empty URL list.

use serp_similarity::serpapi::client::{SearchResponse, SerpApiClient};
use serp_similarity::serpapi::traits::{ResultFetcher, SearchQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn organic_body(links: &[&str]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = links
        .iter()
        .enumerate()
        .map(|(i, link)| serde_json::json!({"position": i + 1, "link": link, "title": "t"}))
        .collect();
    serde_json::json!({
        "search_metadata": {"status": "Success"},
        "organic_results": results
    })
}

async fn client_for(server: &MockServer) -> SerpApiClient {
    SerpApiClient::new(&format!("{}/search", server.uri())).unwrap()
}

// ============================================================
// Response deserialization
// ============================================================

#[test]
fn deserialize_ignores_unknown_fields() {
    let json = r#"{
        "search_metadata": {"id": "abc"},
        "ads": [{"link": "https://ad.example/"}],
        "organic_results": [{"position": 1, "link": "https://a.example/", "snippet": "s"}]
    }"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.organic_urls(), vec!["https://a.example/"]);
}

#[test]
fn entries_without_link_are_skipped() {
    let json = r#"{"organic_results": [
        {"position": 1},
        {"position": 2, "link": "https://b.example/"}
    ]}"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.organic_urls(), vec!["https://b.example/"]);
}

#[test]
fn empty_organic_results() {
    let resp: SearchResponse = serde_json::from_str(r#"{"organic_results": []}"#).unwrap();
    assert!(resp.organic_urls().is_empty());
}

// ============================================================
// HTTP behavior
// ============================================================

#[tokio::test]
async fn sends_fixed_parameters_and_locale() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("engine", "google"))
        .and(query_param("q", "best running shoes"))
        .and(query_param("location", "IN"))
        .and(query_param("gl", "IN"))
        .and(query_param("google_domain", "google.com"))
        .and(query_param("hl", "en"))
        .and(query_param("num", "10"))
        .and(query_param("api_key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(organic_body(&["https://a.example/", "https://b.example/"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = SearchQuery::new("test-key", "best running shoes", "in");
    let urls = client.fetch_organic_urls(&query).await;

    assert_eq!(urls, vec!["https://a.example/", "https://b.example/"]);
}

#[tokio::test]
async fn error_body_yields_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Invalid API key."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let urls = client
        .fetch_organic_urls(&SearchQuery::new("bad", "rust", "US"))
        .await;
    assert!(urls.is_empty());

    let resp = client
        .search(&SearchQuery::new("bad", "rust", "US"))
        .await
        .unwrap();
    assert_eq!(resp.error.as_deref(), Some("Invalid API key."));
}

#[tokio::test]
async fn non_json_body_yields_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = SearchQuery::new("key", "rust", "US");

    assert!(client.search(&query).await.is_err());
    assert!(client.fetch_organic_urls(&query).await.is_empty());
}

#[tokio::test]
async fn unreachable_server_yields_empty_list() {
    // Port 1 is reserved and nothing listens there
    let client = SerpApiClient::new("http://127.0.0.1:1/search").unwrap();
    let urls = client
        .fetch_organic_urls(&SearchQuery::new("key", "rust", "US"))
        .await;
    assert!(urls.is_empty());
}

#[tokio::test]
async fn more_than_ten_results_are_capped() {
    let server = MockServer::start().await;
    let links: Vec<String> = (1..=12).map(|i| format!("https://{i}.example/")).collect();
    let link_refs: Vec<&str> = links.iter().map(String::as_str).collect();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic_body(&link_refs)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let urls = client
        .fetch_organic_urls(&SearchQuery::new("key", "rust", "US"))
        .await;
    assert_eq!(urls.len(), 10);
    assert_eq!(urls[9], "https://10.example/");
}
