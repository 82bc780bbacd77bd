//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow: client config → paged collection → analysis,
//! plus the listing and content endpoints.

use lima_census::http::HttpClient;
use lima_census::{ClientConfig, Collector, GitHubClient, SearchStats};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn no_pacing_config(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .base_url(base_url)
        .token("test-token")
        .no_pacing()
        .build()
        .unwrap()
}

fn items(count: usize, offset: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({ "path": format!("templates/file-{}.yml", offset + i) }))
        .collect()
}

fn search_page(total: u64, items: Vec<Value>) -> Value {
    json!({ "total_count": total, "items": items })
}

// ============================================================================
// Collector Properties
// ============================================================================

#[tokio::test]
async fn test_zero_limit_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(10, items(10, 0))))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(no_pacing_config(&mock_server.uri()));
    let results: Vec<Value> = Collector::new(&client)
        .collect("/search/code", "minimumLimaVersion", 0)
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_small_result_set_needs_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(3, items(3, 0))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(no_pacing_config(&mock_server.uri()));
    let results: Vec<Value> = Collector::new(&client)
        .collect("/search/code", "minimumLimaVersion", 100)
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_three_pages_collect_in_arrival_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(250, items(100, 0))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(250, items(100, 100))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(250, items(50, 200))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(no_pacing_config(&mock_server.uri()));
    let results: Vec<Value> = Collector::new(&client)
        .collect("/search/code", "minimumLimaVersion", 250)
        .await
        .unwrap();

    assert_eq!(results.len(), 250);
    for (i, record) in results.iter().enumerate() {
        assert_eq!(
            record["path"].as_str().unwrap(),
            format!("templates/file-{i}.yml")
        );
    }
}

#[tokio::test]
async fn test_throttled_page_ends_run_with_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(250, items(100, 0))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(no_pacing_config(&mock_server.uri()));
    let results: Vec<Value> = Collector::new(&client)
        .collect("/search/code", "minimumLimaVersion", 250)
        .await
        .unwrap();

    assert_eq!(results.len(), 100);
}

#[tokio::test]
async fn test_rejected_page_ends_run_with_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(250, items(100, 0))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Validation Failed"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(no_pacing_config(&mock_server.uri()));
    let results: Vec<Value> = Collector::new(&client)
        .collect("/search/code", "minimumLimaVersion", 250)
        .await
        .unwrap();

    assert_eq!(results.len(), 100);
}

#[tokio::test]
async fn test_server_error_discards_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(250, items(100, 0))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(no_pacing_config(&mock_server.uri()));
    let result: lima_census::Result<Vec<Value>> = Collector::new(&client)
        .collect("/search/code", "minimumLimaVersion", 250)
        .await;

    assert!(matches!(
        result,
        Err(lima_census::Error::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_limit_overshoots_by_up_to_one_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(300, items(100, 0))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(no_pacing_config(&mock_server.uri()));
    let results: Vec<Value> = Collector::new(&client)
        .collect("/search/code", "minimumLimaVersion", 50)
        .await
        .unwrap();

    // A full page came back for a 50-record request; nothing is trimmed.
    assert_eq!(results.len(), 100);
}

// ============================================================================
// End-to-End Survey Scenario
// ============================================================================

#[tokio::test]
async fn test_survey_of_57_templates_completes_in_one_request() {
    let mock_server = MockServer::start().await;

    let hits: Vec<Value> = (0..57)
        .map(|i| {
            json!({
                "path": format!("templates/template-{i}.yml"),
                "repository": {
                    "full_name": format!("owner-{}/lima-templates", i % 19),
                    "name": "lima-templates",
                    "owner": { "login": format!("owner-{}", i % 19) },
                    "fork": i % 10 == 0
                }
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("q", "minimumLimaVersion extension:yml"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .and(header("Authorization", "token test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "total_count": 57, "items": hits })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // Real 2s search interval: a single-page run must not wait it out.
    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .token("test-token")
        .build()
        .unwrap();
    let client = GitHubClient::new(config);

    let start = Instant::now();
    let results = client
        .search_code("minimumLimaVersion extension:yml", 200)
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(results.len(), 57);
    assert!(
        elapsed < Duration::from_secs(1),
        "single-page run waited {elapsed:?}"
    );

    let stats = SearchStats::from_results(&results, Some("lima-vm/lima"));
    assert_eq!(stats.total_files, 57);
    assert_eq!(stats.unique_owners(), 19);
    assert_eq!(stats.unique_paths(), 57);
    assert_eq!(stats.origin_files, 0);
    assert_eq!(stats.fork_files, 6);
    assert_eq!(stats.external_files(), 57);
}

// ============================================================================
// Pacing
// ============================================================================

#[tokio::test]
async fn test_successive_pages_are_spaced_by_the_interval() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(4, items(2, 0))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(4, items(2, 2))))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .token("test-token")
        .per_page(2)
        .search_interval(Duration::from_millis(300))
        .build()
        .unwrap();
    let http = HttpClient::new(config);

    let start = Instant::now();
    let results: Vec<Value> = Collector::new(&http)
        .collect("/search/code", "minimumLimaVersion", 4)
        .await
        .unwrap();

    assert_eq!(results.len(), 4);
    assert!(
        start.elapsed() >= Duration::from_millis(250),
        "second page was not paced"
    );
}

// ============================================================================
// Listing and Content Endpoints
// ============================================================================

#[tokio::test]
async fn test_fork_survey_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/lima-vm/lima"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "full_name": "lima-vm/lima",
            "name": "lima",
            "owner": { "login": "lima-vm" },
            "fork": false,
            "forks_count": 3,
            "stargazers_count": 15000
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/lima-vm/lima/forks"))
        .and(query_param("sort", "stargazers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "full_name": "alice/lima",
                "name": "lima",
                "owner": { "login": "alice" },
                "fork": true,
                "stargazers_count": 40,
                "updated_at": "2024-01-15T10:30:00Z"
            },
            {
                "full_name": "bob/lima",
                "name": "lima",
                "owner": { "login": "bob" },
                "fork": true,
                "stargazers_count": 2,
                "updated_at": "2023-11-02T08:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GitHubClient::new(no_pacing_config(&mock_server.uri()));

    let parent = client.get_repository("lima-vm", "lima").await.unwrap();
    assert_eq!(parent.stargazers_count, 15000);

    let forks = client.list_forks("lima-vm", "lima", 100).await.unwrap();
    assert_eq!(forks.len(), 2);
    assert_eq!(forks[0].full_name, "alice/lima");
    assert!(forks[0].fork);
}

#[tokio::test]
async fn test_template_content_fetch_and_decode() {
    let mock_server = MockServer::start().await;

    // "images:\n- location: test\n" in the service's wrapped base64 form.
    Mock::given(method("GET"))
        .and(path("/repos/lima-vm/lima/contents/templates/default.yaml"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "encoding": "base64",
            "content": "aW1hZ2VzOgot\nIGxvY2F0aW9uOiB0ZXN0Cg==\n"
        })))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::new(no_pacing_config(&mock_server.uri()));
    let content = client
        .get_file_content("lima-vm", "lima", "templates/default.yaml")
        .await
        .unwrap();

    assert_eq!(content, "images:\n- location: test\n");
}
