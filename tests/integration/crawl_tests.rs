//! Integration tests for the crawler
//!
//! These tests use wiremock to serve small linked sites and run the full
//! fetch → extract → schedule → shortest path cycle end-to-end.

use linkpath::config::{Config, CrawlerConfig, ExtractConfig, FetchConfig};
use linkpath::crawler::{find_path, CrawlOutcome, FetchError};
use linkpath::path::PathOutcome;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration following /wiki links inside #content
fn create_test_config(batch_size: usize, max_concurrency: usize) -> Config {
    Config {
        crawler: CrawlerConfig {
            batch_size,
            max_concurrency,
            edge_weight: 1,
            max_rounds: Some(10),
        },
        fetch: FetchConfig {
            user_agent: "TestBot/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
            ..FetchConfig::default()
        },
        extract: ExtractConfig::default(),
    }
}

/// Mounts a wiki page whose #content links to the given article names
async fn mount_page(server: &MockServer, name: &str, links: &[&str]) {
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="/wiki/{0}">{0} article</a>"#, link))
        .collect();
    let body = format!(
        r#"<html><head><title>{0}</title></head><body>
        <nav><a href="/wiki/Sidebar">Sidebar</a></nav>
        <div id="content">{1}<a href="/about">About</a></div>
        </body></html>"#,
        name, anchors
    );

    Mock::given(method("GET"))
        .and(path(format!("/wiki/{}", name)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
        .mount(server)
        .await;
}

fn ids(outcome: &PathOutcome) -> Vec<String> {
    outcome
        .path()
        .expect("expected a path")
        .vertices
        .iter()
        .map(|v| v.id.clone())
        .collect()
}

#[tokio::test]
async fn test_finds_shortest_path_over_http() {
    let server = MockServer::start().await;
    let base = server.uri();

    // A -> B -> D is the only two-hop route; A -> C -> E -> D is longer
    mount_page(&server, "A", &["B", "C"]).await;
    mount_page(&server, "B", &["D"]).await;
    mount_page(&server, "C", &["E"]).await;
    mount_page(&server, "E", &["D"]).await;
    mount_page(&server, "D", &[]).await;

    let config = create_test_config(25, 10);
    let report = find_path(&config, &format!("{}/wiki/A", base), &format!("{}/wiki/D", base))
        .await
        .expect("run failed");

    assert_eq!(report.crawl.outcome, CrawlOutcome::Found);
    let outcome = report.path.as_ref().expect("search should have run");
    assert_eq!(
        ids(outcome),
        vec![
            format!("{}/wiki/A", base),
            format!("{}/wiki/B", base),
            format!("{}/wiki/D", base),
        ]
    );

    let path = outcome.path().unwrap();
    assert_eq!(path.cost, 2);
    assert_eq!(path.vertices[0].label, "Start Page");
    assert_eq!(path.vertices[1].label, "B article");

    // Links outside #content and outside /wiki were not followed
    assert!(!report.graph.contains(&format!("{}/wiki/Sidebar", base)));
    assert!(!report.graph.contains(&format!("{}/about", base)));
}

#[tokio::test]
async fn test_missing_page_is_skipped() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Gone has no mock, so wiremock answers 404
    mount_page(&server, "A", &["Gone", "B"]).await;
    mount_page(&server, "B", &["C"]).await;
    mount_page(&server, "C", &[]).await;

    let config = create_test_config(25, 4);
    let report = find_path(&config, &format!("{}/wiki/A", base), &format!("{}/wiki/C", base))
        .await
        .expect("run failed");

    assert_eq!(report.crawl.outcome, CrawlOutcome::Found);
    assert_eq!(report.crawl.failures.len(), 1);
    assert_eq!(report.crawl.failures[0].id, format!("{}/wiki/Gone", base));
    assert_eq!(
        report.crawl.failures[0].error,
        FetchError::Status { status: 404 }
    );
    assert!(report
        .graph
        .neighbors_of(&format!("{}/wiki/Gone", base))
        .is_empty());
    assert_eq!(report.path.unwrap().path().unwrap().cost, 2);
}

#[tokio::test]
async fn test_non_html_page_is_skipped() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "A", &["Image"]).await;
    Mock::given(method("GET"))
        .and(path("/wiki/Image"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8, 1, 2], "image/png"))
        .mount(&server)
        .await;

    let config = create_test_config(25, 4);
    let report = find_path(&config, &format!("{}/wiki/A", base), &format!("{}/wiki/Z", base))
        .await
        .expect("run failed");

    assert_eq!(report.crawl.outcome, CrawlOutcome::Exhausted);
    assert!(report.path.is_none());
    assert!(matches!(
        report.crawl.failures[0].error,
        FetchError::ContentMismatch { .. }
    ));
}

#[tokio::test]
async fn test_destination_never_linked() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "A", &["B"]).await;
    mount_page(&server, "B", &["A"]).await;

    let config = create_test_config(1, 1);
    let report = find_path(&config, &format!("{}/wiki/A", base), &format!("{}/wiki/Z", base))
        .await
        .expect("run failed");

    assert_eq!(report.crawl.outcome, CrawlOutcome::Exhausted);
    assert!(report.path.is_none());
    assert_eq!(report.crawl.visited(), 2);
    assert_eq!(report.crawl.rounds.len(), 2);
}

#[tokio::test]
async fn test_start_equals_destination_makes_no_requests() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let config = create_test_config(25, 10);
    let start = format!("{}/wiki/A", base);
    let report = find_path(&config, &start, &format!("{}#Intro", start))
        .await
        .expect("run failed");

    let path = report.path.unwrap();
    assert_eq!(ids(&path), vec![start]);
    assert_eq!(path.path().unwrap().cost, 0);
}

#[tokio::test]
async fn test_invalid_start_url_is_rejected() {
    let config = create_test_config(25, 10);
    let result = find_path(&config, "not a url", "https://example.com/").await;
    assert!(matches!(result, Err(linkpath::LinkPathError::UrlError(_))));
}
