// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use websiftrs::application::use_cases::sift_use_case::{SiftError, SiftUseCase};
use websiftrs::domain::models::extraction::ExtractionRequest;
use websiftrs::domain::models::snapshot::ArchiveSource;
use websiftrs::domain::passive::source::PassiveSource;
use websiftrs::engines::reqwest_engine::ReqwestEngine;
use websiftrs::infrastructure::passive::archive_today::ArchiveTodaySource;
use websiftrs::infrastructure::passive::wayback::WaybackSource;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"
<html>
  <head><title>Contact</title></head>
  <body>
    <p>Mail us at a@b.com or call 555-123-4567.</p>
    <a href="mailto:c@d.org">mail</a>
    <a href="tel:+15551234567">call</a>
    <a href="https://example.com/profile">profile</a>
    <a href="https://example.com/profile">profile again</a>
    <script>var hidden = "ghost@machine.io";</script>
  </body>
</html>
"#;

fn all_categories() -> ExtractionRequest {
    ExtractionRequest {
        want_emails: true,
        want_phones: true,
        want_links: true,
    }
}

fn build_use_case(endpoint: String) -> SiftUseCase {
    let timeout = Duration::from_secs(5);
    let sources: Vec<Arc<dyn PassiveSource>> = vec![
        Arc::new(WaybackSource::new(
            endpoint.clone(),
            timeout,
            "websiftrs-test",
        )),
        Arc::new(ArchiveTodaySource::new(endpoint, timeout, "websiftrs-test")),
    ];
    let engine = Arc::new(ReqwestEngine::new(timeout, "websiftrs-test"));
    SiftUseCase::new(sources, engine)
}

#[tokio::test]
async fn test_snapshot_resolution_fetch_and_extraction() {
    let server = MockServer::start().await;
    let snapshot_url = format!("{}/snapshot", server.uri());

    let availability = json!({
        "archived_snapshots": {
            "closest": {
                "status": "200",
                "available": true,
                "url": snapshot_url,
                "timestamp": "20130919044612"
            }
        }
    });
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&availability))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;
    // The archive.today endpoint answers 200 from a non-archive host,
    // which must count as "no snapshot"
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let use_case = build_use_case(server.uri());

    let snapshots = use_case.resolve_sources("http://example.com/").await;
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].source, ArchiveSource::WaybackMachine);
    assert!(snapshots[0].captured_at.is_some());

    let report = use_case
        .run(&snapshots[0].snapshot_url, &all_categories())
        .await
        .expect("pipeline should succeed");

    assert_eq!(report.emails.len(), 2);
    assert!(report.emails.contains("a@b.com"));
    assert!(report.emails.contains("c@d.org"));
    assert!(!report.emails.contains("ghost@machine.io"));

    assert_eq!(report.phones.len(), 2);
    assert!(report.phones.contains("555-123-4567"));
    assert!(report.phones.contains("+15551234567"));

    assert_eq!(report.links.len(), 1);
    assert!(report.links.contains("https://example.com/profile"));
}

#[tokio::test]
async fn test_unreachable_sources_resolve_to_no_snapshots() {
    // Nothing is listening on port 1, both lookups degrade silently
    let use_case = build_use_case("http://127.0.0.1:1".to_string());

    let snapshots = use_case.resolve_sources("http://example.com/").await;
    assert!(snapshots.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_short_circuits_extraction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let use_case = build_use_case(server.uri());
    let result = use_case
        .run(&format!("{}/gone", server.uri()), &all_categories())
        .await;

    match result {
        Err(SiftError::NoContent { reason, .. }) => assert!(reason.contains("404")),
        other => panic!("expected NoContent, got {:?}", other),
    }
}

#[tokio::test]
async fn test_request_without_categories_is_rejected() {
    let use_case = build_use_case("http://127.0.0.1:1".to_string());
    let result = use_case
        .run("http://example.com/", &ExtractionRequest::default())
        .await;

    assert!(matches!(result, Err(SiftError::NothingRequested)));
}

#[tokio::test]
async fn test_empty_page_yields_empty_sets_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blank"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let use_case = build_use_case(server.uri());
    let report = use_case
        .run(&format!("{}/blank", server.uri()), &all_categories())
        .await
        .expect("an empty page is still fetchable");

    assert!(report.is_empty());
}
