// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::domain::models::snapshot::ArchiveSource;
    use crate::domain::passive::source::{PassiveSource, SnapshotLookup};
    use crate::infrastructure::passive::wayback::WaybackSource;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(endpoint: String) -> WaybackSource {
        WaybackSource::new(endpoint, Duration::from_secs(5), "websiftrs-test")
    }

    #[tokio::test]
    async fn test_lookup_found_with_timestamp() {
        let server = MockServer::start().await;
        let body = json!({
            "url": "http://example.com/",
            "archived_snapshots": {
                "closest": {
                    "status": "200",
                    "available": true,
                    "url": "http://web.archive.org/web/20130919044612/http://example.com/",
                    "timestamp": "20130919044612"
                }
            }
        });
        Mock::given(method("GET"))
            .and(path("/wayback/available"))
            .and(query_param("url", "http://example.com/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let lookup = source(server.uri()).lookup("http://example.com/").await;

        match lookup {
            SnapshotLookup::Found(snapshot) => {
                assert_eq!(snapshot.source, ArchiveSource::WaybackMachine);
                assert!(snapshot.snapshot_url.contains("web.archive.org"));
                assert!(snapshot.captured_at.is_some());
            }
            other => panic!("expected a snapshot, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_without_snapshots_is_not_found() {
        let server = MockServer::start().await;
        let body = json!({ "url": "http://example.com/", "archived_snapshots": {} });
        Mock::given(method("GET"))
            .and(path("/wayback/available"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let lookup = source(server.uri()).lookup("http://example.com/").await;
        assert!(matches!(lookup, SnapshotLookup::NotFound));
    }

    #[tokio::test]
    async fn test_lookup_empty_snapshot_url_is_not_found() {
        let server = MockServer::start().await;
        let body = json!({
            "archived_snapshots": { "closest": { "url": "", "timestamp": "20130919044612" } }
        });
        Mock::given(method("GET"))
            .and(path("/wayback/available"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let lookup = source(server.uri()).lookup("http://example.com/").await;
        assert!(matches!(lookup, SnapshotLookup::NotFound));
    }

    #[tokio::test]
    async fn test_lookup_non_200_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wayback/available"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let lookup = source(server.uri()).lookup("http://example.com/").await;
        assert!(matches!(lookup, SnapshotLookup::NotFound));
    }

    #[tokio::test]
    async fn test_lookup_malformed_json_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wayback/available"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let lookup = source(server.uri()).lookup("http://example.com/").await;
        assert!(matches!(lookup, SnapshotLookup::NotFound));
    }

    #[tokio::test]
    async fn test_lookup_refused_connection_is_unreachable() {
        let lookup = source("http://127.0.0.1:1".to_string())
            .lookup("http://example.com/")
            .await;
        assert!(matches!(lookup, SnapshotLookup::Unreachable(_)));
    }
}
