// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::domain::passive::source::{PassiveSource, SnapshotLookup};
    use crate::infrastructure::passive::archive_today::ArchiveTodaySource;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(endpoint: String) -> ArchiveTodaySource {
        ArchiveTodaySource::new(endpoint, Duration::from_secs(5), "websiftrs-test")
    }

    #[test]
    fn test_known_archive_hosts_are_recognized() {
        assert!(ArchiveTodaySource::is_archive_host(
            "https://archive.today/newest/http://example.com/"
        ));
        assert!(ArchiveTodaySource::is_archive_host(
            "https://archive.ph/abc12"
        ));
        assert!(ArchiveTodaySource::is_archive_host(
            "https://archive.is/abc12"
        ));
    }

    #[test]
    fn test_other_hosts_are_rejected() {
        assert!(!ArchiveTodaySource::is_archive_host("https://example.com/"));
        assert!(!ArchiveTodaySource::is_archive_host(
            "https://archive.example.net/"
        ));
        assert!(!ArchiveTodaySource::is_archive_host("not a url"));
    }

    #[tokio::test]
    async fn test_lookup_on_non_archive_host_is_not_found() {
        // A 200 served from a host outside the known variants is no snapshot
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("run", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let lookup = source(server.uri()).lookup("http://example.com/").await;
        assert!(matches!(lookup, SnapshotLookup::NotFound));
    }

    #[tokio::test]
    async fn test_lookup_non_200_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
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
