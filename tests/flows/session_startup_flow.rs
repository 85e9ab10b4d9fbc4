/// Session Startup Flow Test
///
/// Build request → generated document → file → LoadPolicyUseCase → classifier

#[path = "../common/mod.rs"]
mod common;

use common::PolicyBuilder;
use std::sync::Arc;
use webgate_application::ports::RequestClassifierPort;
use webgate_application::use_cases::{GenerateConfigUseCase, LoadPolicyUseCase};
use webgate_domain::{BuildRequest, Disposition, LoadError, Orientation, TlsErrorPolicy};
use webgate_infrastructure::config_source::{FileConfigSource, InMemoryConfigSource};
use webgate_infrastructure::request_filter::RequestClassifier;

#[tokio::test]
async fn test_generated_document_drives_session() {
    let mut request = BuildRequest::new("https://news.example.com/today");
    request.additional_domains = vec!["img.example-cdn.net".to_string()];
    request.block_media = true;
    request.ads_blocker = true;
    request.view_mode = "LANDSCAPE".to_string();

    let document = GenerateConfigUseCase::new().execute(&request).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, document.to_json_pretty().unwrap()).unwrap();

    let policy = LoadPolicyUseCase::new(Arc::new(FileConfigSource::new(&path).unwrap()))
        .execute()
        .await
        .unwrap();

    assert_eq!(policy.start_url(), "https://news.example.com");
    assert_eq!(policy.orientation(), Orientation::Landscape);
    assert_eq!(policy.tls_error_policy(), TlsErrorPolicy::Reject);

    let classifier = RequestClassifier::new(policy);
    assert_eq!(
        classifier.classify("https://news.example.com/article/1", true),
        Disposition::Allow
    );
    assert_eq!(
        classifier.classify("https://img.example-cdn.net/hero.webp", false),
        Disposition::BlockMediaSubresource
    );
    assert_eq!(
        classifier.classify("https://www.google-analytics.com/analytics.js", false),
        Disposition::BlockAdSubresource
    );
    assert_eq!(
        classifier.classify("https://example.org/", true),
        Disposition::BlockDomainNotAllowed
    );
}

#[tokio::test]
async fn test_startup_aborts_without_allowed_domains() {
    let mut document = PolicyBuilder::new().document().clone();
    document.allowed_domains.clear();

    let source = InMemoryConfigSource::json(document.to_json_pretty().unwrap());
    let result = LoadPolicyUseCase::new(Arc::new(source)).execute().await;

    assert_eq!(result.unwrap_err(), LoadError::EmptyAllowedDomains);
}

#[tokio::test]
async fn test_startup_aborts_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileConfigSource::new(dir.path().join("missing.json")).unwrap();

    let result = LoadPolicyUseCase::new(Arc::new(source)).execute().await;
    assert!(matches!(result, Err(LoadError::Unreadable { .. })));
}
