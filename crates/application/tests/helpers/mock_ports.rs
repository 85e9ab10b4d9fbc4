#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use webgate_application::ports::{ConfigSource, RequestClassifierPort};
use webgate_domain::{
    ConfigFormat, Disposition, LoadError, MediaKind, PolicyConfig, PolicyDocument,
};

// ============================================================================
// Mock ConfigSource
// ============================================================================

pub struct MockConfigSource {
    text: Option<String>,
    format: ConfigFormat,
    reads: AtomicUsize,
}

impl MockConfigSource {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            format: ConfigFormat::Json,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn with_toml(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            format: ConfigFormat::Toml,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            text: None,
            format: ConfigFormat::Json,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigSource for MockConfigSource {
    fn describe(&self) -> String {
        "mock://config.json".to_string()
    }

    fn format(&self) -> ConfigFormat {
        self.format
    }

    async fn read(&self) -> Result<String, LoadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.text.clone().ok_or_else(|| LoadError::Unreadable {
            path: self.describe(),
            reason: "not found".to_string(),
        })
    }
}

// ============================================================================
// Mock RequestClassifierPort
// ============================================================================

/// Returns a fixed disposition for every request.
pub struct MockClassifier {
    disposition: Disposition,
    policy: PolicyConfig,
}

impl MockClassifier {
    pub fn always(disposition: Disposition) -> Arc<Self> {
        Arc::new(Self {
            disposition,
            policy: sample_policy(),
        })
    }
}

impl RequestClassifierPort for MockClassifier {
    fn classify(&self, _url: &str, _is_main_frame: bool) -> Disposition {
        self.disposition
    }

    fn is_media_url(&self, _url: &str) -> bool {
        self.disposition == Disposition::BlockMediaSubresource
    }

    fn is_ad_url(&self, _url: &str) -> bool {
        self.disposition == Disposition::BlockAdSubresource
    }

    fn media_kind(&self, _url: &str) -> Option<MediaKind> {
        (self.disposition == Disposition::BlockMediaSubresource).then_some(MediaKind::Image)
    }

    fn matching_ad_domain(&self, _url: &str) -> Option<&'static str> {
        (self.disposition == Disposition::BlockAdSubresource).then_some("doubleclick.net")
    }

    fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

pub fn sample_document() -> PolicyDocument {
    PolicyDocument {
        domain: "example.com".to_string(),
        start_url: "https://example.com".to_string(),
        allowed_domains: vec!["example.com".to_string()],
        block_media: true,
        ad_blocker: true,
        ignore_ssl_errors: false,
        orientation: "PORTRAIT".to_string(),
    }
}

pub fn sample_policy() -> PolicyConfig {
    PolicyConfig::from_document(sample_document()).unwrap()
}

pub fn sample_json() -> String {
    sample_document().to_json_pretty().unwrap()
}
