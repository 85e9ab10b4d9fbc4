#![allow(dead_code)]

use std::sync::Arc;
use webgate_domain::{PolicyConfig, PolicyDocument};

/// Common request URLs
pub struct TestUrls;

impl TestUrls {
    pub fn page() -> &'static str {
        "https://example.com/page"
    }

    pub fn foreign_page() -> &'static str {
        "https://evil.test/page"
    }

    pub fn banner() -> &'static str {
        "https://example.com/banner.jpg"
    }

    pub fn resized_image() -> &'static str {
        "https://x.test/img.png?w=100"
    }

    pub fn ad() -> &'static str {
        "https://doubleclick.net/ad"
    }

    pub fn ad_in_path() -> &'static str {
        "https://example.com/googletagmanager.com"
    }

    pub fn foreign_script() -> &'static str {
        "https://cdn.other.test/app.js"
    }

    pub fn youtube_embed() -> &'static str {
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    }
}

pub struct PolicyBuilder {
    document: PolicyDocument,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            document: PolicyDocument {
                domain: "example.com".to_string(),
                start_url: "https://example.com".to_string(),
                allowed_domains: vec!["example.com".to_string()],
                block_media: false,
                ad_blocker: false,
                ignore_ssl_errors: false,
                orientation: "AUTO".to_string(),
            },
        }
    }

    pub fn allowed_domains(mut self, domains: &[&str]) -> Self {
        self.document.allowed_domains = domains.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn block_media(mut self, on: bool) -> Self {
        self.document.block_media = on;
        self
    }

    pub fn ad_blocker(mut self, on: bool) -> Self {
        self.document.ad_blocker = on;
        self
    }

    pub fn document(&self) -> &PolicyDocument {
        &self.document
    }

    pub fn build(self) -> Arc<PolicyConfig> {
        Arc::new(PolicyConfig::from_document(self.document).unwrap())
    }
}

/// `{allowedDomains: ["example.com"], blockMedia: true, adBlocker: true}`
pub fn scenario_policy() -> Arc<PolicyConfig> {
    PolicyBuilder::new()
        .allowed_domains(&["example.com"])
        .block_media(true)
        .ad_blocker(true)
        .build()
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
