use super::errors::LoadError;
use super::format::ConfigFormat;
use super::orientation::Orientation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Wire shape of the policy document shipped to the host (`config.json`).
///
/// Every field is required. Unknown fields are ignored so that documents
/// produced by newer generators still load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    pub domain: String,
    pub start_url: String,
    pub allowed_domains: Vec<String>,
    pub block_media: bool,
    pub ad_blocker: bool,
    /// Written as `ignoreSSLErrors`, the key the host reads.
    #[serde(rename = "ignoreSSLErrors", alias = "ignoreSslErrors")]
    pub ignore_ssl_errors: bool,
    pub orientation: String,
}

impl PolicyDocument {
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, LoadError> {
        match format {
            ConfigFormat::Json => Ok(serde_json::from_str(text)?),
            ConfigFormat::Toml => Ok(toml::from_str(text)?),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// What the host transport does when certificate validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsErrorPolicy {
    /// Apply default validation and abort the load.
    Reject,
    /// Bypass validation and continue. This is a security downgrade.
    Proceed,
}

/// Validated, immutable request policy.
///
/// Built once at session start and shared read-only (usually behind an `Arc`)
/// by every classification call. There is no way to obtain a partially
/// populated instance: construction either validates every field or fails
/// with a `LoadError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    domain: Arc<str>,
    start_url: Arc<str>,
    allowed_domains: Vec<Arc<str>>,
    block_media: bool,
    ad_blocker: bool,
    ignore_ssl_errors: bool,
    orientation: Orientation,
}

impl PolicyConfig {
    /// Parse and validate a policy document in one step.
    pub fn load(text: &str, format: ConfigFormat) -> Result<Self, LoadError> {
        let document = PolicyDocument::parse(text, format)?;
        Self::from_document(document)
    }

    pub fn from_document(document: PolicyDocument) -> Result<Self, LoadError> {
        if document.start_url.trim().is_empty() {
            return Err(LoadError::EmptyStartUrl);
        }
        if document.allowed_domains.is_empty() {
            return Err(LoadError::EmptyAllowedDomains);
        }
        // A blank entry is a substring of every URL and would disable the allow-list.
        if let Some(index) = document
            .allowed_domains
            .iter()
            .position(|d| d.trim().is_empty())
        {
            return Err(LoadError::BlankAllowedDomain { index });
        }

        Ok(Self {
            domain: Arc::from(document.domain),
            start_url: Arc::from(document.start_url),
            allowed_domains: document
                .allowed_domains
                .into_iter()
                .map(Arc::<str>::from)
                .collect(),
            block_media: document.block_media,
            ad_blocker: document.ad_blocker,
            ignore_ssl_errors: document.ignore_ssl_errors,
            orientation: Orientation::from_keyword(&document.orientation),
        })
    }

    pub fn to_document(&self) -> PolicyDocument {
        PolicyDocument {
            domain: self.domain.to_string(),
            start_url: self.start_url.to_string(),
            allowed_domains: self.allowed_domains.iter().map(|d| d.to_string()).collect(),
            block_media: self.block_media,
            ad_blocker: self.ad_blocker,
            ignore_ssl_errors: self.ignore_ssl_errors,
            orientation: self.orientation.as_str().to_string(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    pub fn allowed_domains(&self) -> &[Arc<str>] {
        &self.allowed_domains
    }

    pub fn block_media(&self) -> bool {
        self.block_media
    }

    pub fn ad_blocker(&self) -> bool {
        self.ad_blocker
    }

    pub fn ignore_ssl_errors(&self) -> bool {
        self.ignore_ssl_errors
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_force_portrait(&self) -> bool {
        self.orientation == Orientation::Portrait
    }

    pub fn is_force_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }

    /// Orientation the host should request. Fullscreen video releases the lock;
    /// leaving fullscreen restores the configured one.
    pub fn requested_orientation(&self, fullscreen: bool) -> Orientation {
        if fullscreen {
            Orientation::Unspecified
        } else {
            self.orientation
        }
    }

    pub fn tls_error_policy(&self) -> TlsErrorPolicy {
        if self.ignore_ssl_errors {
            TlsErrorPolicy::Proceed
        } else {
            TlsErrorPolicy::Reject
        }
    }

    /// True iff `url` is non-empty and contains at least one allowed domain
    /// as a literal, case-sensitive substring.
    #[inline]
    pub fn is_url_allowed(&self, url: &str) -> bool {
        self.matching_allowed_domain(url).is_some()
    }

    /// First allowed-domain entry, in configured order, contained in `url`.
    #[inline]
    pub fn matching_allowed_domain(&self, url: &str) -> Option<&str> {
        if url.is_empty() {
            return None;
        }
        self.allowed_domains
            .iter()
            .map(|d| &**d)
            .find(|d| url.contains(d))
    }
}
