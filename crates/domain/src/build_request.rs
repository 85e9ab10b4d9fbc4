use crate::config::PolicyDocument;
use crate::errors::DomainError;
use crate::validators::{extract_domain, validate_url};
use serde::{Deserialize, Serialize};

/// Request to generate a policy document for a new restricted browsing shell.
///
/// Only `url` is required; the remaining knobs default to "off".
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub url: String,

    #[serde(default)]
    pub additional_domains: Vec<String>,

    #[serde(default)]
    pub block_media: bool,

    /// Free-form orientation keyword (default: "AUTO")
    #[serde(default = "default_view_mode")]
    pub view_mode: String,

    /// Start URL override. Empty means `https://{domain}`.
    #[serde(default)]
    pub start_up_url: String,

    #[serde(default)]
    pub ads_blocker: bool,

    #[serde(default)]
    pub no_ssl_mode: bool,
}

fn default_view_mode() -> String {
    "AUTO".to_string()
}

impl BuildRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            additional_domains: vec![],
            block_media: false,
            view_mode: default_view_mode(),
            start_up_url: String::new(),
            ads_blocker: false,
            no_ssl_mode: false,
        }
    }

    pub fn domain(&self) -> &str {
        extract_domain(self.url.trim())
    }

    /// Produce the policy document for this request. The primary domain is
    /// always the first allowed domain.
    pub fn to_policy_document(&self) -> Result<PolicyDocument, DomainError> {
        let url = self.url.trim();
        validate_url(url).map_err(DomainError::InvalidBuildRequest)?;

        let domain = extract_domain(url);
        if domain.is_empty() {
            return Err(DomainError::InvalidBuildRequest(format!(
                "no domain in URL '{url}'"
            )));
        }

        let start_url = if self.start_up_url.trim().is_empty() {
            format!("https://{domain}")
        } else {
            self.start_up_url.trim().to_string()
        };

        let mut allowed_domains = Vec::with_capacity(1 + self.additional_domains.len());
        allowed_domains.push(domain.to_string());
        allowed_domains.extend(
            self.additional_domains
                .iter()
                .map(|d| d.trim())
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        );

        Ok(PolicyDocument {
            domain: domain.to_string(),
            start_url,
            allowed_domains,
            block_media: self.block_media,
            ad_blocker: self.ads_blocker,
            ignore_ssl_errors: self.no_ssl_mode,
            orientation: self.view_mode.clone(),
        })
    }
}
