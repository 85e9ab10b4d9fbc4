use crate::ports::ConfigSource;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use webgate_domain::{LoadError, PolicyConfig, PolicyDocument, TlsErrorPolicy};

pub struct LoadPolicyUseCase {
    source: Arc<dyn ConfigSource>,
}

impl LoadPolicyUseCase {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    /// Read, parse and validate the policy document.
    ///
    /// Any failure is returned as a single `LoadError`; the caller must not
    /// start a session without a policy.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn execute(&self) -> Result<Arc<PolicyConfig>, LoadError> {
        let text = self.source.read().await?;

        let config = PolicyDocument::parse(&text, self.source.format())
            .and_then(PolicyConfig::from_document)
            .map_err(|e| {
                error!(error = %e, "Policy document rejected");
                e
            })?;

        if config.tls_error_policy() == TlsErrorPolicy::Proceed {
            warn!(
                domain = config.domain(),
                "ignoreSSLErrors is enabled: certificate errors will be bypassed"
            );
        }

        info!(
            domain = config.domain(),
            start_url = config.start_url(),
            allowed_domains = config.allowed_domains().len(),
            block_media = config.block_media(),
            ad_blocker = config.ad_blocker(),
            orientation = %config.orientation(),
            "Policy loaded"
        );

        Ok(Arc::new(config))
    }
}
