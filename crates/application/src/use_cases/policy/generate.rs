use tracing::info;
use webgate_domain::{BuildRequest, DomainError, PolicyConfig, PolicyDocument};

#[derive(Default)]
pub struct GenerateConfigUseCase;

impl GenerateConfigUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Turn a build request into a policy document that is guaranteed to load.
    pub fn execute(&self, request: &BuildRequest) -> Result<PolicyDocument, DomainError> {
        let document = request.to_policy_document()?;
        PolicyConfig::from_document(document.clone())?;

        info!(
            domain = %document.domain,
            allowed_domains = document.allowed_domains.len(),
            "Policy document generated"
        );

        Ok(document)
    }
}
