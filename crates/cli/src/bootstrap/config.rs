use std::path::Path;
use std::sync::Arc;
use tracing::error;
use webgate_application::use_cases::LoadPolicyUseCase;
use webgate_domain::PolicyConfig;
use webgate_infrastructure::config_source::FileConfigSource;

/// Load the session policy. Any failure aborts startup.
pub async fn load_policy(config_path: &Path) -> anyhow::Result<Arc<PolicyConfig>> {
    let source = FileConfigSource::new(config_path)?;

    let policy = LoadPolicyUseCase::new(Arc::new(source))
        .execute()
        .await
        .map_err(|e| {
            error!(config_file = %config_path.display(), error = %e, "Failed to load policy");
            e
        })?;

    Ok(policy)
}
