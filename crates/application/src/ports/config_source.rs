use async_trait::async_trait;
use webgate_domain::{ConfigFormat, LoadError};

/// Where the policy document comes from (bundled asset, file, memory).
///
/// Reading is the only I/O on the policy path and happens once per session.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;

    fn format(&self) -> ConfigFormat;

    /// Raw document text. Missing or unreadable sources are `LoadError::Unreadable`.
    async fn read(&self) -> Result<String, LoadError>;
}
