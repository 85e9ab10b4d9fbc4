use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use webgate_application::ports::ConfigSource;
use webgate_domain::{ConfigFormat, LoadError};

/// Policy document on disk. Format follows the file extension.
pub struct FileConfigSource {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let format = ConfigFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn format(&self) -> ConfigFormat {
        self.format
    }

    async fn read(&self) -> Result<String, LoadError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Unreadable {
                path: self.describe(),
                reason: e.to_string(),
            })?;

        debug!(
            path = %self.path.display(),
            format = self.format.as_str(),
            bytes = text.len(),
            "Policy document read"
        );
        Ok(text)
    }
}
