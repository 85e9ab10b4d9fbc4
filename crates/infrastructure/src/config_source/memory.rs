use async_trait::async_trait;
use std::sync::Arc;
use webgate_application::ports::ConfigSource;
use webgate_domain::{ConfigFormat, LoadError};

/// Policy document already in memory, e.g. an asset bundled into the host.
#[derive(Debug, Clone)]
pub struct InMemoryConfigSource {
    name: Arc<str>,
    text: Arc<str>,
    format: ConfigFormat,
}

impl InMemoryConfigSource {
    pub fn new(name: impl Into<Arc<str>>, text: impl Into<Arc<str>>, format: ConfigFormat) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            format,
        }
    }

    pub fn json(text: impl Into<Arc<str>>) -> Self {
        Self::new("memory://config.json", text, ConfigFormat::Json)
    }
}

#[async_trait]
impl ConfigSource for InMemoryConfigSource {
    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn format(&self) -> ConfigFormat {
        self.format
    }

    async fn read(&self) -> Result<String, LoadError> {
        Ok(self.text.to_string())
    }
}
