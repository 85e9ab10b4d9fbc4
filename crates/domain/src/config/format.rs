use super::errors::LoadError;
use std::path::Path;

/// Serialization format of a policy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Paths without an extension are
    /// treated as JSON, which is what hosts ship as `config.json`.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(ConfigFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            Some(ext) => Err(LoadError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }
}
