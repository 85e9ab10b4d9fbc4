/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Options: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}
