use thiserror::Error;

/// Failure to produce a usable `PolicyConfig`.
///
/// Any of these is fatal to session start: the caller must abort rather than
/// continue without a policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Policy document '{path}' is unreadable: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed policy document: {0}")]
    Malformed(String),

    #[error("Unsupported policy document format: {0}")]
    UnsupportedFormat(String),

    #[error("startUrl cannot be empty")]
    EmptyStartUrl,

    #[error("allowedDomains must contain at least one entry")]
    EmptyAllowedDomains,

    #[error("allowedDomains[{index}] is blank")]
    BlankAllowedDomain { index: usize },
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}
