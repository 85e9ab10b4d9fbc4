use crate::config::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid build request: {0}")]
    InvalidBuildRequest(String),

    #[error("Policy load failed: {0}")]
    Load(#[from] LoadError),
}
