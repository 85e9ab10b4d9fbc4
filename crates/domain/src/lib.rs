//! Webgate Domain Layer
pub mod build_request;
pub mod config;
pub mod disposition;
pub mod errors;
pub mod media_kind;
pub mod validators;

pub use build_request::BuildRequest;
pub use config::{
    ConfigFormat, LoadError, LoggingConfig, Orientation, PolicyConfig, PolicyDocument,
    TlsErrorPolicy,
};
pub use disposition::{Disposition, HostAction, SyntheticResponse, URL_NOT_ALLOWED_NOTICE};
pub use errors::DomainError;
pub use media_kind::MediaKind;
