//! Configuration module for Webgate
//!
//! - `policy`: The request policy document and its validated form
//! - `orientation`: Display orientation constraint
//! - `format`: Policy document formats (JSON, TOML)
//! - `logging`: Logging settings
//! - `errors`: Load errors

pub mod errors;
pub mod format;
pub mod logging;
pub mod orientation;
pub mod policy;

pub use errors::LoadError;
pub use format::ConfigFormat;
pub use logging::LoggingConfig;
pub use orientation::Orientation;
pub use policy::{PolicyConfig, PolicyDocument, TlsErrorPolicy};
