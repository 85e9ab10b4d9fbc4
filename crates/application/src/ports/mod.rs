pub mod config_source;
pub mod request_classifier;

pub use config_source::ConfigSource;
pub use request_classifier::RequestClassifierPort;
