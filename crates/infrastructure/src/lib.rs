//! Webgate Infrastructure Layer
pub mod config_source;
pub mod request_filter;
