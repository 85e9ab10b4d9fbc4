pub mod config;
pub mod logging;

pub use config::load_policy;
pub use logging::init_logging;
