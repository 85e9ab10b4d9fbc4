pub mod check;
pub mod classify;
pub mod generate;

pub use check::run_check;
pub use classify::run_classify;
pub use generate::{run_generate, GenerateArgs};
