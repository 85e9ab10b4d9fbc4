pub mod classify;

pub use classify::{ClassifyRequestUseCase, RequestVerdict};
