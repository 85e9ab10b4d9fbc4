pub mod policy;
pub mod requests;

// Re-export use cases
pub use policy::{GenerateConfigUseCase, LoadPolicyUseCase};
pub use requests::{ClassifyRequestUseCase, RequestVerdict};
