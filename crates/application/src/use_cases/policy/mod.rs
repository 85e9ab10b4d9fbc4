pub mod generate;
pub mod load;

pub use generate::GenerateConfigUseCase;
pub use load::LoadPolicyUseCase;
