pub mod emit;
pub mod plan;
