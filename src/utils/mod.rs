pub mod generator;
pub mod validation;
