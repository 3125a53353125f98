// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{InitialConditions, ModelParameters};
pub use scenario::Scenario;
