// src/lib.rs

//! 前進Euler法によるSIR感染症モデルの数値積分

pub mod config;
pub mod error;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{InitialConditions, ModelParameters, Scenario};
pub use error::{Result, SimError};
pub use models::{Compartment, SirState};
pub use simulation::{EulerSir, Record, Trajectory};
