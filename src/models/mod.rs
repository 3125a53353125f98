// src/models/mod.rs

pub mod sir;

pub use sir::{derivative, Compartment, SirState};
