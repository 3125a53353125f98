// src/math/mod.rs

pub mod integrator;

pub use integrator::forward_euler;
