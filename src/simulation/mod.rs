// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod absorption;
pub mod boundary;
pub mod emission;
pub mod forces;
pub mod simulation;

pub use simulation::*;

#[cfg(test)]
mod photon_tests;
