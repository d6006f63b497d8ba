//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for simulating structural
//! rearrangements of a chromosome pair. It includes modules for describing
//! chromosomes as region lists, selecting break regions, executing
//! inversions and translocations, and running the simulation driver.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::Nucleotide;
