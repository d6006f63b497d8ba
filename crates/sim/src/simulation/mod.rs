//! Simulation driver.
//!
//! - `Simulation`: runs a shuffled schedule of rearrangements on a pair
//! - `SimulationParameters`: serializable run settings
//! - `SimulationBuilder`: fluent construction with validation
//! - `ChromosomeGenerator`: random chromosome descriptions to start from

pub mod builder;
pub mod engine;
pub mod generate;
pub mod history;
pub mod parameters;

pub use builder::SimulationBuilder;
pub use engine::Simulation;
pub use generate::ChromosomeGenerator;
pub use history::{HistoryEntry, SimulationResult};
pub use parameters::SimulationParameters;
