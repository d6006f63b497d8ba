//! Shared default values for the command line.
//! Simulation parameter defaults live in `SimulationParameters::default()`;
//! these cover what only the CLI adds.

pub const REPLICATES: usize = 1;

// Generator
pub const NUMBER_OF_GENES: usize = 100;
pub const MIN_GENE_LENGTH: usize = 10;
pub const MAX_GENE_LENGTH: usize = 100;
pub const MIN_INTERGENIC_LENGTH: usize = 10;
pub const MAX_INTERGENIC_LENGTH: usize = 100;
