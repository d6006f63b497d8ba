//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use genmod_sim::prelude::*;
//!
//! let mut factory = RegionFactory::new();
//! let chr = Chromosome::parse("<AC>GT(CCA)T<GG>", false, &mut factory).unwrap();
//! assert_eq!(chr.gene_ordinals().len(), 1);
//! ```

pub use crate::errors;
pub use crate::base::Nucleotide;
pub use crate::evolution::{
    EssentialWindow, Inversion, RegionSelector, StepOutcome, TransformationKind, Translocation,
    TranslocationParameters,
};
pub use crate::genome::{Chromosome, ChromosomePair, Ordinal, Region, RegionFactory, RegionId, Side};
pub use crate::simulation::{
    ChromosomeGenerator, HistoryEntry, Simulation, SimulationBuilder, SimulationParameters,
    SimulationResult,
};
