//! Genome structures: regions, chromosomes and chromosome pairs.

mod chromosome;
pub mod description;
mod pair;
mod region;

pub use chromosome::Chromosome;
pub use pair::{ChromosomePair, Side};
pub use region::{Ordinal, Region, RegionFactory, RegionId, RegionKind};
