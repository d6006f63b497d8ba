//! Comparison of evolved chromosomes against their starting point.

pub mod distance;

pub use distance::{edit_distance, pair_distance};
