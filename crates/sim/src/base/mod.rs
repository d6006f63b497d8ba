//! Base types for symbol handling.
//!
//! Chromosome content is stored as raw ASCII symbols. The four DNA bases are
//! complemented on reversal, any other symbol is carried through untouched.

mod nucleotide;

pub use nucleotide::{Nucleotide, complement_symbol, reverse_complement};
