//! Random chromosome descriptions.
//!
//! Generated chromosomes start and end with a non-breakable intergenic
//! region and alternate genes with breakable intergenic regions in between:
//!
//! ```text
//! <start>(gene)inter(gene)inter(gene;)<end>
//! ```

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::base::Nucleotide;
use crate::genome::description::{
    ESSENTIAL_GENE_MARKER, LEFT_GENE_BOUNDARY, LEFT_NOBREAK_BOUNDARY, RIGHT_GENE_BOUNDARY,
    RIGHT_NOBREAK_BOUNDARY,
};
pub use crate::errors::GeneratorError;

/// Share of essential genes when they are enabled.
pub const DEFAULT_ESSENTIAL_GENE_PROBABILITY: f64 = 0.2;

const ALPHABET: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

/// Settings for random chromosome descriptions.
///
/// Length ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromosomeGenerator {
    pub number_of_genes: usize,
    pub gene_length: (usize, usize),
    pub intergenic_length: (usize, usize),
    /// Chance of a gene being essential; 0 disables essential genes.
    pub essential_gene_probability: f64,
}

impl Default for ChromosomeGenerator {
    fn default() -> Self {
        Self {
            number_of_genes: 100,
            gene_length: (10, 100),
            intergenic_length: (10, 100),
            essential_gene_probability: 0.0,
        }
    }
}

impl ChromosomeGenerator {
    pub fn new(number_of_genes: usize) -> Self {
        Self {
            number_of_genes,
            ..Default::default()
        }
    }

    pub fn with_gene_length(mut self, min: usize, max: usize) -> Self {
        self.gene_length = (min, max);
        self
    }

    pub fn with_intergenic_length(mut self, min: usize, max: usize) -> Self {
        self.intergenic_length = (min, max);
        self
    }

    /// Mark genes essential with the default probability.
    pub fn with_essential_genes(mut self) -> Self {
        self.essential_gene_probability = DEFAULT_ESSENTIAL_GENE_PROBABILITY;
        self
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (name, (min, max)) in [
            ("gene", self.gene_length),
            ("intergenic", self.intergenic_length),
        ] {
            if min == 0 || min > max {
                return Err(GeneratorError::InvalidRange { name, min, max });
            }
        }
        let p = self.essential_gene_probability;
        if !(p.is_finite() && (0.0..=1.0).contains(&p)) {
            return Err(GeneratorError::InvalidProbability(p));
        }
        Ok(())
    }

    /// Generate a description.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.validate()?;

        let mut description = String::new();
        self.push_nobreak(&mut description, rng);
        for i in 0..self.number_of_genes {
            if i > 0 {
                let len = rng.random_range(self.intergenic_length.0..=self.intergenic_length.1);
                push_symbols(&mut description, len, rng);
            }

            description.push(LEFT_GENE_BOUNDARY);
            let len = rng.random_range(self.gene_length.0..=self.gene_length.1);
            push_symbols(&mut description, len, rng);
            if self.essential_gene_probability > 0.0
                && rng.random_bool(self.essential_gene_probability)
            {
                description.push(ESSENTIAL_GENE_MARKER);
            }
            description.push(RIGHT_GENE_BOUNDARY);
        }
        self.push_nobreak(&mut description, rng);

        Ok(description)
    }

    fn push_nobreak<R: Rng + ?Sized>(&self, description: &mut String, rng: &mut R) {
        description.push(LEFT_NOBREAK_BOUNDARY);
        let len = rng.random_range(self.intergenic_length.0..=self.intergenic_length.1);
        push_symbols(description, len, rng);
        description.push(RIGHT_NOBREAK_BOUNDARY);
    }
}

fn push_symbols<R: Rng + ?Sized>(description: &mut String, len: usize, rng: &mut R) {
    description.extend((0..len).filter_map(|_| ALPHABET.choose(rng).map(|n| n.to_char())));
}
