//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation.

pub use crate::errors::BuilderError;
use crate::simulation::{Simulation, SimulationParameters};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use genmod_sim::simulation::SimulationBuilder;
///
/// let sim = SimulationBuilder::new()
///     .left("<ACGT>TTG(CCA)GAT(GGA;)CA<TTAC>")
///     .right("<GATC>AAT(CGT)GCA<AGCT>")
///     .transformations(10)
///     .rate_of_translocations(30)
///     .longer_breaks_often(true)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(sim.schedule().len(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    // Required
    left: Option<String>,
    right: Option<String>,

    parameters: SimulationParameters,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing parameter set.
    pub fn with_parameters(parameters: SimulationParameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// Set the left chromosome description (required).
    pub fn left(mut self, description: impl Into<String>) -> Self {
        self.left = Some(description.into());
        self
    }

    /// Set the right chromosome description (required).
    pub fn right(mut self, description: impl Into<String>) -> Self {
        self.right = Some(description.into());
        self
    }

    pub fn transformations(mut self, count: usize) -> Self {
        self.parameters.number_of_transformations = count;
        self
    }

    /// Percentage of translocations, 0 to 100.
    pub fn rate_of_translocations(mut self, rate: u8) -> Self {
        self.parameters.rate_of_translocations = rate;
        self
    }

    pub fn random_error(mut self, probability: f64) -> Self {
        self.parameters.random_error = probability;
        self
    }

    pub fn longer_breaks_often(mut self, enabled: bool) -> Self {
        self.parameters.longer_breaks_often = enabled;
        self
    }

    /// Protect windows of `window_size` genes holding at least
    /// `min_essential` essential genes.
    pub fn essential_gene_window(mut self, window_size: usize, min_essential: usize) -> Self {
        self.parameters.use_essential_gene_pairs = true;
        self.parameters.essential_genes_window_size = Some(window_size);
        self.parameters.essential_genes_in_window = Some(min_essential);
        self
    }

    pub fn coexpression(mut self, enabled: bool) -> Self {
        self.parameters.use_coexpression = enabled;
        self
    }

    pub fn compute_diffs(mut self, enabled: bool) -> Self {
        self.parameters.compute_diffs = enabled;
        self
    }

    pub fn reversal_probability(mut self, probability: f64) -> Self {
        self.parameters.reversal_probability = probability;
        self
    }

    /// Set the random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.parameters.seed = Some(seed);
        self
    }

    /// Build the simulation.
    ///
    /// # Errors
    /// A missing chromosome, invalid parameters, or an unparsable description.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let left = self.left.ok_or(BuilderError::MissingRequired("left"))?;
        let right = self.right.ok_or(BuilderError::MissingRequired("right"))?;
        Ok(Simulation::new(self.parameters, &left, &right)?)
    }
}
