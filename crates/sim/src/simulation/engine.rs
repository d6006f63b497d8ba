//! Simulation engine.
//!
//! Runs a shuffled schedule of inversions and translocations on a chromosome
//! pair and records the gene order after every step.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info, warn};

use crate::analysis::pair_distance;
use crate::errors::{ParameterError, SimulationError, TransformationError};
use crate::evolution::{Inversion, StepOutcome, TransformationKind, Translocation};
use crate::genome::{Chromosome, ChromosomePair, RegionFactory, Side};
use crate::simulation::{HistoryEntry, SimulationParameters, SimulationResult};

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    parameters: SimulationParameters,
    /// Source of handles and ordinals for both chromosomes
    factory: RegionFactory,
    original: ChromosomePair,
    pair: ChromosomePair,
    inversion: Inversion,
    translocation: Translocation,
    schedule: Vec<TransformationKind>,
    history: Vec<HistoryEntry>,
    /// Random number generator (using Xoshiro256++ for better performance)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation from two chromosome descriptions.
    pub fn new(
        parameters: SimulationParameters,
        left_description: &str,
        right_description: &str,
    ) -> Result<Self, SimulationError> {
        let mut factory = RegionFactory::new();
        let coexpression = parameters.use_coexpression;

        let parse = |side: Side, description: &str, factory: &mut RegionFactory| {
            Chromosome::parse(description, coexpression, factory)
                .map_err(|source| SimulationError::Description { side, source })
        };
        let left = parse(Side::Left, left_description, &mut factory)?;
        let right = parse(Side::Right, right_description, &mut factory)?;

        Self::from_pair(parameters, ChromosomePair::new(left, right), factory)
    }

    /// Create a simulation from an already built pair.
    ///
    /// `factory` must be the one the pair's regions were created with.
    pub fn from_pair(
        parameters: SimulationParameters,
        pair: ChromosomePair,
        factory: RegionFactory,
    ) -> Result<Self, SimulationError> {
        parameters.validate()?;

        let selector = parameters.selector()?;
        let translocation = Translocation::new(selector.clone())
            .with_reversal_probability(parameters.reversal_probability)
            .map_err(|_| {
                ParameterError::InvalidProbability(
                    "reversal_probability",
                    parameters.reversal_probability,
                )
            })?;

        // Create RNG from seed or thread_rng
        let mut rng = if let Some(seed) = parameters.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };
        let schedule = parameters.schedule(&mut rng);

        Ok(Self {
            original: pair.clone(),
            pair,
            factory,
            inversion: Inversion::new(selector),
            translocation,
            history: Vec::with_capacity(schedule.len()),
            schedule,
            parameters,
            rng,
        })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// The current chromosome pair.
    pub fn pair(&self) -> &ChromosomePair {
        &self.pair
    }

    /// The pair as it was before the first step.
    pub fn original(&self) -> &ChromosomePair {
        &self.original
    }

    pub fn schedule(&self) -> &[TransformationKind] {
        &self.schedule
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of steps executed so far.
    pub fn current_step(&self) -> usize {
        self.history.len()
    }

    pub fn is_finished(&self) -> bool {
        self.history.len() == self.schedule.len()
    }

    /// Execute the next scheduled step.
    ///
    /// Returns `None` once the schedule is exhausted. Steps without enough
    /// breakable regions are recorded as not applied.
    pub fn step(&mut self) -> Result<Option<&HistoryEntry>, SimulationError> {
        let Some(&kind) = self.schedule.get(self.history.len()) else {
            return Ok(None);
        };
        let step = self.history.len() + 1;

        let outcome = self
            .apply(kind)
            .map_err(|source| SimulationError::Transformation { step, source })?;

        match outcome {
            StepOutcome::Applied => debug!(step, %kind, "Step applied."),
            StepOutcome::Skipped(reason) => warn!(step, %kind, %reason, "Step skipped."),
        }

        let distance = self
            .parameters
            .compute_diffs
            .then(|| pair_distance(&self.original, &self.pair));

        self.history.push(HistoryEntry {
            step,
            kind,
            applied: outcome.is_applied(),
            left_ordinals: self.pair.left().gene_ordinals(),
            right_ordinals: self.pair.right().gene_ordinals(),
            distance,
        });
        Ok(self.history.last())
    }

    fn apply(&mut self, kind: TransformationKind) -> Result<StepOutcome, TransformationError> {
        match kind {
            TransformationKind::Inversion => {
                let side = if self.rng.random_bool(0.5) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.inversion
                    .transform(self.pair.get_mut(side), &mut self.rng)
            }
            TransformationKind::Translocation => {
                self.translocation
                    .transform(&mut self.pair, &mut self.factory, &mut self.rng)
            }
        }
    }

    /// Run the remaining schedule and collect the result.
    pub fn run(mut self) -> Result<SimulationResult, SimulationError> {
        info!(
            steps = self.schedule.len(),
            translocations = self.parameters.number_of_translocations(),
            "Starting simulation."
        );

        while self.step()?.is_some() {}

        let result = self.into_result();
        info!(
            applied = result.applied_steps(),
            distance = ?result.final_distance(),
            "Simulation complete."
        );
        Ok(result)
    }

    /// The history so far together with the current pair.
    pub fn into_result(self) -> SimulationResult {
        let (left, right) = self.pair.into_inner();
        SimulationResult {
            history: self.history,
            final_left: left.represent(),
            final_right: right.represent(),
            final_left_description: left.describe(),
            final_right_description: right.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DescriptionError;

    const LEFT: &str = "<ATCGAT>GGATC(ATGCTGA)CCTAGT(TTGACGT)AGGTCA(CCCGTAA)TTAGC<GATTACA>";
    const RIGHT: &str = "<CGTACG>TTAGGC(GGCATTA)ACGTAC(TACGGAT)GCATGC<TTGCAAT>";

    fn params(seed: u64) -> SimulationParameters {
        SimulationParameters {
            number_of_transformations: 20,
            rate_of_translocations: 40,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_records_every_step() {
        let sim = Simulation::new(params(42), LEFT, RIGHT).unwrap();
        assert_eq!(sim.schedule().len(), 20);
        let result = sim.run().unwrap();

        assert_eq!(result.history.len(), 20);
        for (i, entry) in result.history.iter().enumerate() {
            assert_eq!(entry.step, i + 1);
            assert!(entry.distance.is_some());
            assert_eq!(entry.left_ordinals.len() + entry.right_ordinals.len(), 5);
        }
    }

    #[test]
    fn test_step_until_exhausted() {
        let mut sim = Simulation::new(params(1), LEFT, RIGHT).unwrap();
        let length = sim.pair().len();

        let mut steps = 0;
        while let Some(entry) = sim.step().unwrap() {
            steps += 1;
            assert_eq!(entry.step, steps);
        }
        assert_eq!(steps, 20);
        assert!(sim.is_finished());
        assert_eq!(sim.current_step(), 20);
        assert_eq!(sim.pair().len(), length);
        assert!(sim.step().unwrap().is_none());
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = Simulation::new(params(7), LEFT, RIGHT).unwrap().run().unwrap();
        let b = Simulation::new(params(7), LEFT, RIGHT).unwrap().run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_without_diffs() {
        let parameters = SimulationParameters {
            compute_diffs: false,
            ..params(3)
        };
        let result = Simulation::new(parameters, LEFT, RIGHT).unwrap().run().unwrap();
        assert!(result.history.iter().all(|e| e.distance.is_none()));
        assert_eq!(result.final_distance(), None);
    }

    #[test]
    fn test_zero_transformations() {
        let parameters = SimulationParameters {
            number_of_transformations: 0,
            ..params(3)
        };
        let sim = Simulation::new(parameters, LEFT, RIGHT).unwrap();
        let original = sim.pair().represent();
        let result = sim.run().unwrap();
        assert!(result.history.is_empty());
        assert_eq!(format!("{}{}", result.final_left, result.final_right), original);
    }

    #[test]
    fn test_bad_description_names_side() {
        let err = Simulation::new(params(3), LEFT, "<ACGT").unwrap_err();
        assert_eq!(
            err,
            SimulationError::Description {
                side: Side::Right,
                source: DescriptionError::Unclosed {
                    marker: '<',
                    position: 0
                }
            }
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let parameters = SimulationParameters {
            rate_of_translocations: 150,
            ..params(3)
        };
        assert!(matches!(
            Simulation::new(parameters, LEFT, RIGHT),
            Err(SimulationError::Parameter(_))
        ));
    }

    #[test]
    fn test_unsatisfiable_window_aborts() {
        let parameters = SimulationParameters {
            use_essential_gene_pairs: true,
            essential_genes_window_size: Some(1),
            essential_genes_in_window: Some(0),
            ..params(3)
        };
        let err = Simulation::new(parameters, LEFT, RIGHT).unwrap().run().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Transformation { step: 1, .. }
        ));
    }

    #[test]
    fn test_window_on_sparse_pair_skips_steps() {
        // One breakable region per chromosome, too few for any rearrangement
        let left = "<AAA>(GG;)C(TT)(CC)<TTT>";
        let right = "<GGG>(AA)T(CA;)(TG)<CCC>";
        for window in [None, Some((2, 1))] {
            let mut parameters = params(5);
            if let Some((size, min)) = window {
                parameters.use_essential_gene_pairs = true;
                parameters.essential_genes_window_size = Some(size);
                parameters.essential_genes_in_window = Some(min);
            }
            let sim = Simulation::new(parameters, left, right).unwrap();
            let result = sim.run().unwrap();
            assert_eq!(result.history.len(), 20);
            assert_eq!(result.applied_steps(), 0);
            assert_eq!(result.final_distance(), Some(0));
        }
    }

    #[test]
    fn test_final_descriptions_parse_back() {
        let result = Simulation::new(params(11), LEFT, RIGHT).unwrap().run().unwrap();
        let mut factory = RegionFactory::new();
        let left = Chromosome::parse(&result.final_left_description, false, &mut factory).unwrap();
        let right = Chromosome::parse(&result.final_right_description, false, &mut factory).unwrap();
        assert_eq!(left.represent(), result.final_left);
        assert_eq!(right.represent(), result.final_right);
    }
}
