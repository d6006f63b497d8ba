//! Simulation parameters.
//!
//! Every field has a default, so a JSON parameter file only needs the values
//! it changes.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::errors::ParameterError;
use crate::evolution::{EssentialWindow, RegionSelector, TransformationKind};
use crate::evolution::translocation::DEFAULT_REVERSAL_PROBABILITY;

/// Settings of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Total number of scheduled rearrangements
    pub number_of_transformations: usize,
    /// Percentage of translocations among them, 0 to 100
    pub rate_of_translocations: u8,
    /// Chance that a non-breakable region breaks anyway
    pub random_error: f64,
    /// Pick regions proportionally to their length
    pub longer_breaks_often: bool,
    /// Protect windows of clustered essential genes
    pub use_essential_gene_pairs: bool,
    /// Genes per window, required with `use_essential_gene_pairs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub essential_genes_window_size: Option<usize>,
    /// Essential genes that protect a window, required with
    /// `use_essential_gene_pairs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub essential_genes_in_window: Option<usize>,
    /// Treat `{ }` blocks in descriptions as non-breakable
    pub use_coexpression: bool,
    /// Record the edit distance to the starting pair after every step
    pub compute_diffs: bool,
    /// Chance that a translocated segment lands reversed
    pub reversal_probability: f64,
    /// RNG seed; `None` draws one from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            number_of_transformations: 50,
            rate_of_translocations: 0,
            random_error: 0.0,
            longer_breaks_often: false,
            use_essential_gene_pairs: false,
            essential_genes_window_size: None,
            essential_genes_in_window: None,
            use_coexpression: false,
            compute_diffs: true,
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
            seed: None,
        }
    }
}

fn check_probability(name: &'static str, p: f64) -> Result<(), ParameterError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ParameterError::InvalidProbability(name, p))
    }
}

impl SimulationParameters {
    /// Check ranges and the essential window settings.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.rate_of_translocations > 100 {
            return Err(ParameterError::InvalidTranslocationRate(
                self.rate_of_translocations,
            ));
        }
        check_probability("random_error", self.random_error)?;
        check_probability("reversal_probability", self.reversal_probability)?;
        self.essential_window()?;
        Ok(())
    }

    /// The essential gene window, if essential gene pairs are in use.
    pub fn essential_window(&self) -> Result<Option<EssentialWindow>, ParameterError> {
        if !self.use_essential_gene_pairs {
            return Ok(None);
        }
        let window_size = self
            .essential_genes_window_size
            .ok_or(ParameterError::MissingWindowParameter(
                "essential_genes_window_size",
            ))?;
        let min_essential = self
            .essential_genes_in_window
            .ok_or(ParameterError::MissingWindowParameter(
                "essential_genes_in_window",
            ))?;
        if window_size == 0 {
            return Err(ParameterError::EmptyWindow);
        }
        Ok(Some(EssentialWindow::new(window_size, min_essential)))
    }

    /// Region selector shared by all steps of the run.
    pub fn selector(&self) -> Result<RegionSelector, ParameterError> {
        let mut selector = RegionSelector::new(self.longer_breaks_often)
            .with_random_error(self.random_error)
            .map_err(|_| ParameterError::InvalidProbability("random_error", self.random_error))?;
        if let Some(window) = self.essential_window()? {
            selector = selector.with_essential_window(window);
        }
        Ok(selector)
    }

    /// Number of translocation steps, rounded down.
    pub fn number_of_translocations(&self) -> usize {
        self.number_of_transformations * usize::from(self.rate_of_translocations.min(100)) / 100
    }

    pub fn number_of_inversions(&self) -> usize {
        self.number_of_transformations - self.number_of_translocations()
    }

    /// Shuffled list of step kinds with the configured ratio.
    pub fn schedule<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TransformationKind> {
        let mut schedule = Vec::with_capacity(self.number_of_transformations);
        schedule.extend(std::iter::repeat_n(
            TransformationKind::Translocation,
            self.number_of_translocations(),
        ));
        schedule.extend(std::iter::repeat_n(
            TransformationKind::Inversion,
            self.number_of_inversions(),
        ));
        schedule.shuffle(rng);
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_defaults() {
        let params = SimulationParameters::default();
        assert_eq!(params.number_of_transformations, 50);
        assert_eq!(params.rate_of_translocations, 0);
        assert!(params.compute_diffs);
        assert_eq!(params.reversal_probability, 0.5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_counts_round_down() {
        let params = SimulationParameters {
            number_of_transformations: 7,
            rate_of_translocations: 50,
            ..Default::default()
        };
        assert_eq!(params.number_of_translocations(), 3);
        assert_eq!(params.number_of_inversions(), 4);
    }

    #[test]
    fn test_schedule_ratio() {
        let params = SimulationParameters {
            number_of_transformations: 10,
            rate_of_translocations: 50,
            ..Default::default()
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let schedule = params.schedule(&mut rng);
        assert_eq!(schedule.len(), 10);
        let translocations = schedule
            .iter()
            .filter(|k| **k == TransformationKind::Translocation)
            .count();
        assert_eq!(translocations, 5);
    }

    #[test]
    fn test_schedule_is_seeded() {
        let params = SimulationParameters {
            number_of_transformations: 40,
            rate_of_translocations: 30,
            ..Default::default()
        };
        let a = params.schedule(&mut Xoshiro256PlusPlus::seed_from_u64(9));
        let b = params.schedule(&mut Xoshiro256PlusPlus::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let params = SimulationParameters {
            rate_of_translocations: 101,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::InvalidTranslocationRate(101))
        );

        let params = SimulationParameters {
            random_error: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::InvalidProbability("random_error", _))
        ));

        let params = SimulationParameters {
            reversal_probability: 2.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_essential_window_parameters() {
        let mut params = SimulationParameters {
            use_essential_gene_pairs: true,
            essential_genes_window_size: Some(2),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::MissingWindowParameter(
                "essential_genes_in_window"
            ))
        );

        params.essential_genes_in_window = Some(1);
        assert_eq!(
            params.essential_window().unwrap(),
            Some(EssentialWindow::new(2, 1))
        );
        assert!(params.selector().unwrap().essential_window().is_some());

        params.essential_genes_window_size = Some(0);
        assert_eq!(params.validate(), Err(ParameterError::EmptyWindow));

        // ignored unless enabled
        params.use_essential_gene_pairs = false;
        assert!(params.validate().is_ok());
        assert!(params.selector().unwrap().essential_window().is_none());
    }

    #[test]
    fn test_partial_json() {
        let params: SimulationParameters =
            serde_json::from_str(r#"{"number_of_transformations": 10, "seed": 3}"#).unwrap();
        assert_eq!(params.number_of_transformations, 10);
        assert_eq!(params.seed, Some(3));
        assert_eq!(params.reversal_probability, 0.5);
    }
}
