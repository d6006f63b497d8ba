//! Random selection of break regions.
//!
//! Structural mutations cut chromosomes inside regions picked here. By
//! default only breakable regions are candidates; a `random_error`
//! probability lets non-breakable regions slip in, modelling imperfect
//! breakage fidelity. With `longer_breaks_often`, longer regions are picked
//! proportionally more often.
//!
//! ## Essential gene windows
//! Essential genes tend to cluster and a break inside such a cluster is
//! lethal. The constrained variant slides a window of consecutive genes over
//! the chromosome; a window holding at least `min_essential` essential genes
//! is protected. Each draw picks a random unprotected window and selects one
//! region from the stretch it spans (the window's genes plus the intergenic
//! regions around them), then retires that stretch for the rest of the call.
//!
//! Selections always come back in chromosome order, never draw order.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::{Deserialize, Serialize};

use super::SkipReason;
pub use crate::errors::SelectionError;
use crate::genome::{Region, RegionId};

/// Failed window draws allowed before the constraints are declared
/// unsatisfiable.
pub const ESSENTIAL_WINDOW_TRIALS: usize = 100;

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSelection {
    /// The selected handles in chromosome order.
    Selected(Vec<RegionId>),
    /// Not a single region qualified.
    NoCandidates,
    /// Some regions qualified, but fewer than requested.
    Insufficient { requested: usize, available: usize },
}

impl RegionSelection {
    /// Shortfall for a pool of `available` regions, `None` when it can
    /// serve `requested` draws.
    fn shortfall(requested: usize, available: usize) -> Option<Self> {
        match available {
            0 if requested > 0 => Some(RegionSelection::NoCandidates),
            n if n < requested => Some(RegionSelection::Insufficient {
                requested,
                available,
            }),
            _ => None,
        }
    }

    /// The selected handles, or why the step using them has to be skipped.
    pub fn into_ids(self) -> Result<Vec<RegionId>, SkipReason> {
        match self {
            RegionSelection::Selected(ids) => Ok(ids),
            RegionSelection::NoCandidates => Err(SkipReason::NoCandidates),
            RegionSelection::Insufficient {
                requested,
                available,
            } => Err(SkipReason::Insufficient {
                requested,
                available,
            }),
        }
    }

}

/// Essential gene clustering constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssentialWindow {
    /// Number of consecutive genes in a window.
    pub window_size: usize,
    /// Essential genes that make a window protected.
    pub min_essential: usize,
}

impl EssentialWindow {
    pub fn new(window_size: usize, min_essential: usize) -> Self {
        Self {
            window_size,
            min_essential,
        }
    }
}

/// Selection settings shared by all transformations of a run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionSelector {
    longer_breaks_often: bool,
    random_error: f64,
    essential_window: Option<EssentialWindow>,
}

impl RegionSelector {
    pub fn new(longer_breaks_often: bool) -> Self {
        Self {
            longer_breaks_often,
            ..Default::default()
        }
    }

    /// Admit non-breakable regions with probability `random_error` each.
    pub fn with_random_error(mut self, random_error: f64) -> Result<Self, SelectionError> {
        check_probability("random_error", random_error)?;
        self.random_error = random_error;
        Ok(self)
    }

    pub fn with_essential_window(mut self, window: EssentialWindow) -> Self {
        self.essential_window = Some(window);
        self
    }

    #[inline]
    pub fn longer_breaks_often(&self) -> bool {
        self.longer_breaks_often
    }

    #[inline]
    pub fn random_error(&self) -> f64 {
        self.random_error
    }

    #[inline]
    pub fn essential_window(&self) -> Option<EssentialWindow> {
        self.essential_window
    }

    /// Select `count` distinct regions, honouring the essential window when
    /// one is configured.
    pub fn select<R: Rng + ?Sized>(
        &self,
        regions: &[Region],
        count: usize,
        rng: &mut R,
    ) -> Result<RegionSelection, SelectionError> {
        let random_error = (self.random_error > 0.0).then_some(self.random_error);
        match self.essential_window {
            Some(window) => select_random_region_with_constraints(
                regions,
                window,
                count,
                self.longer_breaks_often,
                random_error,
                rng,
            ),
            None => select_random_region(
                regions,
                count,
                self.longer_breaks_often,
                random_error,
                rng,
            ),
        }
    }
}

pub(crate) fn check_probability(name: &'static str, p: f64) -> Result<(), SelectionError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SelectionError::InvalidProbability(name, p))
    }
}

/// Selection weight of each region, proportional to its length.
///
/// The weights sum to 1.0. When every region is empty the weights are
/// uniform.
pub fn compute_probabilities_based_on_length<'a>(
    regions: impl IntoIterator<Item = &'a Region>,
) -> Vec<f64> {
    let lengths: Vec<usize> = regions.into_iter().map(Region::len).collect();
    let total: usize = lengths.iter().sum();
    if total == 0 {
        let n = lengths.len() as f64;
        return vec![1.0 / n; lengths.len()];
    }
    lengths
        .iter()
        .map(|&len| len as f64 / total as f64)
        .collect()
}

/// Positions from `pool` that may break; non-breakable ones are admitted
/// with probability `random_error`.
fn candidates<R: Rng + ?Sized>(
    regions: &[Region],
    pool: impl IntoIterator<Item = usize>,
    random_error: Option<f64>,
    rng: &mut R,
) -> Vec<usize> {
    pool.into_iter()
        .filter(|&i| {
            regions[i].can_break() || random_error.is_some_and(|p| rng.random_bool(p))
        })
        .collect()
}

/// Draw `count` distinct positions out of `candidates` without replacement,
/// returned sorted. Requires `count <= candidates.len()`.
fn draw<R: Rng + ?Sized>(
    regions: &[Region],
    candidates: &[usize],
    count: usize,
    longer_breaks_often: bool,
    rng: &mut R,
) -> Vec<usize> {
    let mut remaining = candidates.to_vec();
    let mut weights = if longer_breaks_often {
        compute_probabilities_based_on_length(remaining.iter().map(|&i| &regions[i]))
    } else {
        vec![1.0; remaining.len()]
    };

    let mut chosen = Vec::with_capacity(count);
    for _ in 0..count {
        let pick = match WeightedIndex::new(&weights) {
            Ok(dist) => dist.sample(rng),
            // Only zero-length regions left
            Err(_) => rng.random_range(0..remaining.len()),
        };
        chosen.push(remaining.swap_remove(pick));
        weights.swap_remove(pick);
    }
    chosen.sort_unstable();
    chosen
}

fn to_ids(regions: &[Region], positions: &[usize]) -> Vec<RegionId> {
    positions.iter().map(|&i| regions[i].id()).collect()
}

/// Select `count` distinct regions at random.
///
/// Returns [`RegionSelection::NoCandidates`] when no region qualifies and
/// [`RegionSelection::Insufficient`] when fewer than `count` do.
pub fn select_random_region<R: Rng + ?Sized>(
    regions: &[Region],
    count: usize,
    longer_breaks_often: bool,
    random_error: Option<f64>,
    rng: &mut R,
) -> Result<RegionSelection, SelectionError> {
    if let Some(p) = random_error {
        check_probability("random_error", p)?;
    }
    if count == 0 {
        return Ok(RegionSelection::Selected(Vec::new()));
    }

    let pool = candidates(regions, 0..regions.len(), random_error, rng);
    if let Some(shortfall) = RegionSelection::shortfall(count, pool.len()) {
        return Ok(shortfall);
    }

    let chosen = draw(regions, &pool, count, longer_breaks_often, rng);
    Ok(RegionSelection::Selected(to_ids(regions, &chosen)))
}

/// Select `count` regions from disjoint, unprotected essential gene windows.
///
/// Falls back to [`select_random_region`] when the chromosome has fewer
/// genes than the window or when no window is protected. Too few candidate
/// regions overall, or too few left in disjoint unprotected windows, is a
/// shortfall like in the plain variant. Fails with
/// [`SelectionError::ConstraintExhausted`] when a draw hits protected
/// windows [`ESSENTIAL_WINDOW_TRIALS`] times.
pub fn select_random_region_with_constraints<R: Rng + ?Sized>(
    regions: &[Region],
    window: EssentialWindow,
    count: usize,
    longer_breaks_often: bool,
    random_error: Option<f64>,
    rng: &mut R,
) -> Result<RegionSelection, SelectionError> {
    if let Some(p) = random_error {
        check_probability("random_error", p)?;
    }

    let genes: Vec<usize> = regions
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_gene())
        .map(|(i, _)| i)
        .collect();
    if window.window_size == 0 || genes.len() < window.window_size {
        return select_random_region(regions, count, longer_breaks_often, random_error, rng);
    }

    let windows = genes.len() - window.window_size + 1;
    let protected: Vec<bool> = (0..windows)
        .map(|first| {
            genes[first..first + window.window_size]
                .iter()
                .filter(|&&i| regions[i].is_essential())
                .count()
                >= window.min_essential
        })
        .collect();
    if !protected.contains(&true) {
        return select_random_region(regions, count, longer_breaks_often, random_error, rng);
    }

    // Non-breakable regions get their random_error roll once per call
    let pool = candidates(regions, 0..regions.len(), random_error, rng);
    if let Some(shortfall) = RegionSelection::shortfall(count, pool.len()) {
        return Ok(shortfall);
    }
    let mut available = vec![false; regions.len()];
    for &i in &pool {
        available[i] = true;
    }

    // From just after the gene before the window up to just before the one after it
    let span = |first: usize| {
        let from = if first == 0 { 0 } else { genes[first - 1] + 1 };
        let to = genes
            .get(first + window.window_size)
            .copied()
            .unwrap_or(regions.len());
        from..to
    };

    let usable = |available: &[bool], first: usize| available[span(first)].contains(&true);
    let any_unprotected = protected.contains(&false);

    let mut chosen = Vec::with_capacity(count);
    while chosen.len() < count {
        // Candidates left only in consumed or protected stretches
        if any_unprotected
            && !(0..windows).any(|first| !protected[first] && usable(&available, first))
        {
            return Ok(RegionSelection::shortfall(count, chosen.len())
                .unwrap_or(RegionSelection::NoCandidates));
        }

        let mut trials = 0;
        let first = loop {
            if trials == ESSENTIAL_WINDOW_TRIALS {
                return Err(SelectionError::ConstraintExhausted {
                    window_size: window.window_size,
                    min_essential: window.min_essential,
                    trials,
                });
            }
            let first = rng.random_range(0..windows);
            if protected[first] {
                trials += 1;
            } else if usable(&available, first) {
                break first;
            }
        };

        let segment = span(first);
        let pool: Vec<usize> = segment.clone().filter(|&i| available[i]).collect();
        available[segment].iter_mut().for_each(|a| *a = false);
        chosen.extend(draw(regions, &pool, 1, longer_breaks_often, rng));
    }

    chosen.sort_unstable();
    Ok(RegionSelection::Selected(to_ids(regions, &chosen)))
}
