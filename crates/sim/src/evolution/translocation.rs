//! Translocation of a segment between two chromosomes.
//!
//! The source chromosome breaks twice and the segment between the breaks
//! moves into a break of the target chromosome, optionally turned around.
//!
//! ```text
//! source  ATC.UTTTCG.CT      ->  ATCCT
//! target  UUUGTA.CTGGG       ->  UUUGTA.UTTTCG.CTGGG
//! ```
//!
//! The source keeps one merged intergenic region where the segment was cut
//! out; the target insertion region splits into two new halves around the
//! segment. No symbol is created or lost.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::StepOutcome;
use super::inversion::Inversion;
use super::selection::{RegionSelector, SelectionError, check_probability};
pub use crate::errors::TransformationError;
use crate::genome::{Chromosome, ChromosomePair, RegionFactory, RegionId, Side};

/// Default chance that a moved segment lands reversed.
pub const DEFAULT_REVERSAL_PROBABILITY: f64 = 0.5;

/// Where a translocation cuts and whether it reverses the moved segment.
///
/// A split point `at` keeps symbols `0..=at` in the first half of the region.
/// Unset split points are drawn at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslocationParameters {
    pub left_source_region: RegionId,
    pub right_source_region: RegionId,
    pub target_insertion_region: RegionId,
    pub split_left_source_region_at: Option<usize>,
    pub split_right_source_region_at: Option<usize>,
    pub split_target_region_at: Option<usize>,
    pub reverse: bool,
}

impl TranslocationParameters {
    /// Parameters with random split points and no reversal.
    pub fn new(
        left_source_region: RegionId,
        right_source_region: RegionId,
        target_insertion_region: RegionId,
    ) -> Self {
        Self {
            left_source_region,
            right_source_region,
            target_insertion_region,
            split_left_source_region_at: None,
            split_right_source_region_at: None,
            split_target_region_at: None,
            reverse: false,
        }
    }

    pub fn with_splits(mut self, left_source: usize, right_source: usize, target: usize) -> Self {
        self.split_left_source_region_at = Some(left_source);
        self.split_right_source_region_at = Some(right_source);
        self.split_target_region_at = Some(target);
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Two-chromosome translocation.
#[derive(Debug, Clone)]
pub struct Translocation {
    selector: RegionSelector,
    reversal_probability: f64,
}

impl Default for Translocation {
    fn default() -> Self {
        Self::new(RegionSelector::default())
    }
}

impl Translocation {
    pub fn new(selector: RegionSelector) -> Self {
        Self {
            selector,
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
        }
    }

    pub fn with_reversal_probability(mut self, probability: f64) -> Result<Self, SelectionError> {
        check_probability("reversal_probability", probability)?;
        self.reversal_probability = probability;
        Ok(self)
    }

    #[inline]
    pub fn selector(&self) -> &RegionSelector {
        &self.selector
    }

    #[inline]
    pub fn reversal_probability(&self) -> f64 {
        self.reversal_probability
    }

    /// Move a random segment from one chromosome of `pair` to the other.
    ///
    /// The source side is a fair coin flip. Two break regions are selected
    /// in the source and one insertion region in the target. When either
    /// selection falls short the pair is left untouched and the step is
    /// reported as skipped.
    pub fn transform<R: Rng + ?Sized>(
        &self,
        pair: &mut ChromosomePair,
        factory: &mut RegionFactory,
        rng: &mut R,
    ) -> Result<StepOutcome, TransformationError> {
        let source_side = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        let (source, target) = pair.split_mut(source_side);

        let source_ids = match self.selector.select(source.regions(), 2, rng)?.into_ids() {
            Ok(ids) => ids,
            Err(reason) => return Ok(StepOutcome::Skipped(reason)),
        };
        let target_ids = match self.selector.select(target.regions(), 1, rng)?.into_ids() {
            Ok(ids) => ids,
            Err(reason) => return Ok(StepOutcome::Skipped(reason)),
        };

        let parameters = TranslocationParameters::new(source_ids[0], source_ids[1], target_ids[0])
            .with_reverse(rng.random_bool(self.reversal_probability));
        Self::transform_with_parameters(source, target, factory, parameters, rng)?;
        Ok(StepOutcome::Applied)
    }

    /// Move the segment strictly between the two source regions into the
    /// target insertion region.
    ///
    /// 1. The target region splits into two new intergenic halves.
    /// 2. The source segment is inserted between the halves.
    /// 3. The source boundary regions split; the outer fragments merge into a
    ///    single new intergenic region in the source.
    /// 4. The inner fragments join the target halves, the left one at the end
    ///    of the first half, the right one at the start of the second.
    /// 5. With `reverse`, the inserted stretch is inverted in place.
    ///
    /// # Errors
    /// Unknown handles, source regions out of order, or split points past
    /// the end of their region. Nothing is modified on error.
    pub fn transform_with_parameters<R: Rng + ?Sized>(
        source: &mut Chromosome,
        target: &mut Chromosome,
        factory: &mut RegionFactory,
        parameters: TranslocationParameters,
        rng: &mut R,
    ) -> Result<(), TransformationError> {
        let TranslocationParameters {
            left_source_region: left,
            right_source_region: right,
            target_insertion_region: insertion,
            ..
        } = parameters;

        let (left_index, right_index) = source.ordered_pair(left, right)?;
        let insertion_index = target.require(insertion)?;

        let left_at = split_point(source, left_index, parameters.split_left_source_region_at, rng)?;
        let right_at = split_point(source, right_index, parameters.split_right_source_region_at, rng)?;
        let target_at = split_point(target, insertion_index, parameters.split_target_region_at, rng)?;

        let (left_prefix, left_suffix) = split_content(source.regions()[left_index].content(), left_at);
        let (right_prefix, right_suffix) =
            split_content(source.regions()[right_index].content(), right_at);
        let (target_prefix, target_suffix) =
            split_content(target.regions()[insertion_index].content(), target_at);

        // Lengths the optional inversion cuts at
        let prefix_length = target_prefix.len();
        let postfix_length = right_prefix.len();

        let mut first_half = target_prefix;
        first_half.extend_from_slice(&left_suffix);
        let mut second_half = right_prefix;
        second_half.extend_from_slice(&target_suffix);
        let mut merged = left_prefix;
        merged.extend_from_slice(&right_suffix);

        let first_half = factory.intergenic(first_half);
        let second_half = factory.intergenic(second_half);
        let (first_id, second_id) = (first_half.id(), second_half.id());
        let merged = factory.intergenic(merged);

        let moved: Vec<_> = source
            .regions_mut()
            .splice(left_index..=right_index, [merged])
            .skip(1)
            .take(right_index - left_index - 1)
            .collect();

        let mut insert = Vec::with_capacity(moved.len() + 2);
        insert.push(first_half);
        insert.extend(moved);
        insert.push(second_half);
        target
            .regions_mut()
            .splice(insertion_index..=insertion_index, insert);

        if parameters.reverse {
            Inversion::transform_with_regions(target, first_id, second_id, prefix_length, postfix_length)?;
        }
        Ok(())
    }
}

/// The split point for region `index`, drawn at random when unset.
///
/// Random points fall in `1..len-1` for regions of three or more symbols and
/// are 0 otherwise.
fn split_point<R: Rng + ?Sized>(
    chromosome: &Chromosome,
    index: usize,
    requested: Option<usize>,
    rng: &mut R,
) -> Result<usize, TransformationError> {
    let region = &chromosome.regions()[index];
    let len = region.len();
    match requested {
        Some(at) if at < len.max(1) => Ok(at),
        Some(at) => Err(TransformationError::BreakpointOutOfRange {
            region: region.id(),
            offset: at,
            len,
        }),
        None if len >= 3 => Ok(rng.random_range(1..len - 1)),
        None => Ok(0),
    }
}

/// Split after position `at`: the first half holds `content[..=at]`.
fn split_content(content: &[u8], at: usize) -> (Vec<u8>, Vec<u8>) {
    let (first, second) = content.split_at((at + 1).min(content.len()));
    (first.to_vec(), second.to_vec())
}
