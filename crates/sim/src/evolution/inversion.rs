//! Inversion of a chromosome segment.
//!
//! The chromosome breaks at two points, each inside a selected region, and
//! the segment between the points is turned around. Reversal swaps the
//! strand, so every symbol in the segment is complemented as well.
//!
//! ```text
//! AGT.TCGAA.GT  ->  AGT.TTCGA.GT
//! ```

use rand::Rng;

use super::StepOutcome;
use super::selection::RegionSelector;
use crate::base::reverse_complement;
pub use crate::errors::TransformationError;
use crate::genome::{Chromosome, RegionId};

/// Single chromosome inversion.
#[derive(Debug, Clone, Default)]
pub struct Inversion {
    selector: RegionSelector,
}

impl Inversion {
    pub fn new(selector: RegionSelector) -> Self {
        Self { selector }
    }

    #[inline]
    pub fn selector(&self) -> &RegionSelector {
        &self.selector
    }

    /// Invert a random segment of `chromosome`.
    ///
    /// Two break regions are drawn through the selector and a break offset
    /// is drawn uniformly from `0..=len` inside each. Returns
    /// [`StepOutcome::Skipped`] without touching the chromosome when fewer
    /// than two regions qualify.
    pub fn transform<R: Rng + ?Sized>(
        &self,
        chromosome: &mut Chromosome,
        rng: &mut R,
    ) -> Result<StepOutcome, TransformationError> {
        let ids = match self.selector.select(chromosome.regions(), 2, rng)?.into_ids() {
            Ok(ids) => ids,
            Err(reason) => return Ok(StepOutcome::Skipped(reason)),
        };
        let (left, right) = (ids[0], ids[1]);

        let left_offset = Self::random_offset(chromosome, left, rng)?;
        let right_offset = Self::random_offset(chromosome, right, rng)?;

        Self::transform_with_regions(chromosome, left, right, left_offset, right_offset)?;
        Ok(StepOutcome::Applied)
    }

    fn random_offset<R: Rng + ?Sized>(
        chromosome: &Chromosome,
        id: RegionId,
        rng: &mut R,
    ) -> Result<usize, TransformationError> {
        let len = chromosome
            .get(id)
            .ok_or(TransformationError::UnknownRegion(id))?
            .len();
        Ok(rng.random_range(0..=len))
    }

    /// Invert the segment from `left_offset` inside `left` to `right_offset`
    /// inside `right`.
    ///
    /// Regions strictly between the two are reverse-complemented and their
    /// order reversed. The boundary regions swap their inner flanks:
    ///
    /// * left becomes `left[..left_offset] + rc(right[..right_offset])`
    /// * right becomes `rc(left[left_offset..]) + right[right_offset..]`
    ///
    /// # Errors
    /// Unknown handles, `left` not preceding `right`, or an offset beyond the
    /// region length. The chromosome is left untouched on error.
    pub fn transform_with_regions(
        chromosome: &mut Chromosome,
        left: RegionId,
        right: RegionId,
        left_offset: usize,
        right_offset: usize,
    ) -> Result<(), TransformationError> {
        let (left_index, right_index) = chromosome.ordered_pair(left, right)?;

        let regions = chromosome.regions_mut();
        for (region, offset) in [(left_index, left_offset), (right_index, right_offset)] {
            let len = regions[region].len();
            if offset > len {
                return Err(TransformationError::BreakpointOutOfRange {
                    region: regions[region].id(),
                    offset,
                    len,
                });
            }
        }

        let interior = &mut regions[left_index + 1..right_index];
        interior.iter_mut().for_each(|r| r.reverse());
        interior.reverse();

        let (left_prefix, left_suffix) = regions[left_index].content().split_at(left_offset);
        let (right_prefix, right_suffix) = regions[right_index].content().split_at(right_offset);

        let mut new_left = left_prefix.to_vec();
        new_left.extend(reverse_complement(right_prefix));
        let mut new_right = reverse_complement(left_suffix);
        new_right.extend_from_slice(right_suffix);

        regions[left_index].set_content(new_left);
        regions[right_index].set_content(new_right);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::{EssentialWindow, SkipReason};
    use crate::genome::RegionFactory;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn fixture(factory: &mut RegionFactory) -> Chromosome {
        Chromosome::new(vec![
            factory.intergenic("TCGTTC"),
            factory.gene("ATCTGA", false),
            factory.intergenic("CGGTTC"),
            factory.gene("CCCGT", false),
            factory.intergenic("GTGTG"),
            factory.gene("CCCGT", false),
            factory.gene("CCCGCCCT", false),
            factory.intergenic("CCCGGGGTCT"),
        ])
    }

    #[test]
    fn test_inversion() {
        let mut factory = RegionFactory::new();
        let mut chr = fixture(&mut factory);
        let left = chr.regions()[2].id();
        let right = chr.regions()[7].id();

        Inversion::transform_with_regions(&mut chr, left, right, 5, 7).unwrap();

        assert_eq!(
            chr.represent(),
            "TCGTTCATCTGACGGTTCCCCGGGAGGGCGGGACGGGCACACACGGGGTCT"
        );
        // genes 1..=4 are now in reverse order
        let ordinals: Vec<u64> = chr.gene_ordinals().iter().map(|o| o.get()).collect();
        assert_eq!(ordinals, vec![0, 3, 2, 1]);
    }

    #[test]
    fn test_inversion_at_region_edges() {
        let mut factory = RegionFactory::new();
        let mut chr = Chromosome::new(vec![
            factory.intergenic("AAC"),
            factory.gene("GGT", false),
            factory.intergenic("TTA"),
        ]);
        let left = chr.regions()[0].id();
        let right = chr.regions()[2].id();

        // cut after the whole left region and before the right one
        Inversion::transform_with_regions(&mut chr, left, right, 3, 0).unwrap();
        assert_eq!(chr.represent(), "AACACCTTA");

        // cut before the left region and after the right one
        Inversion::transform_with_regions(&mut chr, left, right, 0, 3).unwrap();
        assert_eq!(chr.represent(), "TAAGGTGTT");
    }

    #[test]
    fn test_inversion_adjacent_regions() {
        let mut factory = RegionFactory::new();
        let mut chr = Chromosome::new(vec![factory.intergenic("ACGT"), factory.intergenic("TTGG")]);
        let left = chr.regions()[0].id();
        let right = chr.regions()[1].id();

        Inversion::transform_with_regions(&mut chr, left, right, 2, 2).unwrap();
        // "GT" + "TT" inverted gives "AA" + "AC"
        assert_eq!(chr.represent(), "ACAAACGG");
        assert_eq!(chr.regions()[0].represent(), "ACAA");
        assert_eq!(chr.regions()[1].represent(), "ACGG");
    }

    #[test]
    fn test_inversion_rejects_bad_input() {
        let mut factory = RegionFactory::new();
        let mut chr = fixture(&mut factory);
        let original = chr.clone();
        let left = chr.regions()[2].id();
        let right = chr.regions()[7].id();

        assert_eq!(
            Inversion::transform_with_regions(&mut chr, right, left, 0, 0),
            Err(TransformationError::RegionOrder { left: right, right: left })
        );
        assert_eq!(
            Inversion::transform_with_regions(&mut chr, left, right, 7, 0),
            Err(TransformationError::BreakpointOutOfRange {
                region: left,
                offset: 7,
                len: 6
            })
        );
        let stranger = factory.intergenic("A").id();
        assert!(Inversion::transform_with_regions(&mut chr, left, stranger, 0, 0).is_err());
        assert_eq!(chr, original);
    }

    #[test]
    fn test_random_inversion_conserves_length() {
        let mut factory = RegionFactory::new();
        let mut chr = fixture(&mut factory);
        let length = chr.len();
        let genes = chr.gene_ordinals().len();
        let inversion = Inversion::new(RegionSelector::new(true));
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        for _ in 0..100 {
            let outcome = inversion.transform(&mut chr, &mut rng).unwrap();
            assert_eq!(outcome, StepOutcome::Applied);
            assert_eq!(chr.len(), length);
            assert_eq!(chr.gene_ordinals().len(), genes);
        }
    }

    #[test]
    fn test_random_inversion_skips_without_candidates() {
        let mut factory = RegionFactory::new();
        let mut chr = Chromosome::parse("<ACGT>(GGG)<TTT>", false, &mut factory).unwrap();
        let original = chr.clone();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        let outcome = Inversion::default().transform(&mut chr, &mut rng).unwrap();
        assert_eq!(outcome, StepOutcome::Skipped(SkipReason::NoCandidates));
        assert_eq!(chr, original);

        let mut chr = Chromosome::parse("<ACGT>C(GGG)<TTT>", false, &mut factory).unwrap();
        let outcome = Inversion::default().transform(&mut chr, &mut rng).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Skipped(SkipReason::Insufficient {
                requested: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_random_inversion_propagates_exhaustion() {
        let mut factory = RegionFactory::new();
        let mut chr = Chromosome::parse("<A>C(G;)T(G;)C<A>", false, &mut factory).unwrap();
        let selector = RegionSelector::new(false).with_essential_window(EssentialWindow::new(1, 1));
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        let result = Inversion::new(selector).transform(&mut chr, &mut rng);
        assert!(matches!(result, Err(TransformationError::Selection(_))));
    }
}
