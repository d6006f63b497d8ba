use super::description::{self, parse_regions};
use super::{Ordinal, Region, RegionFactory, RegionId};
use crate::errors::{DescriptionError, TransformationError};

/// A chromosome: an ordered list of regions.
///
/// Region order is the only notion of physical position. Concatenating the
/// region contents in order gives the full sequence (see
/// [`Chromosome::represent`]).
///
/// # Examples
///
/// ```rust
/// # use genmod_sim::genome::{Chromosome, RegionFactory};
/// let mut factory = RegionFactory::new();
/// let chr = Chromosome::parse("<AC>GT(CCA;)T<GG>", false, &mut factory).unwrap();
/// assert_eq!(chr.num_regions(), 5);
/// assert_eq!(chr.represent(), "ACGTCCATGG");
/// assert_eq!(chr.describe(), "<AC>GT(CCA;)T<GG>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chromosome {
    regions: Vec<Region>,
}

impl Chromosome {
    /// Create a chromosome from already constructed regions.
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Parse a chromosome description.
    ///
    /// With `use_coexpression` the `{ }` blocks are non-breakable, otherwise
    /// they only separate regions.
    pub fn parse(
        description: &str,
        use_coexpression: bool,
        factory: &mut RegionFactory,
    ) -> Result<Self, DescriptionError> {
        parse_regions(description, use_coexpression, factory).map(Self::new)
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    /// Total number of symbols.
    pub fn len(&self) -> usize {
        self.regions.iter().map(Region::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.iter().all(Region::is_empty)
    }

    /// The full sequence without boundary markers.
    pub fn represent(&self) -> String {
        let mut bytes = Vec::with_capacity(self.len());
        for region in &self.regions {
            bytes.extend_from_slice(region.content());
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// A description that parses back into an equivalent chromosome.
    ///
    /// Intergenic regions at either end and interior non-breakable intergenic
    /// regions are wrapped in `< >`; genes keep their `( )` / `( ;)` form.
    /// Coexpression blocks are not reconstructed, only their
    /// non-breakability is.
    pub fn describe(&self) -> String {
        let last = self.regions.len().saturating_sub(1);
        let mut result = String::with_capacity(self.len() + 2 * self.regions.len());

        for (i, region) in self.regions.iter().enumerate() {
            let content = region.represent();
            if region.is_gene() {
                result.push(description::LEFT_GENE_BOUNDARY);
                result.push_str(&content);
                if region.is_essential() {
                    result.push(description::ESSENTIAL_GENE_MARKER);
                }
                result.push(description::RIGHT_GENE_BOUNDARY);
            } else if i == 0 || i == last || !region.can_break() {
                result.push(description::LEFT_NOBREAK_BOUNDARY);
                result.push_str(&content);
                result.push(description::RIGHT_NOBREAK_BOUNDARY);
            } else {
                result.push_str(&content);
            }
        }

        result
    }

    /// Reverse-complement the whole chromosome: region order is reversed and
    /// every region is reverse-complemented.
    pub fn reverse(&mut self) {
        for region in &mut self.regions {
            region.reverse();
        }
        self.regions.reverse();
    }

    /// Regions a structural mutation may cut.
    pub fn breakable_regions(&self) -> Vec<&Region> {
        self.regions.iter().filter(|r| r.can_break()).collect()
    }

    /// Gene ordinals in current chromosome order.
    pub fn gene_ordinals(&self) -> Vec<Ordinal> {
        self.regions.iter().filter_map(Region::ordinal).collect()
    }

    /// Index of the region with handle `id`.
    pub fn position(&self, id: RegionId) -> Option<usize> {
        self.regions.iter().position(|r| r.id() == id)
    }

    pub(crate) fn require(&self, id: RegionId) -> Result<usize, TransformationError> {
        self.position(id).ok_or(TransformationError::UnknownRegion(id))
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.position(id).map(|i| &self.regions[i])
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.position(id).map(move |i| &mut self.regions[i])
    }

    /// Replace the region `id` by `replacement`, in place.
    pub fn replace(
        &mut self,
        id: RegionId,
        replacement: Vec<Region>,
    ) -> Result<Vec<Region>, TransformationError> {
        let index = self.require(id)?;
        Ok(self.regions.splice(index..=index, replacement).collect())
    }

    /// Remove and return the regions strictly between `left` and `right`.
    pub fn drain_between(
        &mut self,
        left: RegionId,
        right: RegionId,
    ) -> Result<Vec<Region>, TransformationError> {
        let (left_index, right_index) = self.ordered_pair(left, right)?;
        Ok(self.regions.drain(left_index + 1..right_index).collect())
    }

    /// Insert `regions` directly after the region `id`.
    pub fn insert_after(
        &mut self,
        id: RegionId,
        regions: Vec<Region>,
    ) -> Result<(), TransformationError> {
        let index = self.require(id)? + 1;
        self.regions.splice(index..index, regions);
        Ok(())
    }

    /// Positions of `left` and `right`, which must appear in that order.
    pub(crate) fn ordered_pair(
        &self,
        left: RegionId,
        right: RegionId,
    ) -> Result<(usize, usize), TransformationError> {
        let left_index = self.require(left)?;
        let right_index = self.require(right)?;
        if left_index >= right_index {
            return Err(TransformationError::RegionOrder { left, right });
        }
        Ok((left_index, right_index))
    }

    /// Mutable access to the region list, for in-crate transformations.
    pub(crate) fn regions_mut(&mut self) -> &mut Vec<Region> {
        &mut self.regions
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.represent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(factory: &mut RegionFactory) -> Chromosome {
        Chromosome::new(vec![
            factory.gene("ADAC", false),
            factory.gene("GGGA", false),
            factory.intergenic("TTGA"),
            factory.intergenic("TCAG"),
        ])
    }

    #[test]
    fn test_represent() {
        let chr = sample(&mut RegionFactory::new());
        assert_eq!(chr.represent(), "ADACGGGATTGATCAG");
        assert_eq!(chr.len(), 16);
        assert_eq!(chr.to_string(), "ADACGGGATTGATCAG");
    }

    #[test]
    fn test_reverse() {
        let mut chr = sample(&mut RegionFactory::new());
        chr.reverse();
        // Reverse complement; 'D' has no pair and stays as it is
        assert_eq!(chr.represent(), "CTGATCAATCCCGTDT");
    }

    #[test]
    fn test_reverse_twice_restores_original() {
        let mut factory = RegionFactory::new();
        let original = Chromosome::parse("<ACG>TTA(GGC;)CA(T)<GATC>", false, &mut factory).unwrap();
        let mut chr = original.clone();
        chr.reverse();
        assert_ne!(chr, original);
        chr.reverse();
        assert_eq!(chr, original);
    }

    #[test]
    fn test_breakable_regions() {
        let mut factory = RegionFactory::new();
        let mut chr = sample(&mut factory);

        // expected: the two intergenic regions
        assert_eq!(chr.breakable_regions().len(), 2);

        // make the first gene breakable
        let first = chr.regions()[0].id();
        chr.get_mut(first).unwrap().set_can_break(true);
        assert_eq!(chr.breakable_regions().len(), 3);

        // make the last intergenic region non-breakable
        let last = chr.regions()[3].id();
        chr.get_mut(last).unwrap().set_can_break(false);
        let breakable = chr.breakable_regions();
        assert_eq!(breakable.len(), 2);
        assert!(breakable.iter().all(|r| r.can_break()));
    }

    #[test]
    fn test_gene_ordinals_follow_position() {
        let mut factory = RegionFactory::new();
        let mut chr = Chromosome::parse("(AA)C(GG)T(CC)", false, &mut factory).unwrap();
        let before: Vec<u64> = chr.gene_ordinals().iter().map(|o| o.get()).collect();
        assert_eq!(before, vec![0, 1, 2]);

        chr.reverse();
        let after: Vec<u64> = chr.gene_ordinals().iter().map(|o| o.get()).collect();
        assert_eq!(after, vec![2, 1, 0]);
    }

    #[test]
    fn test_describe_round_trip() {
        let mut factory = RegionFactory::new();
        let chr = Chromosome::parse(
            "<ADCGTGGG>AAAGT(DAC)TTTGACU(UUTGAAA;)AGT<CCCGTU>",
            false,
            &mut factory,
        )
        .unwrap();
        let description = chr.describe();
        assert_eq!(description, "<ADCGTGGG>AAAGT(DAC)TTTGACU(UUTGAAA;)AGT<CCCGTU>");

        let reparsed = Chromosome::parse(&description, false, &mut factory).unwrap();
        assert_eq!(reparsed.represent(), chr.represent());
        let flags = |c: &Chromosome| -> Vec<(bool, bool, bool)> {
            c.regions()
                .iter()
                .map(|r| (r.can_break(), r.is_gene(), r.is_essential()))
                .collect()
        };
        assert_eq!(flags(&reparsed), flags(&chr));
    }

    #[test]
    fn test_describe_keeps_coexpression_breakability() {
        let mut factory = RegionFactory::new();
        let chr = Chromosome::parse("<A>C{GG(T)TT}C<A>", true, &mut factory).unwrap();
        let description = chr.describe();
        assert_eq!(description, "<A>C<GG>(T)<TT>C<A>");

        let reparsed = Chromosome::parse(&description, false, &mut factory).unwrap();
        let breakable: Vec<bool> = reparsed.regions().iter().map(|r| r.can_break()).collect();
        let expected: Vec<bool> = chr.regions().iter().map(|r| r.can_break()).collect();
        assert_eq!(breakable, expected);
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(Chromosome::default().describe(), "");
    }

    #[test]
    fn test_lookup_by_handle_with_identical_content() {
        let mut factory = RegionFactory::new();
        let chr = Chromosome::new(vec![
            factory.intergenic("AGTTCG"),
            factory.intergenic("AGTTCG"),
            factory.intergenic("AGTTCG"),
        ]);
        let ids: Vec<RegionId> = chr.regions().iter().map(Region::id).collect();
        assert_eq!(chr.position(ids[0]), Some(0));
        assert_eq!(chr.position(ids[1]), Some(1));
        assert_eq!(chr.position(ids[2]), Some(2));
    }

    #[test]
    fn test_replace_and_insert_after() {
        let mut factory = RegionFactory::new();
        let mut chr = Chromosome::new(vec![
            factory.intergenic("ATCT"),
            factory.intergenic("GGGTGGG"),
            factory.intergenic("AAAGA"),
        ]);
        let middle = chr.regions()[1].id();
        let first_half = factory.intergenic("GGG");
        let first_half_id = first_half.id();
        let removed = chr
            .replace(middle, vec![first_half, factory.intergenic("TGGG")])
            .unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(chr.num_regions(), 4);
        assert_eq!(chr.represent(), "ATCTGGGTGGGAAAGA");

        chr.insert_after(first_half_id, vec![factory.gene("CC", false)])
            .unwrap();
        assert_eq!(chr.represent(), "ATCTGGGCCTGGGAAAGA");
        assert_eq!(chr.regions()[2].represent(), "CC");
    }

    #[test]
    fn test_drain_between() {
        let mut factory = RegionFactory::new();
        let mut chr = Chromosome::parse("AA(CC)GG(TT)AA", false, &mut factory).unwrap();
        let left = chr.regions()[0].id();
        let right = chr.regions()[4].id();

        let moved = chr.drain_between(left, right).unwrap();
        assert_eq!(moved.len(), 3);
        assert_eq!(chr.represent(), "AAAA");

        assert_eq!(
            chr.drain_between(right, left),
            Err(TransformationError::RegionOrder { left: right, right: left })
        );
    }

    #[test]
    fn test_unknown_handle() {
        let mut factory = RegionFactory::new();
        let stranger = factory.intergenic("A").id();
        let mut chr = Chromosome::new(vec![factory.intergenic("C")]);
        assert_eq!(
            chr.insert_after(stranger, vec![]),
            Err(TransformationError::UnknownRegion(stranger))
        );
        assert!(chr.get(stranger).is_none());
    }
}
