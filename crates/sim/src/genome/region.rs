use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::reverse_complement;

/// Opaque handle of a region.
///
/// Handles are unique within the `RegionFactory` that minted them and are
/// the only way chromosome operations address regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Permanent identity number of a gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ordinal(u64);

impl Ordinal {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a region is, biologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    /// Sequence between genes.
    Intergenic,
    /// A gene with its permanent ordinal.
    Gene { ordinal: Ordinal, essential: bool },
}

/// A contiguous run of symbols inside a chromosome.
///
/// Regions are created through a [`RegionFactory`]; the content can be edited
/// in place by transformations, the handle and the kind never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    id: RegionId,
    kind: RegionKind,
    can_break: bool,
    content: Vec<u8>,
}

impl Region {
    #[inline]
    pub fn id(&self) -> RegionId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    /// Raw symbols of the region.
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a structural mutation may cut this region.
    #[inline]
    pub fn can_break(&self) -> bool {
        self.can_break
    }

    pub fn set_can_break(&mut self, can_break: bool) {
        self.can_break = can_break;
    }

    #[inline]
    pub fn is_gene(&self) -> bool {
        matches!(self.kind, RegionKind::Gene { .. })
    }

    #[inline]
    pub fn is_essential(&self) -> bool {
        matches!(self.kind, RegionKind::Gene { essential: true, .. })
    }

    /// Gene ordinal, `None` for intergenic regions.
    #[inline]
    pub fn ordinal(&self) -> Option<Ordinal> {
        match self.kind {
            RegionKind::Gene { ordinal, .. } => Some(ordinal),
            RegionKind::Intergenic => None,
        }
    }

    /// The content as text.
    pub fn represent(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Replace the content in place.
    pub fn set_content(&mut self, content: Vec<u8>) {
        self.content = content;
    }

    /// Reverse-complement the content in place.
    pub fn reverse(&mut self) {
        self.content = reverse_complement(&self.content);
    }
}

/// Construction context for regions.
///
/// Hands out region handles and gene ordinals from two monotonically
/// increasing counters. Use one factory for every chromosome that can
/// exchange regions with another so handles stay unique across them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionFactory {
    next_id: u64,
    next_ordinal: u64,
}

impl RegionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        id
    }

    fn make(&mut self, kind: RegionKind, can_break: bool, content: &[u8]) -> Region {
        Region {
            id: self.next_id(),
            kind,
            can_break,
            content: content.to_vec(),
        }
    }

    /// A breakable intergenic region.
    pub fn intergenic(&mut self, content: impl AsRef<[u8]>) -> Region {
        self.make(RegionKind::Intergenic, true, content.as_ref())
    }

    /// An intergenic region that cannot break (chromosome ends, coexpression
    /// blocks).
    pub fn non_breakable(&mut self, content: impl AsRef<[u8]>) -> Region {
        self.make(RegionKind::Intergenic, false, content.as_ref())
    }

    /// A gene with the next free ordinal. Genes never break by default.
    pub fn gene(&mut self, content: impl AsRef<[u8]>, essential: bool) -> Region {
        let ordinal = Ordinal(self.next_ordinal);
        self.next_ordinal += 1;
        self.make(RegionKind::Gene { ordinal, essential }, false, content.as_ref())
    }

    /// Number of genes created so far.
    pub fn genes_created(&self) -> u64 {
        self.next_ordinal
    }
}
