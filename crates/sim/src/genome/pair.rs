use std::fmt;

use serde::{Deserialize, Serialize};

use super::Chromosome;

/// One of the two chromosomes of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The two chromosomes a simulation rearranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromosomePair {
    left: Chromosome,
    right: Chromosome,
}

impl ChromosomePair {
    pub fn new(left: Chromosome, right: Chromosome) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn left(&self) -> &Chromosome {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Chromosome {
        &self.right
    }

    pub fn get(&self, side: Side) -> &Chromosome {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Chromosome {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Borrow both chromosomes mutably as `(source, target)`.
    pub fn split_mut(&mut self, source: Side) -> (&mut Chromosome, &mut Chromosome) {
        match source {
            Side::Left => (&mut self.left, &mut self.right),
            Side::Right => (&mut self.right, &mut self.left),
        }
    }

    /// Both sequences concatenated, left first.
    pub fn represent(&self) -> String {
        let mut joined = self.left.represent();
        joined.push_str(&self.right.represent());
        joined
    }

    /// Symbol count over both chromosomes.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn into_inner(self) -> (Chromosome, Chromosome) {
        (self.left, self.right)
    }
}
