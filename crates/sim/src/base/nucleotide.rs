use serde::{Deserialize, Serialize};

/// A DNA nucleotide base.
///
/// Backed by a single byte. Parsing accepts upper and lower case, output is
/// always upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }
}

/// Complement a single symbol.
///
/// Bases map to their uppercase pair; anything outside the alphabet is
/// returned unchanged.
#[inline]
pub fn complement_symbol(byte: u8) -> u8 {
    match Nucleotide::from_ascii(byte) {
        Some(nuc) => nuc.complement().to_ascii(),
        None => byte,
    }
}

/// Reverse-complement a run of symbols, the way the opposite strand reads it.
///
/// ```
/// # use genmod_sim::base::reverse_complement;
/// assert_eq!(reverse_complement(b"ATTGTGT"), b"ACACAAT".to_vec());
/// ```
pub fn reverse_complement(symbols: &[u8]) -> Vec<u8> {
    symbols.iter().rev().map(|&b| complement_symbol(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_from_ascii() {
        // Uppercase
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'C'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));

        // Lowercase
        assert_eq!(Nucleotide::from_ascii(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b't'), Some(Nucleotide::T));

        // Invalid
        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'U'), None);
        assert_eq!(Nucleotide::from_ascii(b' '), None);
    }

    #[test]
    fn test_nucleotide_complement() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);

        // Double complement returns original
        assert_eq!(Nucleotide::A.complement().complement(), Nucleotide::A);
        assert_eq!(Nucleotide::C.complement().complement(), Nucleotide::C);
    }

    #[test]
    fn test_complement_symbol() {
        assert_eq!(complement_symbol(b'A'), b'T');
        assert_eq!(complement_symbol(b'g'), b'C');
        // Outside the alphabet
        assert_eq!(complement_symbol(b'D'), b'D');
        assert_eq!(complement_symbol(b'U'), b'U');
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ATTGTGT"), b"ACACAAT");
        assert_eq!(reverse_complement(b""), b"");
        assert_eq!(reverse_complement(b"acgt"), b"ACGT");
    }

    #[test]
    fn test_reverse_complement_twice_restores_uppercase() {
        let original = b"GATTACA";
        assert_eq!(reverse_complement(&reverse_complement(original)), original);
    }

    #[test]
    fn test_nucleotide_size() {
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
