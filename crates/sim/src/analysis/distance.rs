//! Edit distances between sequences.

use crate::genome::ChromosomePair;

const WORD: usize = u64::BITS as usize;
const HIGH_BIT: u64 = 1 << (WORD - 1);

/// Levenshtein distance between two symbol strings.
///
/// Shared prefixes and suffixes are trimmed first, then the remaining core
/// runs through Myers' bit-vector algorithm in blocks of 64 rows, so a
/// column of the dynamic programming matrix costs one word operation per
/// 64 symbols of the shorter input.
///
/// # Examples
///
/// ```
/// use genmod_sim::analysis::edit_distance;
///
/// assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
/// assert_eq!(edit_distance(b"ACGT", b"ACGT"), 0);
/// ```
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    // Bit vectors run over the shorter input
    let (text, pattern) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if pattern.is_empty() {
        return text.len();
    }
    myers_distance(pattern, text)
}

/// Global edit distance with the pattern split into 64-row blocks.
fn myers_distance(pattern: &[u8], text: &[u8]) -> usize {
    let blocks = pattern.len().div_ceil(WORD);

    // Match masks, one run of `blocks` words per symbol present in the pattern
    let mut slot = [usize::MAX; 256];
    let mut peq: Vec<u64> = Vec::new();
    for (row, &symbol) in pattern.iter().enumerate() {
        let s = &mut slot[usize::from(symbol)];
        if *s == usize::MAX {
            *s = peq.len() / blocks;
            peq.resize(peq.len() + blocks, 0);
        }
        peq[*s * blocks + row / WORD] |= 1u64 << (row % WORD);
    }
    let no_match = vec![0u64; blocks];
    // Bit of the pattern's last row inside the last block
    let last_row = 1u64 << ((pattern.len() - 1) % WORD);

    let mut positive = vec![u64::MAX; blocks];
    let mut negative = vec![0u64; blocks];
    let mut score = pattern.len();
    for &symbol in text {
        let eq = match slot[usize::from(symbol)] {
            usize::MAX => &no_match[..],
            s => &peq[s * blocks..(s + 1) * blocks],
        };
        // Top row of the matrix grows by one per column
        let mut carry = 1;
        for b in 0..blocks {
            let high = if b + 1 == blocks { last_row } else { HIGH_BIT };
            carry = advance_block(&mut positive[b], &mut negative[b], eq[b], carry, high);
        }
        score = score.wrapping_add_signed(carry);
    }
    score
}

/// Advance one block by a text column.
///
/// `positive`/`negative` hold the +1/-1 vertical deltas of the block's rows,
/// `carry` is the horizontal delta entering at the top. Returns the
/// horizontal delta at the row marked by `high`.
#[inline(always)]
fn advance_block(
    positive: &mut u64,
    negative: &mut u64,
    eq: u64,
    carry: isize,
    high: u64,
) -> isize {
    let (pv, mv) = (*positive, *negative);
    let xv = eq | mv;
    let eq = if carry < 0 { eq | 1 } else { eq };
    let xh = ((eq & pv).wrapping_add(pv) ^ pv) | eq;
    let mut ph = mv | !(xh | pv);
    let mut mh = pv & xh;

    let carry_out = if ph & high != 0 {
        1
    } else if mh & high != 0 {
        -1
    } else {
        0
    };

    ph <<= 1;
    mh <<= 1;
    if carry < 0 {
        mh |= 1;
    } else if carry > 0 {
        ph |= 1;
    }
    *positive = mh | !(xv | ph);
    *negative = ph & xv;
    carry_out
}

/// Distance between the concatenated sequences of two chromosome pairs.
pub fn pair_distance(original: &ChromosomePair, current: &ChromosomePair) -> usize {
    edit_distance(original.represent().as_bytes(), current.represent().as_bytes())
}
