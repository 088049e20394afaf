//! Pair and PairSet definitions. 
//!
//! Compact integer-based representation of base pairs, the natural output
//! of a traceback. 
//!
//! A `Pair` is defined by two 16-bit indices (`NAIDX`) packed into a
//! 32-bit integer key (`P1KEY`) for efficient set and map storage.
//! Indices are **0-based** throughout.
//! 

use std::fmt;
use nohash_hasher::IntMap;
use nohash_hasher::IntSet;

use crate::PairTable;
use crate::NAIDX;
use crate::P1KEY;


/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    i: NAIDX,
    j: NAIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// Distance `j - i`.
    pub fn span(&self) -> usize {
        (self.j - self.i) as usize
    }

    /// True if the two pairs interleave (i < k < j < l or vice versa).
    pub fn crosses(&self, other: &Pair) -> bool {
        let (a, b) = if self.i < other.i { (self, other) } else { (other, self) };
        b.i < a.j && a.j < b.j
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << NAIDX::BITS) | (self.j as P1KEY)
    }

    /// Decode a key back into a `Pair`.
    pub fn from_key(key: P1KEY) -> Self {
        let i = (key >> NAIDX::BITS) as NAIDX;
        let j = (key & NAIDX::MAX as P1KEY) as NAIDX;
        debug_assert!(i < j);
        Pair { i, j }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// A collection of base pairs represented as compact integer keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSet {
    length: usize,
    pairs: IntSet<P1KEY>,
}

impl PairSet {
    /// Create an empty pair set for a given sequence length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            pairs: IntSet::default(),
        }
    }

    /// Number of pairs contained in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert a new pair; returns true if it was newly inserted.
    pub fn insert(&mut self, pair: Pair) -> bool {
        debug_assert!((pair.j() as usize) < self.length);
        self.pairs.insert(pair.key())
    }

    /// Check if a pair exists in the set.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(&pair.key())
    }

    /// Iterator over all pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().map(|&k| Pair::from_key(k))
    }

    /// Return all pairs as a Vec (for deterministic inspection).
    pub fn to_vec(&self) -> Vec<Pair> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable_by_key(|p| (p.i(), p.j()));
        v
    }

    /// Underlying sequence length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Smallest `j - i` over all pairs, `None` if the set is empty.
    pub fn min_span(&self) -> Option<usize> {
        self.iter().map(|p| p.span()).min()
    }

    /// True if every index is used at most once and no two pairs cross,
    /// i.e. the set can be written in dot-bracket notation.
    pub fn is_nested(&self) -> bool {
        let mut partner: IntMap<NAIDX, NAIDX> = IntMap::default();
        for p in self.iter() {
            if partner.insert(p.i(), p.j()).is_some() || partner.insert(p.j(), p.i()).is_some() {
                return false;
            }
        }
        // Sweep left to right; every closing index must match the innermost open pair.
        let mut stack: Vec<NAIDX> = Vec::new();
        for idx in 0..self.length as NAIDX {
            match partner.get(&idx) {
                Some(&j) if j > idx => stack.push(idx),
                Some(&i) => {
                    if stack.pop() != Some(i) {
                        return false;
                    }
                }
                None => (),
            }
        }
        stack.is_empty()
    }
}

impl From<&PairTable> for PairSet {
    fn from(pt: &PairTable) -> Self {
        let mut pairs = IntSet::default();
        for (i, &j_opt) in pt.iter().enumerate() {
            let i = i as NAIDX;
            if let Some(j) = j_opt {
                if i < j {
                    pairs.insert(Pair::new(i, j).key());
                }
            }
        }
        Self {
            length: pt.len(),
            pairs,
        }
    }
}

impl fmt::Display for PairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pair in self.to_vec() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", pair)?;
            first = false;
        }
        Ok(())
    }
}
