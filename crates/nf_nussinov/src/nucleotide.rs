//! RNA nucleotides and the pair compatibility rule.
//!
//! Only the four canonical Watson-Crick pairs A-U, U-A, C-G and G-C are
//! recognized; G-U wobble pairs are not. Bytes outside of `ACGU` (including
//! lowercase letters and `T`) never pair with anything.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    U,
}

impl Nucleotide {
    /// The Watson-Crick partner of this nucleotide.
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::U,
            Nucleotide::U => Nucleotide::A,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
        }
    }

    pub fn pairs_with(self, other: Self) -> bool {
        self.complement() == other
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = u8;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        match b {
            b'A' => Ok(Nucleotide::A),
            b'C' => Ok(Nucleotide::C),
            b'G' => Ok(Nucleotide::G),
            b'U' => Ok(Nucleotide::U),
            _ => Err(b),
        }
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> Self {
        match n {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::U => 'U',
        }
    }
}

/// Returns true if the two sequence symbols can form a base pair.
#[inline]
pub fn can_pair(a: u8, b: u8) -> bool {
    match (Nucleotide::try_from(a), Nucleotide::try_from(b)) {
        (Ok(x), Ok(y)) => x.pairs_with(y),
        _ => false,
    }
}
