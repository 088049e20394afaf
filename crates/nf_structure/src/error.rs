use std::fmt;
use std::error;

/// Errors raised while parsing or converting secondary structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// An opening bracket at this position was never closed.
    UnmatchedOpen(usize),

    /// A closing bracket at this position has no opening partner.
    UnmatchedClose(usize),

    /// A character that is not part of dot-bracket notation.
    InvalidToken(char, usize),

    /// The structure is longer than `NAIDX` can address.
    TooLong(usize),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedOpen(i) => write!(f, "Unmatched '(' at position {i}"),
            Self::UnmatchedClose(i) => write!(f, "Unmatched ')' at position {i}"),
            Self::InvalidToken(c, i) => write!(f, "Invalid character '{c}' at position {i}"),
            Self::TooLong(n) => write!(f, "Structure of length {n} exceeds the index range"),
        }
    }
}

impl error::Error for StructureError {}
