//! The nf_nussinov crate.
//!
//! Base-pair maximization of RNA sequences (Nussinov algorithm):
//!  - canonical Watson-Crick pair compatibility.
//!  - bottom-up fill of the score table.
//!  - traceback of one (or all) maximal pairings.
//!
//! ```
//! use nf_nussinov::NussinovDP;
//!
//! let ndp = NussinovDP::from("AUAUAU");
//! assert_eq!(ndp.score(), 1);
//! assert_eq!(ndp.get_structure().to_string(), "(....)");
//! ```
//!

mod nucleotide;
mod score_table;
mod folding;

pub use nucleotide::*;
pub use score_table::*;
pub use folding::*;

/// Minimum number of unpaired positions enclosed by a base pair.
/// A pair (i, j) therefore requires `j - i > MIN_HAIRPIN`.
pub const MIN_HAIRPIN: usize = 4;

/// Longest sequence that can be folded: pair indices are `NAIDX` (`u16`).
/// Folding is total up to this length; longer input panics.
pub const MAX_LENGTH: usize = nf_structure::NAIDX::MAX as usize;
