//! The Nussinov score table.
//!
//! Entry `(i, j)` holds the maximum number of base pairs that the window
//! `i..=j` can form. Only the upper triangle `i <= j` is ever written; all
//! windows shorter than `MIN_HAIRPIN + 2` positions keep their initial zero.

use std::fmt;
use std::ops::Index;
use ndarray::Array2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    dp: Array2<usize>,
}

impl ScoreTable {
    /// A zero-filled `n x n` table.
    pub fn new(n: usize) -> Self {
        Self {
            dp: Array2::from_elem((n, n), 0),
        }
    }

    /// Number of rows (= sequence length).
    pub fn len(&self) -> usize {
        self.dp.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Score of the half-open window `i..j_end`; empty windows score 0.
    /// The exclusive end makes the empty window left of position 0 expressible.
    #[inline]
    pub fn window(&self, i: usize, j_end: usize) -> usize {
        if j_end <= i {
            0
        } else {
            self.dp[(i, j_end - 1)]
        }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, score: usize) {
        debug_assert!(i <= j);
        self.dp[(i, j)] = score;
    }

    /// The full table with the lower triangle mirrored from the upper one.
    pub fn mirrored(&self) -> Array2<usize> {
        let mut full = self.dp.clone();
        for i in 0..self.len() {
            for j in 0..i {
                full[(i, j)] = full[(j, i)];
            }
        }
        full
    }

    /// Read-only access to the raw upper-triangular matrix.
    pub fn as_array(&self) -> &Array2<usize> {
        &self.dp
    }
}

impl Index<(usize, usize)> for ScoreTable {
    type Output = usize;

    fn index(&self, ij: (usize, usize)) -> &Self::Output {
        &self.dp[ij]
    }
}

/// Diagnostic dump: one row per line, space separated, mirrored.
impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.mirrored().rows() {
            let mut first = true;
            for v in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
