//! Dot-bracket notation.
//!
//! A `DotBracketVec` has exactly one symbol per sequence position: `(`
//! for the 5' partner of a pair, `)` for the 3' partner and `.` for
//! unpaired positions. Rendering from a `PairSet` needs no validation as
//! long as the pairs are nested, which holds for everything produced by
//! the folding routines.

use std::fmt;
use std::ops::Deref;
use std::ops::DerefMut;

use crate::PairSet;
use crate::StructureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired,
    Open,
    Close,
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
        }
    }
}

impl TryFrom<char> for DotBracket {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            _ => Err(c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    /// All-unpaired structure of the given length.
    pub fn unpaired(length: usize) -> Self {
        DotBracketVec(vec![DotBracket::Unpaired; length])
    }

    /// Number of pairs, i.e. the number of opening brackets.
    pub fn pair_count(&self) -> usize {
        self.iter().filter(|&&db| db == DotBracket::Open).count()
    }

    /// True if no prefix closes more brackets than it opens and all
    /// brackets are closed at the end.
    pub fn is_balanced(&self) -> bool {
        let mut depth: usize = 0;
        for db in self.iter() {
            match db {
                DotBracket::Open => depth += 1,
                DotBracket::Close => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                DotBracket::Unpaired => (),
            }
        }
        depth == 0
    }
}

impl Deref for DotBracketVec {
    type Target = [DotBracket];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DotBracketVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<&PairSet> for DotBracketVec {
    fn from(pairs: &PairSet) -> Self {
        let mut dbv = DotBracketVec::unpaired(pairs.length());
        for pair in pairs.iter() {
            // Pair guarantees i < j, so i is always the opening side.
            dbv[pair.i() as usize] = DotBracket::Open;
            dbv[pair.j() as usize] = DotBracket::Close;
        }
        dbv
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .enumerate()
            .map(|(i, c)| DotBracket::try_from(c)
                .map_err(|c| StructureError::InvalidToken(c, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(DotBracketVec)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &db in self.iter() {
            write!(f, "{}", char::from(db))?;
        }
        Ok(())
    }
}
