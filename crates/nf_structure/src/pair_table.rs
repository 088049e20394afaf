//! PairTable: for every position, the index of its partner (or `None`).

use std::ops::Index;

use crate::DotBracket;
use crate::DotBracketVec;
use crate::StructureError;
use crate::NAIDX;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairTable(pub Vec<Option<NAIDX>>);

impl PairTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Option<NAIDX>> {
        self.0.iter()
    }

    /// Number of base pairs.
    pub fn pair_count(&self) -> usize {
        self.iter()
            .enumerate()
            .filter(|&(i, j)| matches!(j, Some(j) if (*j as usize) > i))
            .count()
    }
}

impl Index<usize> for PairTable {
    type Output = Option<NAIDX>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(dbv: &DotBracketVec) -> Result<Self, Self::Error> {
        if dbv.len() > NAIDX::MAX as usize {
            return Err(StructureError::TooLong(dbv.len()));
        }
        let mut table = vec![None; dbv.len()];
        let mut stack: Vec<usize> = Vec::new();
        for (j, db) in dbv.iter().enumerate() {
            match db {
                DotBracket::Open => stack.push(j),
                DotBracket::Close => {
                    let i = stack.pop().ok_or(StructureError::UnmatchedClose(j))?;
                    table[i] = Some(j as NAIDX);
                    table[j] = Some(i as NAIDX);
                }
                DotBracket::Unpaired => (),
            }
        }
        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }
        Ok(PairTable(table))
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PairTable::try_from(&DotBracketVec::try_from(s)?)
    }
}
