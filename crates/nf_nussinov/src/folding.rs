//! Nussinov base-pair maximization.
//!
//! The score table is filled by increasing window length, so that every
//! step of the recurrence only reads windows that are already final:
//!
//! ```text
//! S(i, j) = max( S(i, j-1),
//!                max { 1 + S(i, t-1) + S(t+1, j-1) : i <= t < j - MIN_HAIRPIN, t pairs with j } )
//! ```
//!
//! The traceback then recovers one optimal pairing, always choosing the
//! leftmost partner `t` of `j` among equally good options.

use ahash::AHashMap;
use ahash::AHashSet;
use log::debug;
use log::trace;
use nf_structure::DotBracketVec;
use nf_structure::Pair;
use nf_structure::PairSet;
use nf_structure::NAIDX;
use nf_structure::P1KEY;

use crate::can_pair;
use crate::ScoreTable;
use crate::MAX_LENGTH;
use crate::MIN_HAIRPIN;

/// A sequence together with its filled score table.
#[derive(Debug, Clone)]
pub struct NussinovDP {
    sequence: Vec<u8>,
    dp_table: ScoreTable,
}

/// # Panics
///
/// If the sequence is longer than `MAX_LENGTH`.
impl From<&[u8]> for NussinovDP {
    fn from(sequence: &[u8]) -> Self {
        assert!(
            sequence.len() <= MAX_LENGTH,
            "Sequence of length {} exceeds the index range", sequence.len()
        );
        let dp_table = nussinov(sequence);
        debug!("Filled {0}x{0} score table, optimum: {1} pairs.",
            sequence.len(), dp_table.window(0, sequence.len()));
        Self {
            sequence: sequence.to_vec(),
            dp_table,
        }
    }
}

impl From<&str> for NussinovDP {
    fn from(sequence: &str) -> Self {
        NussinovDP::from(sequence.as_bytes())
    }
}

impl NussinovDP {

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Maximum number of base pairs of the whole sequence.
    pub fn score(&self) -> usize {
        self.dp_table.window(0, self.len())
    }

    pub fn score_table(&self) -> &ScoreTable {
        &self.dp_table
    }

    /// One optimal pairing (leftmost tie-break).
    pub fn get_max_pairs(&self) -> PairSet {
        traceback(&self.sequence, &self.dp_table)
    }

    /// Dot-bracket rendering of `get_max_pairs`.
    pub fn get_structure(&self) -> DotBracketVec {
        DotBracketVec::from(&self.get_max_pairs())
    }

    /// Every optimal pairing, in a deterministic order.
    ///
    /// The number of co-optimal structures can grow exponentially with the
    /// sequence length, use with care.
    pub fn all_max_pairs(&self) -> Vec<PairSet> {
        let length = self.len();
        let mut memo: AHashMap<P1KEY, AHashSet<Vec<P1KEY>>> = AHashMap::default();
        let mut as_keys: Vec<Vec<P1KEY>> = traceback_all(0, length, &self.sequence, &self.dp_table, &mut memo)
            .into_iter()
            .collect();
        as_keys.sort_unstable();
        as_keys.into_iter()
            .map(|ps| {
                let mut pset = PairSet::new(length);
                for p1key in ps {
                    pset.insert(Pair::from_key(p1key));
                }
                pset
            })
        .collect()
    }

    pub fn all_max_structs(&self) -> Vec<DotBracketVec> {
        self.all_max_pairs()
            .iter()
            .map(DotBracketVec::from)
            .collect()
    }
}

/// Fill the score table bottom-up by increasing window length.
fn nussinov(seq: &[u8]) -> ScoreTable {
    let n = seq.len();
    let mut dp = ScoreTable::new(n);
    for l in MIN_HAIRPIN + 1..n {
        for i in 0..n - l {
            let j = i + l;
            let score = best_score(seq, &dp, i, j);
            dp.set(i, j, score);
        }
    }
    dp
}

/// Evaluate the recurrence for window (i, j), where `j - i > MIN_HAIRPIN`.
fn best_score(seq: &[u8], dp: &ScoreTable, i: usize, j: usize) -> usize {
    debug_assert!(j - i > MIN_HAIRPIN);
    let mut best = dp[(i, j - 1)];
    for t in i..j - MIN_HAIRPIN {
        if can_pair(seq[t], seq[j]) {
            best = best.max(1 + dp.window(i, t) + dp[(t + 1, j - 1)]);
        }
    }
    best
}

/// Single traceback over the filled table. Windows are half-open
/// `(start, end)` and kept on an explicit stack instead of recursing.
fn traceback(seq: &[u8], dp: &ScoreTable) -> PairSet {
    let mut pairs = PairSet::new(seq.len());
    let mut stack: Vec<(usize, usize)> = vec![(0, seq.len())];

    while let Some((i, end)) = stack.pop() {
        if end <= i + 1 {
            continue;
        }
        let j = end - 1;
        let score = dp[(i, j)];

        if score == dp[(i, j - 1)] {
            trace!("({i}, {j}): {j} unpaired");
            stack.push((i, j));
            continue;
        }

        let Some(t) = (i..j.saturating_sub(MIN_HAIRPIN)).find(|&t| {
            can_pair(seq[t], seq[j]) && score == 1 + dp.window(i, t) + dp[(t + 1, j - 1)]
        }) else {
            panic!("Inconsistent score table: no traceback for window ({i}, {j}).");
        };

        trace!("({i}, {j}): pair ({t}, {j})");
        pairs.insert(Pair::new(t as NAIDX, j as NAIDX));
        // Left window is resolved first.
        stack.push((t + 1, j));
        stack.push((i, t));
    }
    pairs
}

fn traceback_all(
    i: usize,
    end: usize,
    seq: &[u8],
    dp: &ScoreTable,
    memo: &mut AHashMap<P1KEY, AHashSet<Vec<P1KEY>>>,
) -> AHashSet<Vec<P1KEY>> {
    // Score 0 admits only the empty structure.
    if end <= i + 1 || dp.window(i, end) == 0 {
        return AHashSet::from([vec![]]);
    }
    let j = end - 1;
    let key = Pair::new(i as NAIDX, j as NAIDX).key();

    if let Some(cached) = memo.get(&key) {
        return cached.clone();
    }

    let mut results = AHashSet::default();
    let dp_ij = dp[(i, j)];

    // Case 1: j unpaired
    if dp_ij == dp[(i, j - 1)] {
        for sub in traceback_all(i, j, seq, dp, memo) {
            results.insert(sub);
        }
    }

    // Case 2: t-j paired
    for t in i..j.saturating_sub(MIN_HAIRPIN) {
        if !can_pair(seq[t], seq[j]) || dp_ij != 1 + dp.window(i, t) + dp[(t + 1, j - 1)] {
            continue;
        }
        let lefts = traceback_all(i, t, seq, dp, memo);
        let inners = traceback_all(t + 1, j, seq, dp, memo);
        let pkey = Pair::new(t as NAIDX, j as NAIDX).key();

        for left in &lefts {
            for inner in &inners {
                let mut combined = left.clone();
                combined.extend(inner);
                combined.push(pkey);
                combined.sort_unstable();
                results.insert(combined);
            }
        }
    }
    memo.insert(key, results.clone());
    results
}
