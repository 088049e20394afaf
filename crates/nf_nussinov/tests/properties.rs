use std::collections::HashMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use nf_nussinov::can_pair;
use nf_nussinov::NussinovDP;
use nf_nussinov::MIN_HAIRPIN;
use nf_structure::DotBracket;
use nf_structure::DotBracketVec;
use nf_structure::PairSet;
use nf_structure::PairTable;

fn random_sequence(rng: &mut StdRng, len: usize, alphabet: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Exhaustive maximum over all nested pairings of `seq[i..end]`,
/// anchored on the 5' end instead of the 3' end.
fn brute_force_score(seq: &[u8], i: usize, end: usize) -> usize {
    if end <= i {
        return 0;
    }
    let mut best = brute_force_score(seq, i + 1, end);
    for k in i + MIN_HAIRPIN + 1..end {
        if can_pair(seq[i], seq[k]) {
            best = best.max(1 + brute_force_score(seq, i + 1, k) + brute_force_score(seq, k + 1, end));
        }
    }
    best
}

/// All valid nested pairings of `seq[i..end]`.
fn brute_force_structures(seq: &[u8], i: usize, end: usize) -> Vec<Vec<(usize, usize)>> {
    if end <= i {
        return vec![vec![]];
    }
    let mut all = brute_force_structures(seq, i + 1, end);
    for k in i + MIN_HAIRPIN + 1..end {
        if !can_pair(seq[i], seq[k]) {
            continue;
        }
        let inners = brute_force_structures(seq, i + 1, k);
        let rights = brute_force_structures(seq, k + 1, end);
        for inner in &inners {
            for right in &rights {
                let mut s = vec![(i, k)];
                s.extend(inner);
                s.extend(right);
                s.sort_unstable();
                all.push(s);
            }
        }
    }
    all
}

type Memo = HashMap<(usize, usize), usize>;

/// Top-down memoized score of `seq[i..end]`, anchored on the 3' end.
fn reference_score(seq: &[u8], i: usize, end: usize, memo: &mut Memo) -> usize {
    if end <= i + MIN_HAIRPIN + 1 {
        return 0;
    }
    if let Some(&s) = memo.get(&(i, end)) {
        return s;
    }
    let j = end - 1;
    let mut best = reference_score(seq, i, j, memo);
    for t in i..j - MIN_HAIRPIN {
        if can_pair(seq[t], seq[j]) {
            best = best.max(1 + reference_score(seq, i, t, memo) + reference_score(seq, t + 1, j, memo));
        }
    }
    memo.insert((i, end), best);
    best
}

/// Recursive traceback: skip j whenever possible, otherwise pair j with the
/// first partner t that keeps the optimum.
fn reference_traceback(seq: &[u8], i: usize, end: usize, memo: &mut Memo, pairs: &mut Vec<(usize, usize)>) {
    if end <= i + 1 {
        return;
    }
    let j = end - 1;
    let score = reference_score(seq, i, end, memo);
    if score == reference_score(seq, i, j, memo) {
        reference_traceback(seq, i, j, memo, pairs);
        return;
    }
    for t in i..j - MIN_HAIRPIN {
        if can_pair(seq[t], seq[j])
            && score == 1 + reference_score(seq, i, t, memo) + reference_score(seq, t + 1, j, memo)
        {
            pairs.push((t, j));
            reference_traceback(seq, i, t, memo, pairs);
            reference_traceback(seq, t + 1, j, memo, pairs);
            return;
        }
    }
    panic!("no traceback for window ({i}, {j})");
}

fn as_tuples(pairs: &PairSet) -> Vec<(usize, usize)> {
    pairs.to_vec().iter().map(|p| (p.i() as usize, p.j() as usize)).collect()
}

fn check_structure(seq: &[u8], ndp: &NussinovDP) {
    let pairs = ndp.get_max_pairs();
    let db = DotBracketVec::from(&pairs);

    assert_eq!(pairs.len(), ndp.score());
    assert_eq!(pairs.length(), seq.len());
    assert!(pairs.is_nested());
    for p in pairs.iter() {
        assert!(p.span() > MIN_HAIRPIN, "pair {p} too short");
        assert!(can_pair(seq[p.i() as usize], seq[p.j() as usize]), "pair {p} not compatible");
    }

    assert_eq!(db.len(), seq.len());
    assert!(db.is_balanced());
    let opens = db.iter().filter(|&&d| d == DotBracket::Open).count();
    let closes = db.iter().filter(|&&d| d == DotBracket::Close).count();
    assert_eq!(opens, pairs.len());
    assert_eq!(closes, pairs.len());

    // Parsing the rendering back yields the same pairs.
    let pt = PairTable::try_from(&db).unwrap();
    assert_eq!(PairSet::from(&pt), pairs);
}

#[test]
fn test_scenarios() {
    for (seq, count, db) in [
        ("AAAAA", 0, "....."),
        ("AUAUAU", 1, "(....)"),
        ("ACGU", 0, "...."),
    ] {
        let ndp = NussinovDP::from(seq);
        assert_eq!(ndp.get_max_pairs().len(), count, "{seq}");
        assert_eq!(ndp.get_structure().to_string(), db, "{seq}");
    }
}

#[test]
fn test_short_sequences_stay_unpaired() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in 0..=MIN_HAIRPIN + 1 {
        for _ in 0..20 {
            let seq = random_sequence(&mut rng, len, b"ACGU");
            let ndp = NussinovDP::from(seq.as_slice());
            assert!(ndp.get_max_pairs().is_empty());
            assert_eq!(ndp.get_structure(), DotBracketVec::unpaired(len));
        }
    }
}

#[test]
fn test_random_structures_are_valid() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let len = rng.random_range(0..80);
        let seq = random_sequence(&mut rng, len, b"ACGU");
        check_structure(&seq, &NussinovDP::from(seq.as_slice()));
    }
}

#[test]
fn test_random_structures_with_foreign_symbols() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let len = rng.random_range(0..60);
        let seq = random_sequence(&mut rng, len, b"ACGUNTx-");
        let ndp = NussinovDP::from(seq.as_slice());
        check_structure(&seq, &ndp);
        for p in ndp.get_max_pairs().iter() {
            assert!(b"ACGU".contains(&seq[p.i() as usize]));
            assert!(b"ACGU".contains(&seq[p.j() as usize]));
        }
    }
}

#[test]
fn test_table_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..40 {
        let len = rng.random_range(0..13);
        let seq = random_sequence(&mut rng, len, b"ACGU");
        let ndp = NussinovDP::from(seq.as_slice());
        let dp = ndp.score_table();
        for i in 0..len {
            for j in i..len {
                assert_eq!(dp[(i, j)], brute_force_score(&seq, i, j + 1),
                    "{} window ({i}, {j})", String::from_utf8_lossy(&seq));
            }
        }
    }
}

#[test]
fn test_all_max_pairs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..40 {
        let len = rng.random_range(0..12);
        let seq = random_sequence(&mut rng, len, b"GCAU");
        let ndp = NussinovDP::from(seq.as_slice());

        let all = brute_force_structures(&seq, 0, len);
        let best = all.iter().map(|s| s.len()).max().unwrap_or(0);
        let mut expected: Vec<_> = all.into_iter().filter(|s| s.len() == best).collect();
        expected.sort_unstable();

        let mut found: Vec<_> = ndp.all_max_pairs().iter().map(as_tuples).collect();
        found.sort_unstable();

        assert_eq!(best, ndp.score());
        assert_eq!(found, expected, "{}", String::from_utf8_lossy(&seq));
        assert!(found.contains(&as_tuples(&ndp.get_max_pairs())));
    }
}

#[test]
fn test_deterministic_traceback() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let len = rng.random_range(10..100);
        let seq = random_sequence(&mut rng, len, b"ACGU");
        let a = NussinovDP::from(seq.as_slice());
        let b = NussinovDP::from(seq.as_slice());
        assert_eq!(as_tuples(&a.get_max_pairs()), as_tuples(&b.get_max_pairs()));
        assert_eq!(a.get_structure(), b.get_structure());
    }
}

#[test]
fn test_traceback_takes_leftmost_partner() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..400 {
        let len = rng.random_range(0..=70);
        let seq = random_sequence(&mut rng, len, b"ACGUN");
        let ndp = NussinovDP::from(seq.as_slice());

        let mut memo = Memo::new();
        let mut expected = Vec::new();
        reference_traceback(&seq, 0, len, &mut memo, &mut expected);
        expected.sort_unstable();

        assert_eq!(ndp.score(), reference_score(&seq, 0, len, &mut memo));
        assert_eq!(as_tuples(&ndp.get_max_pairs()), expected,
            "{}", String::from_utf8_lossy(&seq));
    }
}
