//! Spacing factorization and key-length ranking

use crate::kasiski::{KasiskiError, KasiskiResult};
use crate::models::KeyLengthCandidate;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::debug;

/// All divisors of `number` greater than 1, including `number` itself.
///
/// Trial division up to the square root; `number` itself is always present, so
/// a prime spacing still votes for itself as a key length.
pub fn divisors(number: usize) -> KasiskiResult<BTreeSet<usize>> {
    if number <= 1 {
        return Err(KasiskiError::NotFactorable(number));
    }

    let mut factors = BTreeSet::new();
    let mut i = 2;
    while i * i <= number {
        if number % i == 0 {
            factors.insert(i);
            factors.insert(number / i);
        }
        i += 1;
    }
    factors.insert(number);

    Ok(factors)
}

/// Rank candidate key lengths by how many spacings they divide.
///
/// Every spacing is factorized and each of its divisors receives one vote.
/// The result is sorted by votes descending, with ties broken by the smaller
/// length first so output is fully deterministic. `top = Some(n)` truncates
/// the ranking to `n` entries; `Some(0)` yields an empty vector.
///
/// Fails with [`KasiskiError::NotFactorable`] if any spacing is <= 1, which a
/// caller can hit when a sequence repeats at directly adjacent offsets.
pub fn rank_key_lengths(
    spacings: &[usize],
    top: Option<usize>,
) -> KasiskiResult<Vec<KeyLengthCandidate>> {
    let mut votes: FxHashMap<usize, usize> = FxHashMap::default();
    for &spacing in spacings {
        for factor in divisors(spacing)? {
            *votes.entry(factor).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<KeyLengthCandidate> = votes
        .into_iter()
        .map(|(length, votes)| KeyLengthCandidate { length, votes })
        .collect();
    ranked.sort_unstable_by(|a, b| b.votes.cmp(&a.votes).then(a.length.cmp(&b.length)));

    if let Some(n) = top {
        ranked.truncate(n);
    }
    debug!(
        spacings = spacings.len(),
        candidates = ranked.len(),
        "key length ranking done"
    );
    Ok(ranked)
}
