use podsearch_feed::FlatRecord;
use rand::Rng;
use rand::seq::IteratorRandom;

/// Candidate pool handed to the reranker per query. Fixed regardless of
/// the caller's requested result limit so reranking cost stays stable.
pub const DEFAULT_CANDIDATE_POOL: usize = 1000;

/// Draw up to `k` records uniformly without replacement in a single pass
/// over the stream (reservoir sampling). Returns `min(k, corpus size)`
/// records; a short corpus is returned whole.
pub fn sample<I, R>(records: I, k: usize, rng: &mut R) -> Vec<FlatRecord>
where
    I: IntoIterator<Item = FlatRecord>,
    R: Rng + ?Sized,
{
    if k == 0 {
        return Vec::new();
    }
    records.into_iter().choose_multiple(rng, k)
}

/// [`sample`] with the thread-local RNG.
pub fn sample_default<I>(records: I, k: usize) -> Vec<FlatRecord>
where
    I: IntoIterator<Item = FlatRecord>,
{
    sample(records, k, &mut rand::rng())
}
