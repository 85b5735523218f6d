//! Injectable randomness for option shuffling.
//!
//! Quiz generation is deterministic apart from the order of answer options.
//! That order comes from a [`ShuffleSource`], so production code can use a
//! real RNG while tests replay a fixed sequence and assert exact layouts.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Supplies the random indices consumed by [`shuffle`].
pub trait ShuffleSource {
    /// Return an index in `0..bound`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// A [`ShuffleSource`] backed by any [`rand::Rng`].
///
/// ```rust
/// use notefi_core::shuffle::{shuffle, RngShuffle};
/// use rand::SeedableRng;
///
/// let mut source = RngShuffle::new(rand::rngs::StdRng::seed_from_u64(7));
/// let mut items = vec![1, 2, 3, 4];
/// shuffle(&mut items, &mut source);
/// items.sort();
/// assert_eq!(items, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct RngShuffle<R> {
    rng: R,
}

impl<R: Rng> RngShuffle<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffle<ThreadRng> {
    /// Shuffle source drawing from the thread-local entropy-seeded RNG.
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> ShuffleSource for RngShuffle<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound. An empty sequence
/// always yields `0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceShuffle {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceShuffle {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source under which [`shuffle`] leaves every slice in its original order.
    pub fn identity() -> Self {
        Self::new(Vec::new())
    }
}

impl ShuffleSource for SequenceShuffle {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            // Fisher–Yates with j == k at every step is the identity.
            return bound - 1;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

/// Unbiased in-place Fisher–Yates shuffle.
///
/// Walks `k` from the last index down to 1, swapping `items[k]` with
/// `items[j]` where `j = source.next_index(k + 1)`.
pub fn shuffle<T>(items: &mut [T], source: &mut dyn ShuffleSource) {
    for k in (1..items.len()).rev() {
        let j = source.next_index(k + 1);
        items.swap(k, j);
    }
}
