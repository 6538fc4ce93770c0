//! Multiset permutation enumeration.
//!
//! [`next_permutation`] rewrites a sequence into its lexicographic successor
//! among the distinct arrangements of the same multiset. Starting from
//! ascending order and stepping until exhaustion visits every distinct
//! arrangement exactly once. [`MultisetPermutations`] wraps this as a lazy,
//! non-restartable sequence.
//!
//! # Examples
//!
//! ```
//! use picross_solver::permutation::{MultisetPermutations, arrangement_count};
//!
//! let all = MultisetPermutations::new(vec![1, 1, 2, 2]).collect::<Vec<_>>();
//! assert_eq!(all.len(), 6);
//! assert_eq!(all[0], [1, 1, 2, 2]);
//! assert_eq!(all[5], [2, 2, 1, 1]);
//! assert_eq!(arrangement_count(2, 2), Some(6));
//! ```

use std::iter::FusedIterator;

/// Advances `seq` to the next distinct arrangement in lexicographic order.
///
/// Returns `false` when `seq` is already in non-increasing order. The
/// sequence is left unchanged in that case.
///
/// # Examples
///
/// ```
/// use picross_solver::permutation::next_permutation;
///
/// let mut seq = [0, 0, 1];
/// assert!(next_permutation(&mut seq));
/// assert_eq!(seq, [0, 1, 0]);
/// assert!(next_permutation(&mut seq));
/// assert_eq!(seq, [1, 0, 0]);
/// assert!(!next_permutation(&mut seq));
/// assert_eq!(seq, [1, 0, 0]);
/// ```
pub fn next_permutation<T>(seq: &mut [T]) -> bool
where
    T: Ord,
{
    if seq.len() < 2 {
        return false;
    }
    let Some(i) = (0..seq.len() - 1).rev().find(|&i| seq[i] < seq[i + 1]) else {
        return false;
    };
    // The suffix after `i` is non-increasing and contains at least one element
    // greater than `seq[i]`.
    let j = (i + 1..seq.len())
        .rev()
        .find(|&j| seq[j] > seq[i])
        .unwrap_or(i + 1);
    seq.swap(i, j);
    seq[i + 1..].reverse();
    true
}

/// Returns the number of distinct arrangements of `zeros` copies of one
/// symbol and `ones` copies of another, `(zeros + ones)! / (zeros! ones!)`.
///
/// Returns `None` on overflow.
#[must_use]
pub fn arrangement_count(zeros: usize, ones: usize) -> Option<u128> {
    let n = u128::try_from(zeros.checked_add(ones)?).ok()?;
    let k = u128::try_from(zeros.min(ones)).ok()?;
    let mut count: u128 = 1;
    for i in 1..=k {
        // `count * (n - k + i)` is always divisible by `i`.
        count = count.checked_mul(n - k + i)? / i;
    }
    Some(count)
}

/// A lazy, finite sequence of the distinct arrangements of a multiset.
///
/// The first arrangement is the ascending sort of the input. Each step
/// produces the lexicographic successor until the sequence is exhausted. The
/// sequence cannot be restarted.
///
/// [`next_arrangement`](Self::next_arrangement) lends the current arrangement
/// without allocating. The [`Iterator`] implementation clones each
/// arrangement into a `Vec`.
#[derive(Debug, Clone)]
pub struct MultisetPermutations<T> {
    seq: Vec<T>,
    started: bool,
    exhausted: bool,
}

impl<T> MultisetPermutations<T>
where
    T: Ord,
{
    /// Creates the sequence from any arrangement of the multiset.
    #[must_use]
    pub fn new(mut seq: Vec<T>) -> Self {
        seq.sort_unstable();
        Self {
            seq,
            started: false,
            exhausted: false,
        }
    }

    /// Returns the next arrangement, or `None` once every arrangement has been
    /// produced.
    pub fn next_arrangement(&mut self) -> Option<&[T]> {
        if self.exhausted {
            return None;
        }
        if self.started && !next_permutation(&mut self.seq) {
            self.exhausted = true;
            return None;
        }
        self.started = true;
        Some(&self.seq)
    }
}

impl<T> Iterator for MultisetPermutations<T>
where
    T: Ord + Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_arrangement().map(<[T]>::to_vec)
    }
}

impl<T> FusedIterator for MultisetPermutations<T> where T: Ord + Clone {}
