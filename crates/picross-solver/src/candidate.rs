//! Candidate line construction.
//!
//! A candidate line for a clue of `K` blocks in `N` cells is described by a
//! token sequence of `floating + K` tokens, where `floating` is the number of
//! off cells not needed as mandatory gaps between blocks. Each distinct
//! arrangement of the tokens is exactly one candidate line.

use std::iter::FusedIterator;

use picross_core::{Cell, Clue};

use crate::{SolverError, permutation::MultisetPermutations};

/// One unit of a candidate line layout.
///
/// Floating-off tokens sort before block tokens, so the canonical ascending
/// arrangement places every free off cell before the first block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// A single off cell free to move between blocks.
    FloatingOff,
    /// The next block of the clue, preceded by a mandatory gap unless it is
    /// the first block.
    Block,
}

/// Returns the canonical (ascending) token sequence for `floating` free off
/// cells and `blocks` blocks.
#[must_use]
pub fn canonical_tokens(floating: usize, blocks: usize) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(floating + blocks);
    tokens.resize(floating, Token::FloatingOff);
    tokens.resize(floating + blocks, Token::Block);
    tokens
}

/// Expands a token arrangement into a full candidate line, appending it to
/// `out` after clearing it.
///
/// Block tokens consume the clue's blocks in order.
///
/// # Panics
///
/// Panics if the number of block tokens differs from `clue.len()`.
pub fn expand_into(clue: &Clue, tokens: &[Token], out: &mut Vec<Cell>) {
    let block_tokens = tokens.iter().filter(|&&t| t == Token::Block).count();
    assert_eq!(
        block_tokens,
        clue.len(),
        "arrangement has {block_tokens} block tokens for a clue of {} blocks",
        clue.len()
    );
    out.clear();
    let mut blocks = clue.blocks().iter();
    let mut first_block = true;
    for token in tokens {
        match token {
            Token::FloatingOff => out.push(Cell::Off),
            Token::Block => {
                if !first_block {
                    out.push(Cell::Off);
                }
                first_block = false;
                if let Some(&len) = blocks.next() {
                    out.extend(std::iter::repeat_n(Cell::On, len));
                }
            }
        }
    }
}

/// Expands a token arrangement into a new candidate line.
///
/// # Panics
///
/// Panics if the number of block tokens differs from `clue.len()`.
///
/// # Examples
///
/// ```
/// use picross_core::{Cell, Clue};
/// use picross_solver::candidate::{Token, expand};
///
/// let clue = Clue::new([2, 1])?;
/// let tokens = [Token::Block, Token::FloatingOff, Token::Block];
/// assert_eq!(
///     expand(&clue, &tokens),
///     [Cell::On, Cell::On, Cell::Off, Cell::Off, Cell::On]
/// );
/// # Ok::<(), picross_core::BoardError>(())
/// ```
#[must_use]
pub fn expand(clue: &Clue, tokens: &[Token]) -> Vec<Cell> {
    let mut out = Vec::new();
    expand_into(clue, tokens, &mut out);
    out
}

/// Lazily enumerates every candidate line for a clue in a line of fixed
/// length.
///
/// Candidates are produced in lexicographic order of their token
/// arrangements.
///
/// # Examples
///
/// ```
/// use picross_core::{Cell, Clue};
/// use picross_solver::candidate::Candidates;
///
/// let clue = Clue::new([3])?;
/// let mut candidates = Candidates::new(&clue, 5)?;
/// assert_eq!(candidates.next_candidate().map(<[Cell]>::to_vec), Some(vec![
///     Cell::Off, Cell::Off, Cell::On, Cell::On, Cell::On,
/// ]));
/// assert_eq!(Candidates::new(&clue, 5)?.count(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    clue: &'a Clue,
    arrangements: MultisetPermutations<Token>,
    buffer: Vec<Cell>,
}

impl<'a> Candidates<'a> {
    /// Creates the candidate sequence for `clue` in a line of `len` cells.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::ClueDoesNotFit`] if the clue needs more than
    /// `len` cells.
    pub fn new(clue: &'a Clue, len: usize) -> Result<Self, SolverError> {
        let floating = clue
            .floating_off_count(len)
            .ok_or_else(|| SolverError::ClueDoesNotFit {
                clue: clue.clone(),
                len,
            })?;
        Ok(Self {
            clue,
            arrangements: MultisetPermutations::new(canonical_tokens(floating, clue.len())),
            buffer: Vec::with_capacity(len),
        })
    }

    /// Returns the next candidate line without allocating, or `None` when
    /// every candidate has been produced.
    pub fn next_candidate(&mut self) -> Option<&[Cell]> {
        let tokens = self.arrangements.next_arrangement()?;
        expand_into(self.clue, tokens, &mut self.buffer);
        Some(&self.buffer)
    }
}

impl Iterator for Candidates<'_> {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_candidate().map(<[Cell]>::to_vec)
    }
}

impl FusedIterator for Candidates<'_> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::permutation::arrangement_count;

    fn line(s: &str) -> Vec<Cell> {
        s.chars().filter_map(Cell::from_char).collect()
    }

    #[test]
    fn test_canonical_tokens() {
        use Token::{Block as B, FloatingOff as F};
        assert_eq!(canonical_tokens(2, 3), [F, F, B, B, B]);
        assert!(canonical_tokens(0, 0).is_empty());
    }

    #[test]
    fn test_expand_places_single_gap_between_blocks() {
        use Token::{Block as B, FloatingOff as F};
        let clue = Clue::new([1, 2]).unwrap();
        assert_eq!(expand(&clue, &[B, B, F]), line("#.##."));
        assert_eq!(expand(&clue, &[F, B, B]), line(".#.##"));
        assert_eq!(expand(&clue, &[B, F, B]), line("#..##"));
    }

    #[test]
    #[should_panic(expected = "block tokens")]
    fn test_expand_rejects_block_count_mismatch() {
        use Token::{Block as B, FloatingOff as F};
        let clue = Clue::new([1, 2]).unwrap();
        let _ = expand(&clue, &[B, F, F]);
    }

    #[test]
    fn test_empty_clue_has_single_all_off_candidate() {
        let clue = Clue::empty();
        let all = Candidates::new(&clue, 3).unwrap().collect::<Vec<_>>();
        assert_eq!(all, [line("...")]);
    }

    #[test]
    fn test_full_line_has_single_candidate() {
        let clue = Clue::new([2, 2]).unwrap();
        let all = Candidates::new(&clue, 5).unwrap().collect::<Vec<_>>();
        assert_eq!(all, [line("##.##")]);
    }

    #[test]
    fn test_clue_too_long_is_rejected() {
        let clue = Clue::new([2, 2]).unwrap();
        assert!(matches!(
            Candidates::new(&clue, 4),
            Err(SolverError::ClueDoesNotFit { len: 4, .. })
        ));
    }

    proptest! {
        #[test]
        fn test_candidates_round_trip_to_clue(
            blocks in prop::collection::vec(1usize..4, 0..4),
            extra in 0usize..5,
        ) {
            let clue = Clue::new(blocks).unwrap();
            let len = clue.min_len().unwrap() + extra;
            let mut count = 0usize;
            for candidate in Candidates::new(&clue, len).unwrap() {
                prop_assert_eq!(candidate.len(), len);
                prop_assert_eq!(&Clue::from_cells(&candidate), &clue);
                count += 1;
            }
            let expected = arrangement_count(extra, clue.len()).unwrap();
            prop_assert_eq!(u128::try_from(count).unwrap(), expected);
        }
    }
}
