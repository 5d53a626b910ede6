//! [Smith-Waterman](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm)
//! local alignment over token sequences. Finds the best-scoring contiguous
//! block shared by the two inputs, ignoring unmatched flanks, and reduces it
//! to a similarity score in `[0, 1]`.
//!
//! Two behaviors here are load-bearing for score reproducibility and must not
//! be changed to the textbook convention:
//! - trace labels resolve ties as Stop, then Left, then Up, then Diagonal;
//! - max tracking compares with `>=` during the row-major fill, so the last
//!   cell reaching the maximum becomes the traceback start.

use crate::error::AlignError;
use crate::matrix::Grid;
use crate::r#const::{GAP_MARKER, LOCAL_GAP_PENALTY, LOCAL_MATCH_SCORE, LOCAL_MISMATCH_PENALTY};

/// Predecessor direction that produced a cell's winning score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Trace {
    #[default]
    Stop,
    Left,
    Up,
    Diagonal,
}

/// The best local block shared by two sequences, plus its normalized score.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalAlignment {
    pub seq1: Vec<String>,
    pub seq2: Vec<String>,
    /// `(aligned length - gaps on the seq2 side) / len(seq2)`, or `0.0` when
    /// fewer than 2 positions aligned. Normalized by the second sequence only,
    /// which treats it as the reference length.
    pub score: f64,
}

/// Finds the best-scoring contiguous match between `seq1` and `seq2`.
///
/// Scoring is fixed: +1 match, -1 mismatch, -1 gap. An input pair with no
/// positive-scoring cell yields empty sequences and a score of `0.0`.
pub fn smith_waterman<S1: AsRef<str>, S2: AsRef<str>>(
    seq1: &[S1],
    seq2: &[S2],
) -> Result<LocalAlignment, AlignError> {
    let n = seq1.len();
    let m = seq2.len();

    let mut score: Grid<i32> = Grid::new(n + 1, m + 1)?;
    let mut trace: Grid<Trace> = Grid::new(n + 1, m + 1)?;

    // (0, 0) carries a Stop label, so an all-zero matrix traces back to an
    // empty alignment from the sentinel
    let mut max_score = -1;
    let mut max_index = (0, 0);

    for i in 1..=n {
        for j in 1..=m {
            let token_score = if seq1[i - 1].as_ref() == seq2[j - 1].as_ref() {
                LOCAL_MATCH_SCORE
            } else {
                LOCAL_MISMATCH_PENALTY
            };
            let diagonal = score[(i - 1, j - 1)] + token_score;
            let vertical = score[(i - 1, j)] + LOCAL_GAP_PENALTY;
            let horizontal = score[(i, j - 1)] + LOCAL_GAP_PENALTY;

            // The zero floor restarts the alignment at any cell whose best
            // predecessor is non-positive
            let best = 0.max(diagonal).max(vertical).max(horizontal);
            score[(i, j)] = best;

            trace[(i, j)] = if best == 0 {
                Trace::Stop
            } else if best == horizontal {
                Trace::Left
            } else if best == vertical {
                Trace::Up
            } else {
                Trace::Diagonal
            };

            // >= so the last maximal cell in fill order wins
            if best >= max_score {
                max_score = best;
                max_index = (i, j);
            }
        }
    }

    let mut aligned1 = Vec::new();
    let mut aligned2 = Vec::new();

    let (mut i, mut j) = max_index;
    loop {
        match trace[(i, j)] {
            Trace::Stop => break,
            Trace::Diagonal => {
                aligned1.push(seq1[i - 1].as_ref().to_owned());
                aligned2.push(seq2[j - 1].as_ref().to_owned());
                i -= 1;
                j -= 1;
            }
            Trace::Up => {
                aligned1.push(seq1[i - 1].as_ref().to_owned());
                aligned2.push(GAP_MARKER.to_owned());
                i -= 1;
            }
            Trace::Left => {
                aligned1.push(GAP_MARKER.to_owned());
                aligned2.push(seq2[j - 1].as_ref().to_owned());
                j -= 1;
            }
        }
    }

    aligned1.reverse();
    aligned2.reverse();

    let score = similarity(&aligned2, m);

    Ok(LocalAlignment {
        seq1: aligned1,
        seq2: aligned2,
        score,
    })
}

/// Coverage of the second sequence by non-gap aligned positions. Alignments
/// shorter than 2 positions score zero outright.
fn similarity(aligned2: &[String], seq2_len: usize) -> f64 {
    if aligned2.len() < 2 {
        return 0.0;
    }

    let gaps = aligned2
        .iter()
        .filter(|token| token.as_str() == GAP_MARKER)
        .count();
    (aligned2.len() - gaps) as f64 / seq2_len as f64
}
