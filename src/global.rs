//! [Needleman-Wunsch](https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm)
//! global alignment over token sequences. Both inputs are aligned end-to-end,
//! with gap markers inserted so the outputs always have equal length.
//!
//! The traceback deliberately prefers a diagonal step whenever the two tokens
//! at the current cell are literally equal, even when a gap direction carries
//! the higher score, and otherwise checks the up direction before left. The
//! exact path matters downstream (the local stage scores whatever this stage
//! produces), so the tie-break order is part of the contract.

use crate::GapScoring;
use crate::error::AlignError;
use crate::matrix::Grid;
use crate::r#const::GAP_MARKER;

/// Two gap-padded sequences of equal length produced by global alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub seq1: Vec<String>,
    pub seq2: Vec<String>,
}

/// Aligns `seq1` against `seq2` end-to-end, returning both sequences padded
/// with [`GAP_MARKER`] to the same length.
///
/// Empty inputs degrade to an all-gap output against the other sequence.
pub fn needleman_wunsch<S1: AsRef<str>, S2: AsRef<str>>(
    seq1: &[S1],
    seq2: &[S2],
    scoring: &GapScoring,
) -> Result<AlignedPair, AlignError> {
    scoring.validate()?;

    let n = seq1.len();
    let m = seq2.len();
    let GapScoring { penalty, reward } = *scoring;

    let mut score: Grid<i32> = Grid::new(n + 1, m + 1)?;

    // Boundary: linear gap cost accumulating from the origin
    for i in 0..=n {
        score[(i, 0)] = penalty * i as i32;
    }
    for j in 0..=m {
        score[(0, j)] = penalty * j as i32;
    }

    for i in 1..=n {
        for j in 1..=m {
            let token_score = if seq1[i - 1].as_ref() == seq2[j - 1].as_ref() {
                reward
            } else {
                penalty
            };
            let diagonal = score[(i - 1, j - 1)] + token_score;
            let up = score[(i - 1, j)] + penalty;
            let left = score[(i, j - 1)] + penalty;

            score[(i, j)] = diagonal.max(up).max(left);
        }
    }

    let mut aligned1 = Vec::with_capacity(n + m);
    let mut aligned2 = Vec::with_capacity(n + m);

    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && seq1[i - 1].as_ref() == seq2[j - 1].as_ref() {
            // Equal tokens always pair up, regardless of which direction
            // carries the max score
            aligned1.push(seq1[i - 1].as_ref().to_owned());
            aligned2.push(seq2[j - 1].as_ref().to_owned());
            i -= 1;
            j -= 1;
        } else if i > 0 && score[(i, j)] == score[(i - 1, j)] + penalty {
            aligned1.push(seq1[i - 1].as_ref().to_owned());
            aligned2.push(GAP_MARKER.to_owned());
            i -= 1;
        } else {
            aligned1.push(GAP_MARKER.to_owned());
            aligned2.push(seq2[j - 1].as_ref().to_owned());
            j -= 1;
        }
    }

    // Traceback walks back-to-front
    aligned1.reverse();
    aligned2.reverse();

    Ok(AlignedPair {
        seq1: aligned1,
        seq2: aligned2,
    })
}
