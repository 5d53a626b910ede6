//! Hybrid comparison: global alignment first, local alignment on its output.
//!
//! The global stage normalizes both sequences to the same gap structure,
//! capturing overall order correspondence; the local stage then extracts the
//! best contiguous block within that normalized pair, discounting leading and
//! trailing divergence. Note the local stage sees the gap-padded sequences,
//! so two gaps at the same position compare equal and may extend a block.

use crate::GapScoring;
use crate::error::AlignError;
use crate::global::needleman_wunsch;
use crate::local::{LocalAlignment, smith_waterman};

/// Compares two task sequences by global-then-local alignment.
///
/// The score is normalized by the length of the globally aligned second
/// sequence, biasing it toward coverage of `seq2` (the reference side).
pub fn hybrid_alignment<S1: AsRef<str>, S2: AsRef<str>>(
    seq1: &[S1],
    seq2: &[S2],
    scoring: &GapScoring,
) -> Result<LocalAlignment, AlignError> {
    let global = needleman_wunsch(seq1, seq2, scoring)?;
    smith_waterman(&global.seq1, &global.seq2)
}
